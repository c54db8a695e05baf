/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health は公開、/qalib 配下は access gate (cookie token) の内側
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{health::health, qalib::qalib_info};
use crate::middleware::auth::access;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new().route("/qalib/info", get(qalib_info));

    Router::new()
        .route("/health", get(health))
        .merge(access::apply(protected, state))
}
