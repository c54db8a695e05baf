//! `hxd_token` cookie 検証 → QalibCtx を extensions に入れる
//!
//! - cookie の JWT を検証し、`jti` (feature store id) で qalib info cache を引く
//! - 失敗時は HTTP 200 + `{code, message}` (既存クライアント互換)
//! - cache backend 障害は 500 (拒否ではなくインフラ障害)

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::QalibCtx;
use crate::error::AppError;
use crate::services::auth::AccessError;
use crate::state::AppState;

/// 保護したい Router に qalib access gate を掛ける。
///
/// 例：
/// ```ignore
/// let protected = Router::new().route("/qalib/info", get(qalib_info));
/// let protected = middleware::auth::access::apply(protected, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let info = match state.gate.check(req.headers()).await {
        Ok(info) => info,
        Err(AccessError::Cache(err)) => {
            tracing::error!(error = %err, "qalib info cache lookup failed");
            return Err(AppError::Internal);
        }
        // NoAccess / InfoNotFound are already logged by the gate
        Err(err) => return Err(err.into()),
    };

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(QalibCtx::new(info));

    Ok(next.run(req).await)
}
