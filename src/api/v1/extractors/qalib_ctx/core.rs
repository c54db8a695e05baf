use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::{AppError, BizCode};
use crate::state::AppState;

use super::QalibCtx;

/// Handler で QalibCtx を受け取るための extractor
/// access middleware が QalibCtx を request.extensions() に insert 済みである前提
/// 見つからない場合（ミドルウェア未設定）は NO_ACCESS を返す
pub struct QalibCtxExtractor(pub QalibCtx);

impl FromRequestParts<AppState> for QalibCtxExtractor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<QalibCtx>()
            .cloned()
            .map(QalibCtxExtractor)
            .ok_or(AppError::Biz(BizCode::QalibApiNoAccess))
    }
}
