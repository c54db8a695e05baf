/*
 * Responsibility
 * - /qalib 系 handler (access gate 通過後のみ到達)
 */
use axum::Json;

use crate::{
    api::v1::extractors::QalibCtxExtractor, error::ApiBody, services::qalib::QalibInfo,
};

/// GET /qalib/info: the caller's own feature store record.
pub async fn qalib_info(QalibCtxExtractor(ctx): QalibCtxExtractor) -> Json<ApiBody<QalibInfo>> {
    Json(ApiBody::ok(ctx.info))
}
