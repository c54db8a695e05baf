/*
 * Responsibility
 * - アプリ共通の ApiError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - 業務エラー (BizCode) は既存クライアント互換のため HTTP 200 + body で返す
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::AccessError;

/// Stable business error codes. Clients branch on `code`, not on HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BizCode {
    QalibApiNoAccess,
    QalibInfoNotFound,
}

impl BizCode {
    pub fn code(&self) -> &'static str {
        match self {
            BizCode::QalibApiNoAccess => "ERR_QALIB_API_NO_ACCESS",
            BizCode::QalibInfoNotFound => "ERR_QALIB_INFO_NOT_FOUND",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            BizCode::QalibApiNoAccess => "must login before accessing this feature",
            BizCode::QalibInfoNotFound => "qalib info not found, please login again",
        }
    }
}

/// JSON envelope shared by success and business-error responses.
#[derive(Debug, Serialize)]
pub struct ApiBody<T: Serialize> {
    pub code: &'static str,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiBody<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: "OK",
            message: "ok".to_string(),
            data: Some(data),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}: {}", .0.code(), .0.message())]
    Biz(BizCode),
    #[error("internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            // 200 on purpose: the error is carried by the body.
            AppError::Biz(biz) => (StatusCode::OK, biz.code(), biz.message().to_string()),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                "internal server error".into(),
            ),
        };

        let body: ApiBody<()> = ApiBody {
            code,
            message,
            data: None,
        };

        (status, Json(body)).into_response()
    }
}

impl From<AccessError> for AppError {
    fn from(e: AccessError) -> Self {
        match e {
            AccessError::NoAccess { .. } => AppError::Biz(BizCode::QalibApiNoAccess),
            AccessError::InfoNotFound { .. } => AppError::Biz(BizCode::QalibInfoNotFound),
            // Backend faults are infrastructure failures, not rejections.
            AccessError::Cache(_) => AppError::Internal,
        }
    }
}
