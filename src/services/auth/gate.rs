use std::{fmt, sync::Arc};

use axum::http::HeaderMap;
use thiserror::Error;

use crate::services::auth::hxd_token::HxdTokenDecoder;
use crate::services::cache::CacheError;
use crate::services::qalib::{QalibInfo, QalibInfoCache};

/// Why a request was answered with `ERR_QALIB_API_NO_ACCESS`.
///
/// Only used for logging; clients always see the same code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoAccessReason {
    MissingCookie,
    InvalidToken,
    MissingJti,
}

impl NoAccessReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingCookie => "missing_cookie",
            Self::InvalidToken => "invalid_token",
            Self::MissingJti => "missing_jti",
        }
    }
}

impl fmt::Display for NoAccessReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum AccessError {
    #[error("no access ({reason})")]
    NoAccess { reason: NoAccessReason },

    #[error("qalib info not found: {feature_store_id}")]
    InfoNotFound { feature_store_id: String },

    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Cookie token -> qalib info gate.
///
/// Holds no mutable state; one instance is shared by every request.
#[derive(Clone)]
pub struct AccessGate {
    decoder: HxdTokenDecoder,
    cache: Arc<dyn QalibInfoCache>,
}

impl fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessGate")
            .field("decoder", &self.decoder)
            .finish_non_exhaustive()
    }
}

impl AccessGate {
    pub fn new(decoder: HxdTokenDecoder, cache: Arc<dyn QalibInfoCache>) -> Self {
        Self { decoder, cache }
    }

    /// Resolve the request's `hxd_token` cookie into the cached `QalibInfo`.
    ///
    /// Short-circuits on the first failure:
    /// 1. no cookie / undecodable token / empty `jti` -> `NoAccess`
    /// 2. `jti` unknown to the cache -> `InfoNotFound`
    ///
    /// Cache backend failures surface as `Cache` and are not logged here.
    /// The success path logs nothing.
    pub async fn check(&self, headers: &HeaderMap) -> Result<QalibInfo, AccessError> {
        let token = match self.decoder.token_from_headers(headers) {
            Ok(token) => token,
            Err(err) => {
                tracing::error!(
                    reason = NoAccessReason::InvalidToken.as_str(),
                    error = %err,
                    "[access] invalid request, need login to feature store first"
                );
                return Err(AccessError::NoAccess {
                    reason: NoAccessReason::InvalidToken,
                });
            }
        };

        let Some(token) = token else {
            return Err(no_access(NoAccessReason::MissingCookie));
        };
        let Some(feature_store_id) = token.subject_id() else {
            return Err(no_access(NoAccessReason::MissingJti));
        };

        match self.cache.get_qalib_info(feature_store_id).await? {
            Some(info) => Ok(info),
            None => {
                tracing::error!(
                    feature_store_id,
                    "[access] invalid login, feature_store_id not exists"
                );
                Err(AccessError::InfoNotFound {
                    feature_store_id: feature_store_id.to_string(),
                })
            }
        }
    }
}

fn no_access(reason: NoAccessReason) -> AccessError {
    tracing::error!(
        reason = reason.as_str(),
        "[access] invalid request, need login to feature store first"
    );
    AccessError::NoAccess { reason }
}
