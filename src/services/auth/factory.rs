/// Factory: build `AccessGate` from application `Config` and an identity cache.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::{AccessGate, HxdTokenDecoder, HxdTokenError};
use crate::services::qalib::QalibInfoCache;

pub fn build_access_gate(
    config: &Config,
    cache: Arc<dyn QalibInfoCache>,
) -> Result<Arc<AccessGate>, HxdTokenError> {
    let decoder = HxdTokenDecoder::new(
        config.cookie_key.clone(),
        &config.token_key,
        config.token_issuer.as_deref(),
        config.token_audience.as_deref(),
        config.access_token_leeway_seconds,
    )?;

    Ok(Arc::new(AccessGate::new(decoder, cache)))
}
