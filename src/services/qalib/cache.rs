//! Read-only lookup of `QalibInfo` records by feature store id.
use std::sync::Arc;

use async_trait::async_trait;

use crate::services::cache::{CacheClient, CacheError, CacheResult, ValkeyClient};
use crate::services::qalib::QalibInfo;

/// Identity cache as seen by the access gate.
///
/// - `Ok(Some(_))`: record exists
/// - `Ok(None)`: never provisioned or already evicted (definitive miss)
/// - `Err(_)`: backend failure
#[async_trait]
pub trait QalibInfoCache: Send + Sync {
    async fn get_qalib_info(&self, feature_store_id: &str) -> CacheResult<Option<QalibInfo>>;
}

/// `QalibInfoCache` backed by a Valkey hash: `HGET <hash_key> <feature_store_id>`
/// holding the record as JSON.
#[derive(Clone, Debug)]
pub struct ValkeyQalibCache<C: CacheClient> {
    cache: Arc<C>,
    hash_key: String,
}

impl ValkeyQalibCache<ValkeyClient> {
    pub async fn connect(redis_url: &str, hash_key: impl Into<String>) -> Result<Self, CacheError> {
        let client = ValkeyClient::new(redis_url).await?;
        Ok(Self::new_with_cache(Arc::new(client), hash_key))
    }
}

impl<C: CacheClient> ValkeyQalibCache<C> {
    pub fn new_with_cache(cache: Arc<C>, hash_key: impl Into<String>) -> Self {
        Self {
            cache,
            hash_key: hash_key.into(),
        }
    }
}

#[async_trait]
impl<C: CacheClient> QalibInfoCache for ValkeyQalibCache<C> {
    async fn get_qalib_info(&self, feature_store_id: &str) -> CacheResult<Option<QalibInfo>> {
        let Some(raw) = self.cache.hget_string(&self.hash_key, feature_store_id).await? else {
            return Ok(None);
        };

        let mut info: QalibInfo = serde_json::from_str(&raw).map_err(|e| {
            tracing::warn!(
                backend = self.cache.backend_name(),
                feature_store_id,
                error = %e,
                "cached qalib info is not valid json"
            );
            CacheError::InvalidValue(e.to_string())
        })?;

        // Older records were stored without their own id.
        if info.feature_store_id.is_empty() {
            info.feature_store_id = feature_store_id.to_string();
        }

        Ok(Some(info))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Clone, Default)]
    struct MapCache {
        entries: HashMap<(String, String), String>,
        fail: bool,
    }

    impl MapCache {
        fn with(mut self, key: &str, field: &str, value: &str) -> Self {
            self.entries
                .insert((key.to_string(), field.to_string()), value.to_string());
            self
        }
    }

    #[async_trait]
    impl CacheClient for MapCache {
        fn backend_name(&self) -> &'static str {
            "map"
        }

        async fn hget_string(&self, key: &str, field: &str) -> CacheResult<Option<String>> {
            if self.fail {
                return Err(CacheError::BackendConnection("down".into()));
            }
            Ok(self
                .entries
                .get(&(key.to_string(), field.to_string()))
                .cloned())
        }
    }

    const HASH: &str = "HuixiangDou:qalib:info";

    #[tokio::test]
    async fn hit_returns_decoded_record() {
        let backend = MapCache::default().with(
            HASH,
            "lib-42",
            r#"{"featureStoreId":"lib-42","name":"demo"}"#,
        );
        let cache = ValkeyQalibCache::new_with_cache(Arc::new(backend), HASH);

        let info = cache.get_qalib_info("lib-42").await.unwrap().unwrap();
        assert_eq!(info.feature_store_id, "lib-42");
        assert_eq!(info.name.as_deref(), Some("demo"));
    }

    #[tokio::test]
    async fn record_without_id_is_keyed_by_lookup_id() {
        let backend = MapCache::default().with(HASH, "lib-7", r#"{"name":"demo"}"#);
        let cache = ValkeyQalibCache::new_with_cache(Arc::new(backend), HASH);

        let info = cache.get_qalib_info("lib-7").await.unwrap().unwrap();
        assert_eq!(info.feature_store_id, "lib-7");
    }

    #[tokio::test]
    async fn miss_is_none() {
        let backend = MapCache::default().with("other:hash", "lib-42", "{}");
        let cache = ValkeyQalibCache::new_with_cache(Arc::new(backend), HASH);

        assert!(cache.get_qalib_info("lib-42").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_value_is_an_invalid_value_error() {
        let backend = MapCache::default().with(HASH, "lib-42", "not json");
        let cache = ValkeyQalibCache::new_with_cache(Arc::new(backend), HASH);

        let err = cache.get_qalib_info("lib-42").await.unwrap_err();
        assert!(matches!(err, CacheError::InvalidValue(_)));
    }

    #[tokio::test]
    async fn backend_failure_propagates() {
        let backend = MapCache {
            fail: true,
            ..MapCache::default()
        };
        let cache = ValkeyQalibCache::new_with_cache(Arc::new(backend), HASH);

        let err = cache.get_qalib_info("lib-42").await.unwrap_err();
        assert!(matches!(err, CacheError::BackendConnection(_)));
    }
}
