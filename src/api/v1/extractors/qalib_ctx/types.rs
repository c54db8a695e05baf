/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - access middleware が cookie token を検証して request extensions に格納する
 */
use crate::services::qalib::QalibInfo;

/// 認証済みリクエストに付与されるコンテキスト
///
/// - `info` は cookie の `jti` で引いた feature store の情報
#[derive(Debug, Clone)]
pub struct QalibCtx {
    pub info: QalibInfo,
}

impl QalibCtx {
    pub fn new(info: QalibInfo) -> Self {
        Self { info }
    }
}
