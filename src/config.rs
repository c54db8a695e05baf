/*
 * Responsibility
 * - 環境変数や設定の読み込み (REDIS_URL, cookie 名, JWT 鍵, CORS 許可など)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_COOKIE_KEY: &str = "hxd_token";
pub const DEFAULT_QALIB_INFO_KEY: &str = "HuixiangDou:qalib:info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: Option<&str>) -> Self {
        match raw.unwrap_or("development").to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Key material used to verify the `hxd_token` cookie.
///
/// Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub enum TokenKey {
    /// HS256 shared secret.
    Secret(String),
    /// Ed25519 public key (PEM).
    EdPublicPem(String),
}

impl fmt::Debug for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKey::Secret(_) => f.write_str("TokenKey::Secret(..)"),
            TokenKey::EdPublicPem(_) => f.write_str("TokenKey::EdPublicPem(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    pub redis_url: String,
    pub qalib_info_key: String,

    pub cookie_key: String,
    pub token_key: TokenKey,
    pub token_issuer: Option<String>,
    pub token_audience: Option<String>,
    pub access_token_leeway_seconds: u64,

    pub request_body_limit_bytes: usize,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (process env in production,
    /// a fixed map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values are treated the same as unset ones.
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port: u16 = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(get("APP_ENV").as_deref());

        let cors_allowed_origins = get("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let redis_url = get("REDIS_URL").unwrap_or_else(|| "redis://127.0.0.1:6379".to_string());

        let qalib_info_key =
            get("QALIB_INFO_KEY").unwrap_or_else(|| DEFAULT_QALIB_INFO_KEY.to_string());

        let cookie_key = get("HXD_COOKIE_KEY").unwrap_or_else(|| DEFAULT_COOKIE_KEY.to_string());

        // The public key wins when both are configured.
        let token_key = match (get("HXD_JWT_PUBLIC_KEY_PEM"), get("HXD_JWT_SECRET")) {
            (Some(pem), _) => TokenKey::EdPublicPem(pem.replace("\\n", "\n")),
            (None, Some(secret)) => TokenKey::Secret(secret),
            (None, None) => return Err(ConfigError::Missing("HXD_JWT_SECRET")),
        };

        let token_issuer = get("HXD_JWT_ISSUER");
        let token_audience = get("HXD_JWT_AUDIENCE");

        let access_token_leeway_seconds = get("ACCESS_TOKEN_LEEWAY_SECONDS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(60);

        let request_body_limit_bytes = get("REQUEST_BODY_LIMIT_BYTES")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(1024 * 1024);

        let request_timeout = get("REQUEST_TIMEOUT_SECONDS")
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            redis_url,
            qalib_info_key,
            cookie_key,
            token_key,
            token_issuer,
            token_audience,
            access_token_leeway_seconds,
            request_body_limit_bytes,
            request_timeout,
        })
    }
}
