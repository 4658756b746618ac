use mangashelf_core::search::DEFAULT_RECENT_LIMIT;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum request body size. Covers arrive base64-encoded inside the
    /// form body, so this bounds the cover size too (default: 10 MiB).
    pub body_limit_bytes: usize,
    /// Number of entries on the landing page (default: `10`).
    pub recent_limit: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default    |
    /// |------------------------|------------|
    /// | `HOST`                 | `0.0.0.0`  |
    /// | `PORT`                 | `3000`     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`       |
    /// | `BODY_LIMIT_BYTES`     | `10485760` |
    /// | `RECENT_LIMIT`         | `10`       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let body_limit_bytes: usize = std::env::var("BODY_LIMIT_BYTES")
            .unwrap_or_else(|_| "10485760".into())
            .parse()
            .expect("BODY_LIMIT_BYTES must be a valid usize");

        let recent_limit: i64 = std::env::var("RECENT_LIMIT")
            .map(|v| v.parse().expect("RECENT_LIMIT must be a valid i64"))
            .unwrap_or(DEFAULT_RECENT_LIMIT);

        Self {
            host,
            port,
            request_timeout_secs,
            body_limit_bytes,
            recent_limit,
        }
    }
}
