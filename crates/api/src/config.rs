/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Recipient of the simulated new-lead notification.
    pub notify_email: String,
    /// Number of records listed by the stats endpoints (default: `5`).
    pub recent_limit: usize,
    /// Maximum records per in-memory table.
    pub store_capacity: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `NOTIFY_EMAIL`         | `info@alps-experience.com` |
    /// | `RECENT_LIMIT`         | `5`                        |
    /// | `STORE_CAPACITY`       | `10000`                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let notify_email =
            std::env::var("NOTIFY_EMAIL").unwrap_or_else(|_| "info@alps-experience.com".into());

        let recent_limit: usize = std::env::var("RECENT_LIMIT")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("RECENT_LIMIT must be a valid usize");

        let store_capacity: usize = std::env::var("STORE_CAPACITY")
            .unwrap_or_else(|_| alps_db::store::DEFAULT_CAPACITY.to_string())
            .parse()
            .expect("STORE_CAPACITY must be a valid usize");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            notify_email,
            recent_limit,
            store_capacity,
        }
    }
}
