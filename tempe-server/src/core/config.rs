use crate::auth::JwtConfig;

pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment (a `.env` file is
/// loaded first by the binary):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | data directory |
/// | HTTP_PORT | 3000 | HTTP port |
/// | DATABASE_URL | sqlite:{WORK_DIR}/tempe.db | SQLite database |
/// | ENVIRONMENT | development | development / production |
/// | LOG_LEVEL | info | default log filter (`RUST_LOG` wins) |
/// | LOG_JSON | false | JSON log lines |
/// | LOG_DIR | (none) | daily rolling log files |
/// | CORS_ORIGINS | (any) | comma separated allowed origins |
/// | JWT_SECRET | (generated in debug) | token signing secret |
/// | JWT_EXPIRATION_MINUTES | 1440 | token lifetime |
/// | ADMIN_USERNAME | admin | seeded login |
/// | ADMIN_PASSWORD | admin123 | seeded password |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request timeout |
/// | LOGIN_DELAY_MS | 500 | fixed login response delay |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/srv/tempe HTTP_PORT=8080 cargo run -p tempe-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: String,
    pub http_port: u16,
    pub database_url: String,
    pub jwt: JwtConfig,
    /// development | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// Empty allows any origin
    pub cors_origins: Vec<String>,
    /// Seeded when no user with this name exists
    pub admin_username: String,
    pub admin_password: String,
    pub request_timeout_ms: u64,
    /// Every login answer waits this long, success or not
    pub login_delay_ms: u64,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into());
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| format!("sqlite:{}/tempe.db", work_dir.trim_end_matches('/')));

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_url,
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            login_delay_ms: std::env::var("LOGIN_DELAY_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(500),
            work_dir,
        }
    }

    /// Fixed configuration for tests: in-memory database, no login delay
    pub fn for_test() -> Self {
        Self {
            work_dir: ".".into(),
            http_port: 0,
            database_url: "sqlite::memory:".into(),
            jwt: JwtConfig::with_secret("test-secret-that-is-long-enough-for-hs256"),
            environment: "test".into(),
            log_level: "warn".into(),
            log_json: false,
            log_dir: None,
            cors_origins: Vec::new(),
            admin_username: "admin".into(),
            admin_password: DEFAULT_ADMIN_PASSWORD.into(),
            request_timeout_ms: 30000,
            login_delay_ms: 0,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blank_skipped() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_config_has_no_delay() {
        let config = Config::for_test();
        assert_eq!(config.login_delay_ms, 0);
        assert!(!config.is_production());
        assert!(config.jwt.secret.len() >= 32);
    }
}
