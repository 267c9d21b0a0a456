use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub data_file: String,
    pub settings_file: Option<String>,
    /// Overrides the timezone from the settings file when set.
    pub timezone: Option<String>,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("SB_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid SB_LISTEN_ADDR");
        let data_file =
            std::env::var("SB_DATA_FILE").unwrap_or_else(|_| "./data/salesboard.json".into());
        let settings_file = std::env::var("SB_SETTINGS_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let timezone = std::env::var("SB_TIMEZONE")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let cors_allow = std::env::var("SB_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("SB_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Self {
            listen_addr,
            data_file,
            settings_file,
            timezone,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        }
    }
}
