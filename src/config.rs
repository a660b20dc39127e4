use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub data_dir: PathBuf,
    pub jwt_secret: String,
    pub session_ttl_hours: i64,
    pub seed_demo_data: bool,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let jwt_secret = env_required("PROMPTVAULT_JWT_SECRET")?;

        let host: IpAddr = env_or("PROMPTVAULT_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid PROMPTVAULT_HOST: {e}"))?;

        let port: u16 = env_or("PROMPTVAULT_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid PROMPTVAULT_PORT: {e}"))?;

        let data_dir = PathBuf::from(env_or("PROMPTVAULT_DATA_DIR", "data"));

        let session_ttl_hours: i64 = env_or("PROMPTVAULT_SESSION_TTL_HOURS", "24")
            .parse()
            .map_err(|e| format!("Invalid PROMPTVAULT_SESSION_TTL_HOURS: {e}"))?;

        let seed_demo_data = match env_or("PROMPTVAULT_SEED_DEMO_DATA", "true").as_str() {
            "false" | "0" => false,
            _ => true,
        };

        let log_level = env_or("PROMPTVAULT_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            data_dir,
            jwt_secret,
            session_ttl_hours,
            seed_demo_data,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
