use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every key has a default, so the service starts with an empty environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            host: env_or("HOST", "0.0.0.0"),
            port: env_or("PORT", "5000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr_uses_host_and_port() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8081,
            rust_log: "debug".to_string(),
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:8081");
    }
}
