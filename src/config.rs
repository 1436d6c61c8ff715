//! Service configuration loaded from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::Deserialize;

use crate::error::{Result, ServiceError};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Address the HTTP listener binds to.
    #[serde(default = "default_bind_host")]
    pub bind_host: IpAddr,

    /// HTTP server port for the application routes.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Port for the Prometheus scrape listener. Exporter is off when unset.
    #[serde(default)]
    pub metrics_port: Option<u16>,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,

    /// Emit logs as JSON lines instead of the human-readable format.
    #[serde(default)]
    pub log_json: bool,
}

fn default_bind_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_host: default_bind_host(),
            port: default_port(),
            metrics_port: None,
            rust_log: default_log_level(),
            verbose: false,
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(ServiceError::InvalidConfig(
                "PORT must be greater than 0".to_string(),
            ));
        }

        match self.metrics_port {
            Some(0) => Err(ServiceError::InvalidConfig(
                "METRICS_PORT must be greater than 0".to_string(),
            )),
            Some(port) if port == self.port => Err(ServiceError::InvalidConfig(
                "METRICS_PORT must differ from PORT".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Socket address for the application listener.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_host, self.port)
    }

    /// Socket address for the metrics listener, if enabled.
    pub fn metrics_addr(&self) -> Option<SocketAddr> {
        self.metrics_port.map(|port| SocketAddr::new(self.bind_host, port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.metrics_port.is_none());
        assert_eq!(config.bind_addr(), "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn deserializes_from_env_pairs() {
        let vars = vec![
            ("BIND_HOST".to_string(), "127.0.0.1".to_string()),
            ("PORT".to_string(), "5000".to_string()),
            ("METRICS_PORT".to_string(), "9100".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.metrics_addr(), Some("127.0.0.1:9100".parse::<SocketAddr>().unwrap()));
        assert!(!config.verbose);
    }

    #[test]
    fn rejects_non_numeric_port() {
        let vars = vec![("PORT".to_string(), "http".to_string())];
        assert!(envy::from_iter::<_, Config>(vars).is_err());
    }

    #[test]
    fn validate_rejects_zero_port() {
        let config = Config {
            port: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ServiceError::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_metrics_port_collision() {
        let config = Config {
            port: 9000,
            metrics_port: Some(9000),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
