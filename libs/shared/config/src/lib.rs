use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_DIRECTORY_PATH: &str = "data/doctors.json";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
pub const DEFAULT_SERVER_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub directory_path: PathBuf,
    pub currency_symbol: String,
    pub clinic_utc_offset_minutes: i32,
    pub server_host: IpAddr,
    pub server_port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            directory_path: PathBuf::from(DEFAULT_DIRECTORY_PATH),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            clinic_utc_offset_minutes: 0,
            server_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            directory_path: env::var("DIRECTORY_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    warn!("DIRECTORY_PATH not set, using {}", DEFAULT_DIRECTORY_PATH);
                    defaults.directory_path.clone()
                }),
            currency_symbol: env::var("CURRENCY_SYMBOL")
                .unwrap_or_else(|_| defaults.currency_symbol.clone()),
            clinic_utc_offset_minutes: parse_var("CLINIC_UTC_OFFSET_MINUTES", defaults.clinic_utc_offset_minutes),
            server_host: parse_var("SERVER_HOST", defaults.server_host),
            server_port: parse_var("SERVER_PORT", defaults.server_port),
        };

        if !config.has_valid_offset() {
            warn!(
                "CLINIC_UTC_OFFSET_MINUTES={} is outside +/-24h, falling back to UTC",
                config.clinic_utc_offset_minutes
            );
            return Self {
                clinic_utc_offset_minutes: 0,
                ..config
            };
        }

        config
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }

    pub fn has_valid_offset(&self) -> bool {
        self.clinic_utc_offset_minutes.abs() < 24 * 60
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using default", name, raw);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.bind_addr().port(), 3000);
        assert!(config.has_valid_offset());
    }

    #[test]
    fn test_offset_bounds() {
        let config = AppConfig {
            clinic_utc_offset_minutes: 24 * 60,
            ..AppConfig::default()
        };
        assert!(!config.has_valid_offset());

        let config = AppConfig {
            clinic_utc_offset_minutes: -330,
            ..AppConfig::default()
        };
        assert!(config.has_valid_offset());
    }
}
