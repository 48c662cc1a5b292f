use std::env;
use std::net::SocketAddr;
use tracing::warn;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = env::var("CLINIC_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("CLINIC_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("CLINIC_PORT '{}' is not a valid port, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        Self { host, port }
    }

    /// Socket address to bind. Falls back to all interfaces when the host
    /// does not parse as an IP address.
    pub fn bind_addr(&self) -> SocketAddr {
        match self.host.parse() {
            Ok(ip) => SocketAddr::new(ip, self.port),
            Err(_) => {
                warn!("CLINIC_HOST '{}' is not an IP address, binding {}", self.host, DEFAULT_HOST);
                SocketAddr::from(([0, 0, 0, 0], self.port))
            }
        }
    }

    pub fn public_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}
