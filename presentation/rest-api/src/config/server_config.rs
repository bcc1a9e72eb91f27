use super::env::{ConfigError, positive_var, var_or};

/// HTTP listener address
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            ip: var_or("SERVICE_IP", "127.0.0.1"),
            port: positive_var("SERVICE_PORT", 8080u16)?,
        })
    }

    /// "ip:port", bracketing IPv6 literals
    pub fn bind_address(&self) -> String {
        if self.ip.contains(':') && !self.ip.starts_with('[') {
            format!("[{}]:{}", self.ip, self.port)
        } else {
            format!("{}:{}", self.ip, self.port)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_bind_address_from_ip_and_port() {
        let config = ServerConfig {
            ip: "0.0.0.0".to_string(),
            port: 3000,
        };

        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn should_bracket_ipv6_addresses() {
        let config = ServerConfig {
            ip: "::1".to_string(),
            port: 8080,
        };

        assert_eq!(config.bind_address(), "[::1]:8080");
    }
}
