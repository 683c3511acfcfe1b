use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_port(std::env::var("PORT").ok())?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: Option<String>) -> anyhow::Result<u16> {
    raw.unwrap_or_else(|| "3000".to_string())
        .trim()
        .parse()
        .context("PORT must be a valid number")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_to_3000() {
        assert_eq!(parse_port(None).unwrap(), 3000);
    }

    #[test]
    fn port_is_read_from_value() {
        assert_eq!(parse_port(Some(" 8080 ".to_string())).unwrap(), 8080);
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = parse_port(Some("eighty".to_string())).unwrap_err();
        assert!(err.to_string().contains("PORT must be a valid number"));
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 3000,
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }
}
