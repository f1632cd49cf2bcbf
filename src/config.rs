use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub model: ModelConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Path to the serialized model artifact (JSON).
    pub path: String,
    /// Currency symbol used when formatting the premium.
    pub currency_symbol: String,
}

pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8080)?
        .set_default("server.log_level", "info")?
        .set_default("model.path", "model.json")?
        .set_default("model.currency_symbol", "$")?
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("PREMIUM").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.host.parse::<std::net::IpAddr>().is_err() {
        anyhow::bail!("server.host '{}' is not a valid IP address", cfg.server.host);
    }

    if cfg.model.path.is_empty() {
        anyhow::bail!("model.path cannot be empty");
    }

    if cfg.model.currency_symbol.is_empty() {
        anyhow::bail!("model.currency_symbol cannot be empty");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                log_level: "info".to_string(),
            },
            model: ModelConfig {
                path: "model.json".to_string(),
                currency_symbol: "$".to_string(),
            },
        }
    }

    #[test]
    fn test_validate_config_accepts_defaults() {
        let cfg = create_test_config();
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn test_validate_config_rejects_bad_host() {
        let mut cfg = create_test_config();
        cfg.server.host = "not-an-ip".to_string();

        let result = validate_config(&cfg);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a valid IP address"));
    }

    #[test]
    fn test_validate_config_rejects_empty_model_path() {
        let mut cfg = create_test_config();
        cfg.model.path.clear();

        let result = validate_config(&cfg);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("model.path cannot be empty"));
    }
}
