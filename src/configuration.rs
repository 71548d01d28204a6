use crate::error::Result;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::*;

const ENVIRONMENT_PREFIX: &str = "APP";

/// Use default config files if no path is provided
pub fn get_configuration(config: Option<PathBuf>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    if let Some(config) = config {
        info!("Using configuration from {:?}", config);
        builder = builder.add_source(File::from(config));
    } else {
        info!("Using default configuration");
        builder = builder
            .add_source(File::with_name("configuration/settings").required(false))
            .add_source(File::with_name("configuration/dev_settings").required(false));
    }

    let settings = builder
        .add_source(Environment::with_prefix(ENVIRONMENT_PREFIX))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct AppConfig {
    /// Address of the device, optionally with a port
    #[serde(default)]
    pub host: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn host_is_read_from_settings() {
        let config: AppConfig = Config::builder()
            .add_source(File::from_str("host: 192.168.1.20", FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.host.as_deref(), Some("192.168.1.20"));
    }

    #[test]
    fn host_is_optional() {
        let config: AppConfig = Config::builder()
            .add_source(File::from_str("{}", FileFormat::Json))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert!(config.host.is_none());
    }

    #[test]
    fn environment_overrides_file() {
        let mut environment = std::collections::HashMap::new();
        environment.insert("APP_HOST".to_owned(), "10.0.0.5:8080".to_owned());

        let config: AppConfig = Config::builder()
            .add_source(File::from_str("host: 192.168.1.20", FileFormat::Yaml))
            .add_source(Environment::with_prefix(ENVIRONMENT_PREFIX).source(Some(environment)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.host.as_deref(), Some("10.0.0.5:8080"));
    }
}
