use std::error::Error;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct MonitoringConfig {
    #[serde(default)]
    pub logs: EnvFilterConfig,
    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct EnvFilterConfig {
    #[serde(default = "default_level")]
    pub default_level: String,
    #[serde(default)]
    pub filters: Vec<String>,
}

fn default_level() -> String {
    "info".to_owned()
}

impl Default for EnvFilterConfig {
    fn default() -> Self {
        Self {
            default_level: default_level(),
            filters: vec![],
        }
    }
}

impl TryInto<EnvFilter> for EnvFilterConfig {
    type Error = tracing_subscriber::filter::ParseError;

    fn try_into(self) -> Result<EnvFilter, Self::Error> {
        EnvFilter::builder()
            .with_default_directive(self.default_level.parse()?)
            .parse(self.filters.join(","))
    }
}

impl MonitoringConfig {
    pub fn init(&self) -> Result<(), Box<dyn Error>> {
        let logging_filter: EnvFilter = self.logs.clone().try_into()?;

        if self.json {
            tracing_subscriber::registry()
                .with(tracing_subscriber::fmt::layer().json())
                .with(logging_filter)
                .try_init()?;
        } else {
            tracing_subscriber::registry()
                .with(tracing_subscriber::fmt::layer())
                .with(logging_filter)
                .try_init()?;
        }

        tracing::debug!("Logging initialized with {:?}", self.logs);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use config::{Config, File, FileFormat};

    use super::*;

    #[test]
    fn defaults_to_info_without_filters() {
        let config: MonitoringConfig = Config::builder()
            .add_source(File::from_str("", FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.logs.default_level, "info");
        assert!(config.logs.filters.is_empty());
        assert!(!config.json);
    }

    #[test]
    fn builds_filter_from_directives() {
        let config = EnvFilterConfig {
            default_level: "warn".to_owned(),
            filters: vec!["andor=trace".to_owned(), "vacuum=debug".to_owned()],
        };

        let filter: Result<EnvFilter, _> = config.try_into();

        let rendered = filter.unwrap().to_string();
        assert!(rendered.contains("andor=trace"));
        assert!(rendered.contains("vacuum=debug"));
        assert!(rendered.contains("warn"));
    }

    #[test]
    fn rejects_unknown_level() {
        let config = EnvFilterConfig {
            default_level: "info".to_owned(),
            filters: vec!["andor=verbose".to_owned()],
        };

        let filter: Result<EnvFilter, _> = config.try_into();

        assert!(filter.is_err());
    }
}
