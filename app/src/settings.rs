use config::{Config, ConfigError, Environment, File};
use infrastructure::MonitoringConfig;
use serde::Deserialize;

use crate::output::OutputConfig;
use crate::simulation::SimulationConfig;
use crate::vacuum::{Location, LocationState, VacuumState};

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub monitoring: MonitoringConfig,
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub a: LocationState,
    pub b: LocationState,
    pub agent: Location,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            a: LocationState::Dirty,
            b: LocationState::Dirty,
            agent: Location::A,
        }
    }
}

impl WorldConfig {
    pub fn initial_state(&self) -> VacuumState {
        VacuumState::new(self.a, self.b, self.agent)
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config.toml").required(false))
            .add_source(environment());

        let s = builder.build()?;
        s.try_deserialize()
    }
}

//keys look like VACUUM__WORLD__AGENT
fn environment() -> Environment {
    Environment::with_prefix("VACUUM").separator("__").list_separator(",")
}

#[cfg(test)]
pub mod test {
    use config::{FileFormat, Map};

    use super::*;
    use crate::output::OutputFormat;

    fn from_toml(content: &str) -> Result<Settings, ConfigError> {
        Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn from_env(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let mut source = Map::new();
        for (key, value) in vars {
            source.insert(key.to_string(), value.to_string());
        }

        Config::builder()
            .add_source(environment().source(Some(source)))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn empty_config_uses_defaults() {
        let settings = from_toml("").unwrap();

        assert_eq!(
            settings.world.initial_state(),
            VacuumState::new(LocationState::Dirty, LocationState::Dirty, Location::A)
        );
        assert_eq!(settings.simulation.trials, 10);
        assert_eq!(settings.simulation.seed, None);
        assert_eq!(settings.output.format, OutputFormat::Text);
        assert_eq!(settings.monitoring.logs.default_level, "info");
    }

    #[test]
    fn reads_all_sections() {
        let settings = from_toml(
            r#"
            [monitoring]
            json = true

            [monitoring.logs]
            default_level = "warn"
            filters = ["andor=trace"]

            [world]
            a = "clean"
            b = "dirty"
            agent = "b"

            [simulation]
            trials = 3
            seed = 99

            [output]
            format = "json"
            "#,
        )
        .unwrap();

        assert!(settings.monitoring.json);
        assert_eq!(settings.monitoring.logs.filters, vec!["andor=trace".to_owned()]);
        assert_eq!(
            settings.world.initial_state(),
            VacuumState::new(LocationState::Clean, LocationState::Dirty, Location::B)
        );
        assert_eq!(settings.simulation.trials, 3);
        assert_eq!(settings.simulation.seed, Some(99));
        assert_eq!(settings.output.format, OutputFormat::Json);
    }

    #[test]
    fn partial_world_section_keeps_defaults() {
        let settings = from_toml(
            r#"
            [world]
            agent = "b"
            "#,
        )
        .unwrap();

        assert_eq!(
            settings.world.initial_state(),
            VacuumState::new(LocationState::Dirty, LocationState::Dirty, Location::B)
        );
    }

    #[test]
    fn reads_environment_overrides() {
        let settings = from_env(&[
            ("VACUUM__WORLD__AGENT", "b"),
            ("VACUUM__SIMULATION__TRIALS", "3"),
        ])
        .unwrap();

        assert_eq!(
            settings.world.initial_state(),
            VacuumState::new(LocationState::Dirty, LocationState::Dirty, Location::B)
        );
        assert_eq!(settings.simulation.trials, 3);
        assert_eq!(settings.output.format, OutputFormat::Text);
    }

    #[test]
    fn rejects_unknown_location() {
        let result = from_toml(
            r#"
            [world]
            a = "clean"
            b = "clean"
            agent = "c"
            "#,
        );

        assert!(result.is_err());
    }
}
