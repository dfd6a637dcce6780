mod monitoring;

pub use monitoring::EnvFilterConfig;
pub use monitoring::MonitoringConfig;
