use andor::{Metrics, Plan};
use serde::{Deserialize, Serialize};

use crate::vacuum::{VacuumAction, VacuumState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct PlanReport<'a> {
    plan: &'a Plan<VacuumState, VacuumAction>,
    metrics: &'a Metrics,
}

pub fn render(
    plan: &Plan<VacuumState, VacuumAction>,
    metrics: &Metrics,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{plan}\nmetrics: {metrics}")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&PlanReport { plan, metrics })?),
    }
}
