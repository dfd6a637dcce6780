use std::collections::BTreeMap;
use std::fmt::Display;

/// Named counters collected while searching. Purely informational.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Metrics {
    values: BTreeMap<&'static str, usize>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> usize {
        self.values.get(name).copied().unwrap_or(0)
    }

    pub fn set(&mut self, name: &'static str, value: usize) {
        self.values.insert(name, value);
    }

    pub fn increment(&mut self, name: &'static str) {
        *self.values.entry(name).or_insert(0) += 1;
    }

    /// Keeps the larger of the stored and the given value.
    pub fn record_max(&mut self, name: &'static str, value: usize) {
        let current = self.values.entry(name).or_insert(0);
        if value > *current {
            *current = value;
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }
}

impl Display for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered = self
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{{rendered}}}")
    }
}
