use crate::domain::constants::{DEFAULT_BOUNDARIES, DEFAULT_DEFINITION, DEFAULT_FILENAME};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

fn default_filename() -> String {
    DEFAULT_FILENAME.to_string()
}

/// One computed row from the solver: column name mapped to a single-element
/// container holding the value. The wrapping is an artifact of the solver's
/// scripting API; cells may be numeric or string (e.g. the boundary name).
pub type ReportRow = BTreeMap<String, Vec<serde_json::Value>>;

/// Flux report configuration, immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub definition: String,
    pub boundaries: Vec<String>,
    #[serde(default = "default_filename")]
    pub filename: String,
}

impl ReportConfig {
    pub fn new(definition: &str, boundaries: &[&str], filename: &str) -> Self {
        Self {
            definition: definition.to_string(),
            boundaries: boundaries.iter().map(|b| b.to_string()).collect(),
            filename: filename.to_string(),
        }
    }

    /// Loads a configuration from a JSON file; `filename` may be omitted and
    /// falls back to the default.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DEFINITION, &DEFAULT_BOUNDARIES, DEFAULT_FILENAME)
    }
}
