//! Stable constants for the production report run.

/// Report definition name registered with the solver.
pub const DEFAULT_DEFINITION: &str = "mass_flow_rate";

/// Channel boundaries the production case measures across.
pub const DEFAULT_BOUNDARIES: [&str; 4] = ["cha", "chb", "chc", "chd"];

pub const DEFAULT_FILENAME: &str = "output.csv";

/// Folder name appended to the ancestor directory for CSV output.
pub const RESULT_FOLDER: &str = "result_folder";
