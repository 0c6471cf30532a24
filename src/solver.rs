use crate::domain::models::ReportRow;

/// Live scripting session of the external CFD solver.
///
/// This mirrors the solver's report-definition registry: definitions are
/// keyed by name, each entry carries a boundary list and a per-zone flag,
/// and `compute` evaluates the named definitions. The session is stateful
/// and externally owned; implementations decide how calls reach the actual
/// solver process.
///
/// Boundary names are submitted as-is. The solver is the source of truth
/// for what exists in the mesh and errors on unknown names.
pub trait SolverSession {
    /// Registers an empty flux report definition under `name`, replacing
    /// any existing definition with that name.
    fn register_flux_definition(&mut self, name: &str) -> anyhow::Result<()>;

    /// Boundary names the session accepts for the given definition.
    fn allowed_boundaries(&self, name: &str) -> anyhow::Result<Vec<String>>;

    /// Restricts the definition to the given boundaries.
    fn set_boundaries(&mut self, name: &str, boundaries: &[String]) -> anyhow::Result<()>;

    /// Toggles per-zone reporting for the definition.
    fn set_per_zone(&mut self, name: &str, per_zone: bool) -> anyhow::Result<()>;

    /// Computes the named report definitions and returns their rows.
    fn compute(&mut self, report_defs: &[&str]) -> anyhow::Result<Vec<ReportRow>>;
}
