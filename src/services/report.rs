use crate::domain::models::{ReportConfig, ReportRow};
use crate::error::FluxError;
use crate::solver::SolverSession;

/// Registers and computes the configured flux report, returning the raw
/// rows. Any session failure comes back as [`FluxError::Report`]; the
/// session is stateful, so a failed call is not retried.
pub fn generate_report(
    session: &mut dyn SolverSession,
    config: &ReportConfig,
) -> Result<Vec<ReportRow>, FluxError> {
    request(session, config).map_err(|e| FluxError::Report(e.to_string()))
}

fn request(
    session: &mut dyn SolverSession,
    config: &ReportConfig,
) -> anyhow::Result<Vec<ReportRow>> {
    session.register_flux_definition(&config.definition)?;
    let allowed = session.allowed_boundaries(&config.definition)?;
    log::debug!(
        "allowed boundaries for {}: {:?}",
        config.definition,
        allowed
    );
    // No pre-validation against `allowed`: the solver errors on unknown names.
    session.set_boundaries(&config.definition, &config.boundaries)?;
    session.set_per_zone(&config.definition, true)?;
    session.compute(&[config.definition.as_str()])
}
