//! Flux report automation for an external CFD solver session.
//!
//! The solver owns all numerical work; this crate only drives its scripting
//! surface. A caller hands in a live [`SolverSession`], the crate registers a
//! per-zone mass-flow-rate report over a fixed set of boundaries, computes
//! it, and persists the rows as CSV into a `result_folder` derived from the
//! working directory's ancestry.
//!
//! The session is supplied fully initialized and is never opened, closed, or
//! pooled here. A run is one synchronous pass from report definition to CSV
//! on disk, with no retry on failure.

pub mod domain;
pub mod error;
pub mod services;
pub mod solver;

pub use domain::models::{ReportConfig, ReportRow};
pub use error::FluxError;
pub use services::report::generate_report;
pub use services::store::ResultStore;
pub use solver::SolverSession;

use std::path::{Path, PathBuf};

/// Runs the production report against `session`: default configuration,
/// result store rooted at the current working directory.
///
/// Returns the path of the written CSV file.
pub fn run(session: &mut dyn SolverSession) -> Result<PathBuf, FluxError> {
    let base = std::env::current_dir().map_err(|e| FluxError::Save(e.to_string()))?;
    run_at(session, &ReportConfig::default(), &base)
}

/// Same pipeline as [`run`] with an explicit configuration and directory
/// root. Either error kind is logged here before propagating.
pub fn run_at(
    session: &mut dyn SolverSession,
    config: &ReportConfig,
    base: &Path,
) -> Result<PathBuf, FluxError> {
    let result = drive(session, config, base);
    if let Err(e) = &result {
        log::error!("{}", e);
    }
    result
}

fn drive(
    session: &mut dyn SolverSession,
    config: &ReportConfig,
    base: &Path,
) -> Result<PathBuf, FluxError> {
    let rows = generate_report(session, config)?;
    let store = ResultStore::at(base)?;
    store.save(&rows, &config.filename)
}
