/// The two failure kinds a run can surface. Both carry the underlying
/// message verbatim; neither is retried.
#[derive(thiserror::Error, Debug)]
pub enum FluxError {
    #[error("failed to generate flux report: {0}")]
    Report(String),
    #[error("failed to save results: {0}")]
    Save(String),
}
