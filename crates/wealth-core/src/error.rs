use thiserror::Error;

/// Errors from the indicator retrieval layer.
///
/// Synthesis and aggregation are total and never return these; a fetch
/// failure only means fewer indicators in the snapshot.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Unexpected response: {0}")]
    Parse(String),
}
