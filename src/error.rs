//! Error types.

use thiserror::Error;

/// Errors raised while configuring a solver.
///
/// Solving itself never fails: empty inputs produce empty results and
/// unknown method names fall back to nearest neighbor. Only strict parsing
/// and configuration validation report errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown method: {0:?}")]
    UnknownMethod(String),
}
