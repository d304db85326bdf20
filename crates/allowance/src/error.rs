use thiserror::Error;

/// A transport or decoding failure is not a negative answer: callers must
/// never treat these as "insufficient allowance" and nothing is cached.
#[derive(Debug, Error)]
pub enum AllowanceError {
    #[error("allowance query failed: {0}")]
    Query(eyre::Report),
    #[error("allowance decoding failed: {0}")]
    Decode(#[from] alloy_sol_types::Error),
    #[error("approval cache failed: {0}")]
    Cache(eyre::Report),
}
