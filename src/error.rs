//! Error types for node evaluation.

use thiserror::Error;

/// Result type for node evaluation.
pub type BasisResult<T> = Result<T, BasisError>;

/// Errors reported back to the host's execution engine.
///
/// Every error aborts the whole invocation: evaluation never returns a
/// partially filled batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BasisError {
    /// A stored parameter token does not name a known value.
    #[error("unrecognized {parameter} token {value:?}")]
    InvalidConfiguration {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The token as the host stored it.
        value: String,
    },

    /// A zero-length axis was asked to normalize.
    ///
    /// Happens when the two direction inputs are parallel or zero; the cross
    /// products collapse and at least one axis has no direction left.
    #[error("degenerate basis at batch index {index}: zero-length axis cannot be normalized")]
    DegenerateBasis {
        /// Index of the offending tuple within the broadcast batch.
        index: usize,
    },

    /// A connected input socket delivered an empty list.
    #[error("input socket {socket:?} delivered an empty list")]
    EmptyInput {
        /// Name of the offending socket.
        socket: &'static str,
    },
}
