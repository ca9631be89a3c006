//! Engine error types

use thiserror::Error;

/// Errors surfaced by the diagnostic engine.
///
/// The engine deliberately has no recoverable-error taxonomy: malformed but
/// numeric inputs (zero rated power, sub-volt readings, negative currents) are
/// clamped to documented fallbacks so that diagnostics keep flowing in the
/// field, where bad gauge readings are routine. The only rejection is a
/// non-finite value, which would otherwise poison every downstream quantity.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A gauge reading field was NaN or infinite.
    #[error("Invalid input: {field} is not a finite number ({value})")]
    InvalidInput {
        /// Name of the offending reading field
        field: &'static str,
        /// The non-finite value as read
        value: f64,
    },
}
