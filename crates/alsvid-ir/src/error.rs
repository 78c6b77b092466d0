//! Error types for the IR crate.

use crate::bit::BitId;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A gate was built with a duplicated bit operand.
    #[error("Duplicate bit {bit} in {gate} gate")]
    DuplicateBit {
        /// Name of the gate being built.
        gate: &'static str,
        /// The duplicated bit.
        bit: BitId,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
