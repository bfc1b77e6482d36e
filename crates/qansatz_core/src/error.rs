//! Error types for qansatz
//!
//! Gantree: L0_Foundation → Errors
//!
//! Every failure is raised before any gate event leaves a generator, so a
//! caller either gets a complete ansatz or one of these.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for qansatz
/// Gantree: AnsatzError // enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnsatzError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Qubit count below one
    #[error("Invalid num_qubits {num_qubits}: must be >= 1")]
    InvalidQubitCount { num_qubits: i64 },

    /// Negative entanglement depth for the ladder topology
    #[error("Invalid entanglement_depth {0}: must be >= 0")]
    NegativeEntanglementDepth(i64),

    /// Negative parameter allocation request
    #[error("Invalid parameter count {0}: must be >= 0")]
    NegativeParameterCount(i64),

    /// Parameter allocation request exceeds addressable memory
    #[error("Invalid parameter count {0}: too large to allocate")]
    ParameterCountTooLarge(i64),

    /// Butterfly qubit count is not a power of two
    #[error("Invalid num_qubits {0} for butterfly: must be a power of 2")]
    NotPowerOfTwo(usize),

    /// Parameter prefix is empty
    #[error("Invalid param_prefix: must not be empty")]
    EmptyPrefix,

    /// Two parameter streams in one ansatz share a prefix
    #[error("Parameter prefix '{0}' is used by more than one stage")]
    PrefixCollision(String),

    /// Unknown topology name
    #[error(
        "Unknown topology '{0}': expected one of ladder-x, ladder-y, ladder-z, brick-sweep, butterfly"
    )]
    UnknownTopology(String),

    /// Invalid rotation axis
    #[error("Invalid axis '{0}': must be X, Y, or Z")]
    InvalidAxis(String),

    /// Non-finite angle scale
    #[error("Invalid scale {0}: must be finite")]
    InvalidScale(f64),

    /// Builder called without any topology stage
    #[error("Ansatz needs at least one topology stage")]
    NoTopology,

    // ========================================================================
    // Structural Errors
    // ========================================================================
    /// Gate event references a qubit outside the register
    #[error("Qubit {qubit} out of range: register has {num_qubits} qubits")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },

    /// Two-qubit event with identical operands
    #[error("Two-qubit gate on qubit {0} twice: operands must be distinct")]
    DuplicateQubit(usize),

    /// Declared parameter count disagrees with the event sequence
    #[error("Declared {declared} parameters but events reference {referenced}")]
    ParameterCountMismatch { declared: usize, referenced: usize },

    // ========================================================================
    // Collaborator Errors
    // ========================================================================
    /// Circuit sink rejected an event
    #[error("Circuit sink error: {0}")]
    SinkError(String),

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),
}

/// Result type alias for qansatz operations
/// Gantree: AnsatzResult<T> // type alias
pub type AnsatzResult<T> = Result<T, AnsatzError>;

// ============================================================================
// Error Conversion Helpers
// ============================================================================

impl From<serde_json::Error> for AnsatzError {
    fn from(err: serde_json::Error) -> Self {
        AnsatzError::JsonError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl AnsatzError {
    /// Check if error is a caller configuration mistake
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            AnsatzError::InvalidQubitCount { .. }
                | AnsatzError::NegativeEntanglementDepth(_)
                | AnsatzError::NegativeParameterCount(_)
                | AnsatzError::ParameterCountTooLarge(_)
                | AnsatzError::NotPowerOfTwo(_)
                | AnsatzError::EmptyPrefix
                | AnsatzError::PrefixCollision(_)
                | AnsatzError::UnknownTopology(_)
                | AnsatzError::InvalidAxis(_)
                | AnsatzError::InvalidScale(_)
                | AnsatzError::NoTopology
        )
    }

    /// Check if error is a broken event-sequence invariant
    pub fn is_structural_error(&self) -> bool {
        matches!(
            self,
            AnsatzError::QubitOutOfRange { .. }
                | AnsatzError::DuplicateQubit(_)
                | AnsatzError::ParameterCountMismatch { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
