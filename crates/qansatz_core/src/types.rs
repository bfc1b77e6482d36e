//! Core types for qansatz
//!
//! Gantree: L0_Foundation → CoreTypes
//!
//! Type aliases and the rotation axis shared by every generator.

use crate::error::{AnsatzError, AnsatzResult};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// Qubit identifier (0-indexed)
/// Gantree: QubitId // pub type QubitId = usize
pub type QubitId = usize;

/// Real coefficient multiplying a symbolic parameter
/// Gantree: Angle // pub type Angle = f64
pub type Angle = f64;

// ============================================================================
// Axis
// ============================================================================

/// Rotation axis of a single-qubit rotation
/// Gantree: Axis // X/Y/Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Rotation about X
    X,
    /// Rotation about Y
    Y,
    /// Rotation about Z
    Z,
}

impl Axis {
    /// All axes in canonical order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Parse from character
    pub fn from_char(c: char) -> AnsatzResult<Self> {
        match c.to_ascii_uppercase() {
            'X' => Ok(Axis::X),
            'Y' => Ok(Axis::Y),
            'Z' => Ok(Axis::Z),
            _ => Err(AnsatzError::InvalidAxis(c.to_string())),
        }
    }

    /// Parse from a one-letter string ("x", "Y", ...)
    pub fn parse(s: &str) -> AnsatzResult<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Err(AnsatzError::InvalidAxis(s.to_string())),
        }
    }

    /// Convert to character
    pub fn to_char(&self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }

    /// Name of the rotation gate about this axis
    pub fn gate_name(&self) -> &'static str {
        match self {
            Axis::X => "rx",
            Axis::Y => "ry",
            Axis::Z => "rz",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

// ============================================================================
// Tests
// ============================================================================
