//! Symbolic parameters for qansatz
//!
//! Gantree: L0_Foundation → ParameterStream
//!
//! A [`ParameterStream`] hands out uniquely named scalar handles
//! `prefix[0]`, `prefix[1]`, ... in allocation order. Handles are never
//! bound to numbers here.

use crate::error::{AnsatzError, AnsatzResult};
use crate::types::Angle;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

// ============================================================================
// Parameter
// ============================================================================

/// Opaque named scalar handle
/// Gantree: Parameter // 심볼 파라미터
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Parameter {
    /// Namespace shared by every handle of one stream
    prefix: String,

    /// Zero-based allocation offset within the stream
    index: usize,
}

impl Parameter {
    /// Create a handle directly
    ///
    /// Generators never call this; they draw from a [`ParameterStream`].
    pub fn new(prefix: impl Into<String>, index: usize) -> Self {
        Self {
            prefix: prefix.into(),
            index,
        }
    }

    /// Stream prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Offset within the stream
    pub fn index(&self) -> usize {
        self.index
    }

    /// Full name, e.g. `θ[3]`
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.prefix, self.index)
    }
}

// ============================================================================
// ParamExpr
// ============================================================================

/// A parameter times a fixed real coefficient
/// Gantree: ParamExpr // scale·param
///
/// The coefficient is not a degree of freedom; only the handle counts
/// toward an ansatz's parameter budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamExpr {
    parameter: Parameter,
    scale: Angle,
}

impl ParamExpr {
    /// Bare parameter (scale 1)
    pub fn new(parameter: Parameter) -> Self {
        Self::scaled(parameter, 1.0)
    }

    /// Parameter multiplied by `scale`
    pub fn scaled(parameter: Parameter, scale: Angle) -> Self {
        Self { parameter, scale }
    }

    /// Underlying handle
    pub fn parameter(&self) -> &Parameter {
        &self.parameter
    }

    /// Coefficient
    pub fn scale(&self) -> Angle {
        self.scale
    }
}

impl From<Parameter> for ParamExpr {
    fn from(parameter: Parameter) -> Self {
        Self::new(parameter)
    }
}

impl fmt::Display for ParamExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (self.scale - 1.0).abs() < 1e-12 {
            write!(f, "{}", self.parameter)
        } else if (self.scale - PI).abs() < 1e-12 {
            write!(f, "π*{}", self.parameter)
        } else {
            write!(f, "{}*{}", self.scale, self.parameter)
        }
    }
}

// ============================================================================
// ParameterStream
// ============================================================================

/// Sequential allocator of uniquely named parameters
/// Gantree: ParameterStream // 파라미터 스트림
///
/// Each stream starts at index 0. Two streams with different prefixes
/// never produce equal handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterStream {
    prefix: String,
    next_index: usize,
}

impl ParameterStream {
    /// Create a stream; the prefix must be non-empty
    pub fn new(prefix: impl Into<String>) -> AnsatzResult<Self> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(AnsatzError::EmptyPrefix);
        }
        Ok(Self {
            prefix,
            next_index: 0,
        })
    }

    /// Allocate `count` parameters from a fresh stream
    ///
    /// Equivalent to calling [`next_parameter`](Self::next_parameter)
    /// `count` times.
    pub fn allocate(prefix: impl Into<String>, count: i64) -> AnsatzResult<Vec<Parameter>> {
        if count < 0 {
            return Err(AnsatzError::NegativeParameterCount(count));
        }
        let too_large = || AnsatzError::ParameterCountTooLarge(count);
        let len = usize::try_from(count).map_err(|_| too_large())?;
        let mut stream = Self::new(prefix)?;

        let mut parameters = Vec::new();
        parameters.try_reserve_exact(len).map_err(|_| too_large())?;
        parameters.extend((0..len).map(|_| stream.next_parameter()));
        Ok(parameters)
    }

    /// Hand out the next handle
    pub fn next_parameter(&mut self) -> Parameter {
        let parameter = Parameter::new(self.prefix.clone(), self.next_index);
        self.next_index += 1;
        parameter
    }

    /// Hand out the next `count` handles in order
    pub fn take_parameters(&mut self, count: usize) -> Vec<Parameter> {
        (0..count).map(|_| self.next_parameter()).collect()
    }

    /// Stream prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of handles handed out so far
    pub fn allocated(&self) -> usize {
        self.next_index
    }
}

impl Iterator for ParameterStream {
    type Item = Parameter;

    fn next(&mut self) -> Option<Parameter> {
        Some(self.next_parameter())
    }
}

// ============================================================================
// Tests
// ============================================================================
