//! Gate events for qansatz
//!
//! Gantree: L1_Events → GateEvent
//!
//! Generators describe an ansatz as an ordered list of immutable
//! [`GateEvent`]s; nothing touches a concrete circuit until the list is
//! replayed into a [`CircuitSink`].

use crate::circuit::CircuitSink;
use crate::error::AnsatzResult;
use crate::parameter::{ParamExpr, Parameter};
use crate::types::{Axis, QubitId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One gate-application instruction
/// Gantree: GateEvent // 게이트 이벤트
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GateEvent {
    /// Parameterized rotation about `axis` on one qubit
    SingleQubitRotation {
        /// Rotation axis
        axis: Axis,
        /// Target qubit
        qubit: QubitId,
        /// Rotation angle
        angle: ParamExpr,
    },

    /// CNOT
    ControlledNot {
        /// Control qubit
        control: QubitId,
        /// Target qubit
        target: QubitId,
    },

    /// Parameterized two-qubit reconfigurable beam splitter (RBS)
    ReconfigurableBeamSplitter {
        /// Mixing angle
        angle: ParamExpr,
        /// First operand
        qubit_a: QubitId,
        /// Second operand
        qubit_b: QubitId,
    },

    /// Barrier across the whole register
    Barrier,
}

impl GateEvent {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Rotation about `axis` by `angle`
    pub fn rotation(axis: Axis, qubit: QubitId, angle: impl Into<ParamExpr>) -> Self {
        GateEvent::SingleQubitRotation {
            axis,
            qubit,
            angle: angle.into(),
        }
    }

    /// CNOT from `control` to `target`
    pub fn cnot(control: QubitId, target: QubitId) -> Self {
        GateEvent::ControlledNot { control, target }
    }

    /// RBS on `(qubit_a, qubit_b)`
    pub fn rbs(angle: impl Into<ParamExpr>, qubit_a: QubitId, qubit_b: QubitId) -> Self {
        GateEvent::ReconfigurableBeamSplitter {
            angle: angle.into(),
            qubit_a,
            qubit_b,
        }
    }

    // ========================================================================
    // Event Properties
    // ========================================================================

    /// Qubits touched by this event (empty for a barrier)
    pub fn qubits(&self) -> Vec<QubitId> {
        match self {
            GateEvent::SingleQubitRotation { qubit, .. } => vec![*qubit],
            GateEvent::ControlledNot { control, target } => vec![*control, *target],
            GateEvent::ReconfigurableBeamSplitter {
                qubit_a, qubit_b, ..
            } => vec![*qubit_a, *qubit_b],
            GateEvent::Barrier => vec![],
        }
    }

    /// Parameter handle consumed by this event, if any
    pub fn parameter(&self) -> Option<&Parameter> {
        match self {
            GateEvent::SingleQubitRotation { angle, .. }
            | GateEvent::ReconfigurableBeamSplitter { angle, .. } => Some(angle.parameter()),
            GateEvent::ControlledNot { .. } | GateEvent::Barrier => None,
        }
    }

    /// Check if event is single-qubit
    pub fn is_single_qubit(&self) -> bool {
        matches!(self, GateEvent::SingleQubitRotation { .. })
    }

    /// Check if event is two-qubit
    pub fn is_two_qubit(&self) -> bool {
        matches!(
            self,
            GateEvent::ControlledNot { .. } | GateEvent::ReconfigurableBeamSplitter { .. }
        )
    }

    /// Check if event consumes a parameter
    pub fn is_parameterized(&self) -> bool {
        self.parameter().is_some()
    }

    /// Check if event is a barrier
    pub fn is_barrier(&self) -> bool {
        matches!(self, GateEvent::Barrier)
    }

    /// Get gate name
    pub fn name(&self) -> &'static str {
        match self {
            GateEvent::SingleQubitRotation { axis, .. } => axis.gate_name(),
            GateEvent::ControlledNot { .. } => "cx",
            GateEvent::ReconfigurableBeamSplitter { .. } => "rbs",
            GateEvent::Barrier => "barrier",
        }
    }

    /// OpenQASM-like one-line form, for logs and debugging
    pub fn to_qasm(&self) -> String {
        match self {
            GateEvent::SingleQubitRotation { axis, qubit, angle } => {
                format!("{}({}) q[{}];", axis.gate_name(), angle, qubit)
            }
            GateEvent::ControlledNot { control, target } => {
                format!("cx q[{}],q[{}];", control, target)
            }
            GateEvent::ReconfigurableBeamSplitter {
                angle,
                qubit_a,
                qubit_b,
            } => format!("rbs({}) q[{}],q[{}];", angle, qubit_a, qubit_b),
            GateEvent::Barrier => "barrier q;".to_string(),
        }
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Forward this event to the matching sink primitive
    /// Gantree: apply_to(&self, sink) -> Result // 디스패치
    pub fn apply_to<S: CircuitSink + ?Sized>(&self, sink: &mut S) -> AnsatzResult<()> {
        match self {
            GateEvent::SingleQubitRotation { axis, qubit, angle } => {
                sink.apply_rotation(*axis, angle, *qubit)
            }
            GateEvent::ControlledNot { control, target } => {
                sink.apply_controlled_not(*control, *target)
            }
            GateEvent::ReconfigurableBeamSplitter {
                angle,
                qubit_a,
                qubit_b,
            } => sink.apply_beam_splitter(angle, *qubit_a, *qubit_b),
            GateEvent::Barrier => sink.apply_barrier(),
        }
    }
}

impl fmt::Display for GateEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_qasm())
    }
}

// ============================================================================
// Tests
// ============================================================================
