//! Circuit collaborator for qansatz
//!
//! Gantree: L1_Events → CircuitSink, Circuit
//!
//! [`CircuitSink`] is the seam to whatever circuit representation the
//! caller owns. [`Circuit`] is the in-memory sink shipped with the crate:
//! it checks operands and records events in call order.

use crate::error::{AnsatzError, AnsatzResult};
use crate::event::GateEvent;
use crate::parameter::ParamExpr;
use crate::types::{Axis, QubitId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

// ============================================================================
// CircuitSink
// ============================================================================

/// Circuit-building collaborator
/// Gantree: CircuitSink // trait
///
/// Every primitive returns a result; a rejected event stops emission and
/// the error reaches the caller.
pub trait CircuitSink {
    /// Apply a single-qubit rotation
    fn apply_rotation(&mut self, axis: Axis, angle: &ParamExpr, qubit: QubitId)
        -> AnsatzResult<()>;

    /// Apply a CNOT
    fn apply_controlled_not(&mut self, control: QubitId, target: QubitId) -> AnsatzResult<()>;

    /// Apply a reconfigurable beam splitter
    fn apply_beam_splitter(
        &mut self,
        angle: &ParamExpr,
        qubit_a: QubitId,
        qubit_b: QubitId,
    ) -> AnsatzResult<()>;

    /// Apply a barrier across the register
    fn apply_barrier(&mut self) -> AnsatzResult<()>;
}

// ============================================================================
// Circuit
// ============================================================================

/// Recording circuit
/// Gantree: Circuit // 회로 구조체
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Number of qubits
    /// Gantree: num_qubits: usize // 큐비트 수
    num_qubits: usize,

    /// Event sequence in call order
    /// Gantree: gates: Vec<GateEvent> // 게이트 목록
    gates: Vec<GateEvent>,

    /// Optional circuit name
    name: Option<String>,
}

impl Circuit {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new empty circuit
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
            name: None,
        }
    }

    /// Create a circuit with a name
    pub fn with_name(num_qubits: usize, name: impl Into<String>) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
            name: Some(name.into()),
        }
    }

    // ========================================================================
    // Basic Operations
    // ========================================================================

    /// Record an event after checking its operands
    /// Gantree: add_gate(&mut, GateEvent) -> Result // 게이트 추가
    pub fn add_gate(&mut self, gate: GateEvent) -> AnsatzResult<()> {
        let qubits = gate.qubits();
        for &qubit in &qubits {
            self.check_qubit(qubit)?;
        }
        if let [a, b] = qubits[..] {
            if a == b {
                return Err(AnsatzError::DuplicateQubit(a));
            }
        }
        self.gates.push(gate);
        Ok(())
    }

    fn check_qubit(&self, qubit: QubitId) -> AnsatzResult<()> {
        if qubit >= self.num_qubits {
            return Err(AnsatzError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    /// Get number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get recorded events
    pub fn gates(&self) -> &[GateEvent] {
        &self.gates
    }

    /// Get circuit name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Check if circuit is empty
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    // ========================================================================
    // Circuit Analysis
    // ========================================================================

    /// Calculate circuit depth (longest path)
    /// Gantree: depth(&self) -> usize // 깊이 계산
    pub fn depth(&self) -> usize {
        layered_depth(self.num_qubits, &self.gates)
    }

    /// Get total gate count
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Count single-qubit gates
    pub fn count_1q(&self) -> usize {
        self.gates.iter().filter(|g| g.is_single_qubit()).count()
    }

    /// Count two-qubit gates
    pub fn count_2q(&self) -> usize {
        self.gates.iter().filter(|g| g.is_two_qubit()).count()
    }

    /// Count parameterized gates
    pub fn count_parameterized(&self) -> usize {
        self.gates.iter().filter(|g| g.is_parameterized()).count()
    }

    /// Count barriers
    pub fn count_barriers(&self) -> usize {
        self.gates.iter().filter(|g| g.is_barrier()).count()
    }

    /// Get qubits used in the circuit
    pub fn used_qubits(&self) -> HashSet<QubitId> {
        self.gates.iter().flat_map(|g| g.qubits()).collect()
    }
}

impl CircuitSink for Circuit {
    fn apply_rotation(
        &mut self,
        axis: Axis,
        angle: &ParamExpr,
        qubit: QubitId,
    ) -> AnsatzResult<()> {
        self.add_gate(GateEvent::rotation(axis, qubit, angle.clone()))
    }

    fn apply_controlled_not(&mut self, control: QubitId, target: QubitId) -> AnsatzResult<()> {
        self.add_gate(GateEvent::cnot(control, target))
    }

    fn apply_beam_splitter(
        &mut self,
        angle: &ParamExpr,
        qubit_a: QubitId,
        qubit_b: QubitId,
    ) -> AnsatzResult<()> {
        self.add_gate(GateEvent::rbs(angle.clone(), qubit_a, qubit_b))
    }

    fn apply_barrier(&mut self) -> AnsatzResult<()> {
        self.add_gate(GateEvent::Barrier)
    }
}

// ============================================================================
// Depth
// ============================================================================

/// Layered depth of an event sequence
///
/// A barrier synchronizes every qubit to the current maximum and counts
/// as one layer.
pub fn layered_depth(num_qubits: usize, events: &[GateEvent]) -> usize {
    let mut qubit_depths = vec![0usize; num_qubits];

    for event in events {
        let qubits = event.qubits();
        if qubits.is_empty() {
            let max_depth = qubit_depths.iter().copied().max().unwrap_or(0);
            for d in &mut qubit_depths {
                *d = max_depth + 1;
            }
        } else {
            let max_depth = qubits
                .iter()
                .filter_map(|&q| qubit_depths.get(q))
                .max()
                .copied()
                .unwrap_or(0);

            for &q in &qubits {
                if let Some(d) = qubit_depths.get_mut(q) {
                    *d = max_depth + 1;
                }
            }
        }
    }

    qubit_depths.into_iter().max().unwrap_or(0)
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Circuit({} qubits, {} gates)",
            self.num_qubits,
            self.gates.len()
        )?;
        writeln!(f, "  Depth: {}", self.depth())?;
        writeln!(f, "  1Q gates: {}", self.count_1q())?;
        writeln!(f, "  2Q gates: {}", self.count_2q())?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::Parameter;

    fn angle(i: usize) -> ParamExpr {
        ParamExpr::new(Parameter::new("θ", i))
    }

    #[test]
    fn test_circuit_new() {
        let circuit = Circuit::with_name(5, "empty");
        assert_eq!(circuit.num_qubits(), 5);
        assert_eq!(circuit.name(), Some("empty"));
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_sink_records_in_order() {
        let mut circuit = Circuit::new(3);
        circuit.apply_rotation(Axis::Y, &angle(0), 0).unwrap();
        circuit.apply_controlled_not(0, 1).unwrap();
        circuit.apply_beam_splitter(&angle(1), 1, 2).unwrap();
        circuit.apply_barrier().unwrap();

        let names: Vec<&str> = circuit.gates().iter().map(|g| g.name()).collect();
        assert_eq!(names, vec!["ry", "cx", "rbs", "barrier"]);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut circuit = Circuit::new(2);
        let err = circuit.apply_controlled_not(0, 2).unwrap_err();
        assert_eq!(
            err,
            AnsatzError::QubitOutOfRange {
                qubit: 2,
                num_qubits: 2
            }
        );
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_duplicate_operand_rejected() {
        let mut circuit = Circuit::new(2);
        let err = circuit.apply_beam_splitter(&angle(0), 1, 1).unwrap_err();
        assert_eq!(err, AnsatzError::DuplicateQubit(1));
    }

    #[test]
    fn test_circuit_depth() {
        let mut circuit = Circuit::new(3);
        circuit.apply_rotation(Axis::X, &angle(0), 0).unwrap();
        circuit.apply_rotation(Axis::X, &angle(1), 1).unwrap();
        circuit.apply_controlled_not(0, 1).unwrap();
        circuit.apply_rotation(Axis::X, &angle(2), 2).unwrap();

        // Rx(0), Rx(1), Rx(2) in layer 1; CNOT in layer 2
        assert_eq!(circuit.depth(), 2);

        circuit.apply_barrier().unwrap();
        assert_eq!(circuit.depth(), 3);
    }

    #[test]
    fn test_gate_counts() {
        let mut circuit = Circuit::new(4);
        circuit.apply_rotation(Axis::Z, &angle(0), 3).unwrap();
        circuit.apply_controlled_not(0, 1).unwrap();
        circuit.apply_beam_splitter(&angle(1), 2, 3).unwrap();
        circuit.apply_barrier().unwrap();

        assert_eq!(circuit.gate_count(), 4);
        assert_eq!(circuit.count_1q(), 1);
        assert_eq!(circuit.count_2q(), 2);
        assert_eq!(circuit.count_parameterized(), 2);
        assert_eq!(circuit.count_barriers(), 1);
        assert_eq!(circuit.used_qubits().len(), 4);
    }

    #[test]
    fn test_display() {
        let mut circuit = Circuit::new(2);
        circuit.apply_controlled_not(0, 1).unwrap();
        let text = circuit.to_string();
        assert!(text.contains("Circuit(2 qubits, 1 gates)"));
        assert!(text.contains("2Q gates: 1"));
    }
}
