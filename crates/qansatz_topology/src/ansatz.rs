//! Ansatz value
//!
//! Gantree: L3_Ansatz → Ansatz
//!
//! An ordered event sequence with its register width and parameter
//! count. Built by [`AnsatzBuilder`](crate::builder::AnsatzBuilder);
//! replayed into any [`CircuitSink`].

use qansatz_core::{
    layered_depth, AnsatzError, AnsatzResult, CircuitSink, GateEvent, Parameter,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

// ============================================================================
// Stage
// ============================================================================

/// Output of one generator: its events and the parameters it drew
/// Gantree: Stage // 생성기 출력
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    events: Vec<GateEvent>,
    num_parameters: usize,
}

impl Stage {
    /// Create a stage
    pub fn new(events: Vec<GateEvent>, num_parameters: usize) -> Self {
        Self {
            events,
            num_parameters,
        }
    }

    /// Generated events
    pub fn events(&self) -> &[GateEvent] {
        &self.events
    }

    /// Parameters drawn from the stage's stream
    pub fn num_parameters(&self) -> usize {
        self.num_parameters
    }

    /// Take the events
    pub fn into_events(self) -> Vec<GateEvent> {
        self.events
    }
}

// ============================================================================
// Ansatz
// ============================================================================

/// Parameterized template circuit prior to binding
/// Gantree: Ansatz // 안사츠
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ansatz {
    /// Register width
    num_qubits: usize,

    /// Distinct parameter handles referenced by `events`
    num_parameters: usize,

    /// Gate events in application order
    events: Vec<GateEvent>,
}

impl Ansatz {
    /// Assemble an ansatz
    ///
    /// The builder is the usual entry point; use [`validate`](Self::validate)
    /// when assembling by hand.
    pub fn new(num_qubits: usize, num_parameters: usize, events: Vec<GateEvent>) -> Self {
        Self {
            num_qubits,
            num_parameters,
            events,
        }
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// Get number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get number of parameters
    pub fn num_parameters(&self) -> usize {
        self.num_parameters
    }

    /// Get events
    pub fn events(&self) -> &[GateEvent] {
        &self.events
    }

    /// Distinct parameter handles in first-reference order
    pub fn parameters(&self) -> Vec<&Parameter> {
        let mut seen = HashSet::new();
        self.events
            .iter()
            .filter_map(|e| e.parameter())
            .filter(|p| seen.insert(*p))
            .collect()
    }

    /// Count rotations
    pub fn count_rotations(&self) -> usize {
        self.events.iter().filter(|e| e.is_single_qubit()).count()
    }

    /// Count two-qubit events
    pub fn count_two_qubit(&self) -> usize {
        self.events.iter().filter(|e| e.is_two_qubit()).count()
    }

    /// Count barriers
    pub fn count_barriers(&self) -> usize {
        self.events.iter().filter(|e| e.is_barrier()).count()
    }

    /// Layered depth
    pub fn depth(&self) -> usize {
        layered_depth(self.num_qubits, &self.events)
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check the structural invariants
    /// Gantree: validate(&self) -> Result // 불변식 검증
    ///
    /// - every qubit index is in range
    /// - two-qubit operands are distinct
    /// - `num_parameters` equals the number of distinct handles
    /// - each prefix's indices are dense from zero and below
    ///   `num_parameters`
    pub fn validate(&self) -> AnsatzResult<()> {
        for event in &self.events {
            let qubits = event.qubits();
            for &qubit in &qubits {
                if qubit >= self.num_qubits {
                    return Err(AnsatzError::QubitOutOfRange {
                        qubit,
                        num_qubits: self.num_qubits,
                    });
                }
            }
            if let [a, b] = qubits[..] {
                if a == b {
                    return Err(AnsatzError::DuplicateQubit(a));
                }
            }
        }

        let parameters = self.parameters();
        let mismatch = AnsatzError::ParameterCountMismatch {
            declared: self.num_parameters,
            referenced: parameters.len(),
        };
        if parameters.len() != self.num_parameters {
            return Err(mismatch);
        }

        let mut by_prefix: BTreeMap<&str, BTreeSet<usize>> = BTreeMap::new();
        for p in &parameters {
            by_prefix.entry(p.prefix()).or_default().insert(p.index());
        }
        for indices in by_prefix.values() {
            let dense = indices.iter().copied().eq(0..indices.len());
            let in_budget = indices.iter().all(|&i| i < self.num_parameters);
            if !dense || !in_budget {
                return Err(mismatch);
            }
        }

        Ok(())
    }

    // ========================================================================
    // Emission
    // ========================================================================

    /// Replay every event into `sink`, in order
    /// Gantree: emit(&self, sink) -> Result // 회로 방출
    ///
    /// Stops at the first event the sink rejects and returns its error.
    pub fn emit<S: CircuitSink + ?Sized>(&self, sink: &mut S) -> AnsatzResult<()> {
        self.events.iter().try_for_each(|event| event.apply_to(sink))
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    /// Serialize to JSON
    pub fn to_json(&self) -> AnsatzResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON and validate
    pub fn from_json(json: &str) -> AnsatzResult<Self> {
        let ansatz: Self = serde_json::from_str(json)?;
        ansatz.validate()?;
        Ok(ansatz)
    }
}

impl fmt::Display for Ansatz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ansatz({} qubits, {} parameters, {} events, depth={})",
            self.num_qubits,
            self.num_parameters,
            self.events.len(),
            self.depth()
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use qansatz_core::{Axis, Circuit};

    fn p(prefix: &str, i: usize) -> Parameter {
        Parameter::new(prefix, i)
    }

    fn sample() -> Ansatz {
        Ansatz::new(
            3,
            3,
            vec![
                GateEvent::rotation(Axis::Y, 0, p("θ", 0)),
                GateEvent::rotation(Axis::Y, 1, p("θ", 1)),
                GateEvent::cnot(0, 1),
                GateEvent::rbs(p("θ", 2), 1, 2),
                GateEvent::Barrier,
            ],
        )
    }

    #[test]
    fn test_ansatz_counts() {
        let ansatz = sample();
        assert_eq!(ansatz.count_rotations(), 2);
        assert_eq!(ansatz.count_two_qubit(), 2);
        assert_eq!(ansatz.count_barriers(), 1);
        assert_eq!(ansatz.depth(), 4);
        assert!(ansatz.validate().is_ok());
    }

    #[test]
    fn test_parameters_first_reference_order() {
        let ansatz = Ansatz::new(
            2,
            2,
            vec![
                GateEvent::rotation(Axis::X, 0, p("x", 1)),
                GateEvent::rotation(Axis::X, 1, p("x", 0)),
                GateEvent::rotation(Axis::Z, 0, p("x", 1)),
            ],
        );
        let names: Vec<String> = ansatz.parameters().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["x[1]", "x[0]"]);
        assert!(ansatz.validate().is_ok());
    }

    #[test]
    fn test_validate_out_of_range() {
        let ansatz = Ansatz::new(2, 0, vec![GateEvent::cnot(0, 2)]);
        assert_eq!(
            ansatz.validate().unwrap_err(),
            AnsatzError::QubitOutOfRange {
                qubit: 2,
                num_qubits: 2
            }
        );
    }

    #[test]
    fn test_validate_duplicate_operands() {
        let ansatz = Ansatz::new(2, 0, vec![GateEvent::cnot(1, 1)]);
        assert_eq!(ansatz.validate().unwrap_err(), AnsatzError::DuplicateQubit(1));
    }

    #[test]
    fn test_validate_count_mismatch() {
        let ansatz = Ansatz::new(1, 2, vec![GateEvent::rotation(Axis::X, 0, p("x", 0))]);
        assert!(ansatz.validate().unwrap_err().is_structural_error());
    }

    #[test]
    fn test_validate_gap_in_allocation() {
        let ansatz = Ansatz::new(
            2,
            2,
            vec![
                GateEvent::rotation(Axis::X, 0, p("x", 0)),
                GateEvent::rotation(Axis::X, 1, p("x", 2)),
            ],
        );
        assert!(ansatz.validate().is_err());
    }

    #[test]
    fn test_emit_into_circuit() {
        let ansatz = sample();
        let mut circuit = Circuit::new(3);
        ansatz.emit(&mut circuit).unwrap();
        assert_eq!(circuit.gates(), ansatz.events());
    }

    #[test]
    fn test_emit_propagates_sink_error() {
        let ansatz = sample();
        let mut narrow = Circuit::new(2);
        let err = ansatz.emit(&mut narrow).unwrap_err();
        assert!(matches!(err, AnsatzError::QubitOutOfRange { qubit: 2, .. }));
        assert_eq!(narrow.gate_count(), 3);
    }

    #[test]
    fn test_json_export() {
        let ansatz = sample();
        let json = ansatz.to_json().unwrap();
        assert!(json.contains("ReconfigurableBeamSplitter"));
        assert_eq!(Ansatz::from_json(&json).unwrap(), ansatz);
    }

    #[test]
    fn test_display() {
        let text = sample().to_string();
        assert!(text.contains("3 qubits"));
        assert!(text.contains("3 parameters"));
    }
}
