//! Depth-staggered CNOT ladder
//!
//! Gantree: L2_Topology → Ladder
//!
//! An angle-encoding rotation layer followed by `entanglement_depth`
//! strided CNOT layers: layer `k` applies `CNOT(j, j + k + 1)` for every
//! `j` that keeps the target in range.
//!
//! ```text
//!      ┌──────────┐
//! q_0: ┤ Rx(π*x0) ├──■──────────────■─────────■──
//!      ├──────────┤┌─┴─┐            │         │
//! q_1: ┤ Rx(π*x1) ├┤ X ├──■─────────┼────■────┼──
//!      ├──────────┤└───┘┌─┴─┐     ┌─┴─┐  │    │
//! q_2: ┤ Rx(π*x2) ├─────┤ X ├──■──┤ X ├──┼────┼──
//!      ├──────────┤     └───┘┌─┴─┐└───┘┌─┴─┐┌─┴─┐
//! q_3: ┤ Rx(π*x3) ├──────────┤ X ├─────┤ X ├┤ X ├
//!      └──────────┘          └───┘     └───┘└───┘
//! ```

use crate::ansatz::Stage;
use crate::layers::rotation_layer;
use qansatz_core::{defaults, AnsatzError, AnsatzResult, Axis, GateEvent, ParameterStream};

/// Generate the ladder
/// Gantree: generate(n, depth, axis, prefix) -> Stage // 래더 생성
///
/// Consumes exactly `num_qubits` parameters. Layers with
/// `k >= num_qubits - 1` are empty rather than an error.
pub fn generate(
    num_qubits: usize,
    entanglement_depth: usize,
    axis: Axis,
    param_prefix: &str,
) -> AnsatzResult<Stage> {
    if num_qubits < 1 {
        return Err(AnsatzError::InvalidQubitCount { num_qubits: 0 });
    }

    let mut stream = ParameterStream::new(param_prefix)?;
    let mut events = rotation_layer(num_qubits, axis, &mut stream, defaults::ENCODING_SCALE);
    events.reserve(cnot_count(num_qubits, entanglement_depth));

    for k in 0..nonempty_layers(num_qubits, entanglement_depth) {
        let stride = k + 1;
        let layer_start = events.len();
        for top_qubit in 0..num_qubits.saturating_sub(stride) {
            events.push(GateEvent::cnot(top_qubit, top_qubit + stride));
        }
        log::trace!(
            "ladder layer k={}: {} CNOTs",
            k,
            events.len() - layer_start
        );
    }

    Ok(Stage::new(events, stream.allocated()))
}

/// Number of CNOTs: Σ_{k<depth} max(0, n - k - 1)
pub fn cnot_count(num_qubits: usize, entanglement_depth: usize) -> usize {
    (0..nonempty_layers(num_qubits, entanglement_depth))
        .map(|k| num_qubits.saturating_sub(k + 1))
        .sum()
}

/// Layers with `k >= num_qubits - 1` have no valid target
fn nonempty_layers(num_qubits: usize, entanglement_depth: usize) -> usize {
    entanglement_depth.min(num_qubits.saturating_sub(1))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cnot_pairs(stage: &Stage) -> Vec<(usize, usize)> {
        stage
            .events()
            .iter()
            .filter_map(|e| match e {
                GateEvent::ControlledNot { control, target } => Some((*control, *target)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_ladder_4q_depth_3() {
        let stage = generate(4, 3, Axis::Y, "y").unwrap();

        assert_eq!(stage.num_parameters(), 4);
        for (q, event) in stage.events()[..4].iter().enumerate() {
            assert_eq!(event.qubits(), vec![q]);
            assert_eq!(event.name(), "ry");
        }
        assert_eq!(
            cnot_pairs(&stage),
            vec![(0, 1), (1, 2), (2, 3), (0, 2), (1, 3), (0, 3)]
        );
        assert_eq!(stage.events().len(), 10);
    }

    #[test]
    fn test_ladder_depth_zero() {
        let stage = generate(5, 0, Axis::X, "x").unwrap();
        assert_eq!(stage.events().len(), 5);
        assert!(cnot_pairs(&stage).is_empty());
    }

    #[test]
    fn test_ladder_depth_exceeds_qubits() {
        let stage = generate(3, 10, Axis::Z, "x").unwrap();
        // k=0: 2, k=1: 1, k>=2: 0
        assert_eq!(cnot_pairs(&stage).len(), 3);
        assert_eq!(cnot_count(3, 10), 3);
    }

    #[test]
    fn test_ladder_huge_depth_is_bounded() {
        let stage = generate(4, 1 << 40, Axis::X, "x").unwrap();
        assert_eq!(
            cnot_pairs(&stage),
            vec![(0, 1), (1, 2), (2, 3), (0, 2), (1, 3), (0, 3)]
        );
        assert_eq!(cnot_count(4, usize::MAX), 6);
    }

    #[test]
    fn test_ladder_single_qubit() {
        let stage = generate(1, 2, Axis::X, "x").unwrap();
        assert_eq!(stage.events().len(), 1);
        assert_eq!(stage.num_parameters(), 1);
    }

    #[test]
    fn test_ladder_zero_qubits() {
        let err = generate(0, 1, Axis::X, "x").unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_cnot_count_formula() {
        for n in 1..9 {
            for depth in 0..10 {
                let stage = generate(n, depth, Axis::X, "x").unwrap();
                let expected: usize = (0..depth).map(|k| n.saturating_sub(k + 1)).sum();
                assert_eq!(cnot_pairs(&stage).len(), expected, "n={n} depth={depth}");
            }
        }
    }

    #[test]
    fn test_ladder_scale_is_pi() {
        let stage = generate(2, 1, Axis::X, "x").unwrap();
        assert_eq!(stage.events()[0].to_string(), "rx(π*x[0]) q[0];");
    }
}
