//! Alternating Ry/Rz brick sweep (SU(2)-style ansatz)
//!
//! Gantree: L2_Topology → BrickSweep
//!
//! `num_qubits` rotation-pair layers separated by `num_qubits - 1`
//! right-to-left CNOT sweeps, drawing `2·n²` parameters from one stream.
//!
//! ```text
//!      ┌──────────┐┌──────────┐                  ┌──────────┐
//! q_0: ┤ Ry(θ[0]) ├┤ Rz(θ[3]) ├──────────■───────┤ Ry(θ[6]) ├─ ...
//!      ├──────────┤├──────────┤        ┌─┴─┐     ├──────────┤
//! q_1: ┤ Ry(θ[1]) ├┤ Rz(θ[4]) ├──■─────┤ X ├─────┤ Ry(θ[7]) ├─ ...
//!      ├──────────┤├──────────┤┌─┴─┐┌──┴───┴───┐┌┴──────────┤
//! q_2: ┤ Ry(θ[2]) ├┤ Rz(θ[5]) ├┤ X ├┤ Ry(θ[8]) ├┤ Rz(θ[11]) ├─ ...
//!      └──────────┘└──────────┘└───┘└──────────┘└───────────┘
//! ```

use crate::ansatz::Stage;
use crate::layers::rotation_pair_layer;
use qansatz_core::{AnsatzError, AnsatzResult, GateEvent, ParameterStream};

/// Generate the brick sweep
/// Gantree: generate(n, prefix) -> Stage // 브릭 스윕 생성
pub fn generate(num_qubits: usize, param_prefix: &str) -> AnsatzResult<Stage> {
    if num_qubits < 1 {
        return Err(AnsatzError::InvalidQubitCount { num_qubits: 0 });
    }

    let mut stream = ParameterStream::new(param_prefix)?;
    let mut events = rotation_pair_layer(num_qubits, &mut stream);

    for sweep in 0..num_qubits - 1 {
        for i in (1..num_qubits).rev() {
            events.push(GateEvent::cnot(i - 1, i));
        }
        events.extend(rotation_pair_layer(num_qubits, &mut stream));
        log::trace!("brick sweep {}: {} parameters drawn", sweep, stream.allocated());
    }

    debug_assert_eq!(stream.allocated(), num_parameters(num_qubits));
    Ok(Stage::new(events, stream.allocated()))
}

/// Parameter budget: 2·n²
pub fn num_parameters(num_qubits: usize) -> usize {
    2 * num_qubits * num_qubits
}

/// Total event count: n pair layers of 2n rotations plus (n-1) sweeps of
/// (n-1) CNOTs
pub fn num_events(num_qubits: usize) -> usize {
    let sweeps = num_qubits.saturating_sub(1);
    num_parameters(num_qubits) + sweeps * sweeps
}

// ============================================================================
// Tests
// ============================================================================
