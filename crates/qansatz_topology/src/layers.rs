//! Shared rotation layers
//!
//! Gantree: L2_Topology → Layers

use qansatz_core::{defaults, Angle, Axis, GateEvent, ParamExpr, ParameterStream};

/// One rotation about `axis` per qubit, ascending, each drawing the next
/// parameter from `stream`
/// Gantree: rotation_layer(n, axis, stream, scale) // 회전 레이어
pub fn rotation_layer(
    num_qubits: usize,
    axis: Axis,
    stream: &mut ParameterStream,
    scale: Angle,
) -> Vec<GateEvent> {
    (0..num_qubits)
        .map(|qubit| {
            let angle = ParamExpr::scaled(stream.next_parameter(), scale);
            GateEvent::rotation(axis, qubit, angle)
        })
        .collect()
}

/// Ry on every qubit followed by Rz on every qubit
/// Gantree: rotation_pair_layer(n, stream) // Ry+Rz 레이어
pub fn rotation_pair_layer(num_qubits: usize, stream: &mut ParameterStream) -> Vec<GateEvent> {
    let mut events = rotation_layer(num_qubits, Axis::Y, stream, defaults::UNIT_SCALE);
    events.extend(rotation_layer(num_qubits, Axis::Z, stream, defaults::UNIT_SCALE));
    events
}
