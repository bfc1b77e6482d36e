//! Ansatz builder
//!
//! Gantree: L3_Ansatz → AnsatzBuilder
//!
//! Composes an optional encoding rotation layer with one or more topology
//! stages. All configuration is checked before the first generator runs,
//! so a build either yields a complete [`Ansatz`] or an error and no
//! events.

use crate::ansatz::Ansatz;
use crate::config::{AnsatzConfig, EncodingConfig, TopologyConfig};
use crate::layers::rotation_layer;
use qansatz_core::{AnsatzResult, Axis, CircuitSink, ParameterStream};

/// Fluent ansatz builder (consuming self pattern)
/// Gantree: AnsatzBuilder // 빌더 패턴
#[derive(Debug, Clone)]
pub struct AnsatzBuilder {
    config: AnsatzConfig,
}

impl AnsatzBuilder {
    // ========================================================================
    // Constructor
    // ========================================================================

    /// Create a builder for `num_qubits` with no stages yet
    pub fn new(num_qubits: usize) -> Self {
        Self {
            config: AnsatzConfig {
                num_qubits,
                encoding: None,
                topologies: Vec::new(),
            },
        }
    }

    /// Create from a full configuration
    pub fn from_config(config: AnsatzConfig) -> Self {
        Self { config }
    }

    // ========================================================================
    // Stages
    // ========================================================================

    /// Prepend an encoding layer about `axis` with default prefix and scale
    pub fn encoding(self, axis: Axis) -> Self {
        self.encoding_config(EncodingConfig::new(axis))
    }

    /// Prepend a fully specified encoding layer
    pub fn encoding_config(mut self, encoding: EncodingConfig) -> Self {
        self.config.encoding = Some(encoding);
        self
    }

    /// Append a topology stage
    pub fn topology(mut self, topology: TopologyConfig) -> Self {
        self.config.topologies.push(topology);
        self
    }

    /// Append a ladder
    pub fn ladder(self, axis: Axis, entanglement_depth: usize) -> Self {
        self.topology(TopologyConfig::ladder(axis).with_entanglement_depth(entanglement_depth))
    }

    /// Append a brick sweep
    pub fn brick_sweep(self) -> Self {
        self.topology(TopologyConfig::brick_sweep())
    }

    /// Append a butterfly
    pub fn butterfly(self) -> Self {
        self.topology(TopologyConfig::butterfly())
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Get the configuration built so far
    pub fn config(&self) -> &AnsatzConfig {
        &self.config
    }

    /// Validate, generate every stage, and concatenate
    /// Gantree: build(self) -> Result<Ansatz> // 빌드
    pub fn build(self) -> AnsatzResult<Ansatz> {
        self.config.validate()?;

        let num_qubits = self.config.num_qubits;
        let mut events = Vec::new();
        let mut num_parameters = 0;

        if let Some(encoding) = &self.config.encoding {
            let mut stream = ParameterStream::new(encoding.param_prefix.as_str())?;
            events.extend(rotation_layer(
                num_qubits,
                encoding.axis,
                &mut stream,
                encoding.scale,
            ));
            num_parameters += stream.allocated();
        }

        for topology in &self.config.topologies {
            let stage = topology.generate(num_qubits)?;
            num_parameters += stage.num_parameters();
            events.extend(stage.into_events());
        }

        let ansatz = Ansatz::new(num_qubits, num_parameters, events);
        log::debug!("built {} from {}", ansatz, self.config);
        Ok(ansatz)
    }

    /// Build, then replay every event into `sink`
    /// Gantree: build_into(self, sink) -> Result<Ansatz> // 빌드+방출
    pub fn build_into<S: CircuitSink + ?Sized>(self, sink: &mut S) -> AnsatzResult<Ansatz> {
        let ansatz = self.build()?;
        ansatz.emit(sink)?;
        Ok(ansatz)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use qansatz_core::{AnsatzError, Circuit, GateEvent};

    #[test]
    fn test_builder_single_topology() {
        let ansatz = AnsatzBuilder::new(4).butterfly().build().unwrap();
        assert_eq!(ansatz.num_parameters(), 4);
        assert_eq!(ansatz.count_barriers(), 2);
        assert!(ansatz.validate().is_ok());
    }

    #[test]
    fn test_builder_encoding_prepended() {
        let ansatz = AnsatzBuilder::new(3)
            .encoding(Axis::Z)
            .brick_sweep()
            .build()
            .unwrap();

        assert_eq!(ansatz.num_parameters(), 3 + 18);
        let head: Vec<String> = ansatz.events()[..4].iter().map(|e| e.to_string()).collect();
        assert_eq!(
            head,
            vec![
                "rz(π*φ[0]) q[0];",
                "rz(π*φ[1]) q[1];",
                "rz(π*φ[2]) q[2];",
                "ry(θ[0]) q[0];"
            ]
        );
        assert!(ansatz.validate().is_ok());
    }

    #[test]
    fn test_builder_multiple_stages() {
        let ansatz = AnsatzBuilder::new(4)
            .ladder(Axis::X, 2)
            .topology(TopologyConfig::butterfly().with_param_prefix("β"))
            .build()
            .unwrap();

        // ladder: 4 rotations + 3 + 2 CNOTs; butterfly: 4 RBS + 2 barriers
        assert_eq!(ansatz.events().len(), 15);
        assert_eq!(ansatz.num_parameters(), 8);
        assert_eq!(ansatz.parameters().len(), 8);
        assert!(ansatz.validate().is_ok());
    }

    #[test]
    fn test_builder_no_topology() {
        let err = AnsatzBuilder::new(3).encoding(Axis::X).build().unwrap_err();
        assert_eq!(err, AnsatzError::NoTopology);
    }

    #[test]
    fn test_builder_prefix_collision() {
        let err = AnsatzBuilder::new(2)
            .encoding_config(EncodingConfig::new(Axis::X).with_param_prefix("θ"))
            .brick_sweep()
            .build()
            .unwrap_err();
        assert_eq!(err, AnsatzError::PrefixCollision("θ".into()));
    }

    #[test]
    fn test_build_into_emits_in_order() {
        let mut circuit = Circuit::new(2);
        let ansatz = AnsatzBuilder::new(2)
            .encoding(Axis::X)
            .butterfly()
            .build_into(&mut circuit)
            .unwrap();

        assert_eq!(circuit.gates(), ansatz.events());
        assert!(matches!(
            circuit.gates().last(),
            Some(GateEvent::Barrier)
        ));
    }

    #[test]
    fn test_build_into_invalid_emits_nothing() {
        let mut circuit = Circuit::new(6);
        let err = AnsatzBuilder::new(6)
            .encoding(Axis::Y)
            .butterfly()
            .build_into(&mut circuit)
            .unwrap_err();

        assert_eq!(err, AnsatzError::NotPowerOfTwo(6));
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_build_into_sink_failure_propagates() {
        let mut narrow = Circuit::new(2);
        let err = AnsatzBuilder::new(4)
            .brick_sweep()
            .build_into(&mut narrow)
            .unwrap_err();
        assert!(matches!(err, AnsatzError::QubitOutOfRange { qubit: 2, .. }));
    }

    #[test]
    fn test_from_config() {
        let config = AnsatzConfig::new(2, TopologyConfig::ladder(Axis::Y));
        let ansatz = AnsatzBuilder::from_config(config).build().unwrap();
        assert_eq!(ansatz.num_parameters(), 2);
        assert_eq!(ansatz.count_two_qubit(), 1);
    }
}
