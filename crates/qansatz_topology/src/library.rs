//! String-keyed ansatz library
//!
//! Gantree: L3_Ansatz → Library
//!
//! `generate("butterfly", 8, &options)` and friends: resolves a topology
//! name and raw options into a validated configuration, then builds.

use crate::ansatz::Ansatz;
use crate::builder::AnsatzBuilder;
use crate::config::{TopologyConfig, TopologyOptions};
use qansatz_core::{AnsatzError, AnsatzResult, CircuitSink};

/// Resolve a name, qubit count, and options into a builder
fn resolve(
    topology_name: &str,
    num_qubits: i64,
    options: &TopologyOptions,
) -> AnsatzResult<AnsatzBuilder> {
    if num_qubits < 1 {
        return Err(AnsatzError::InvalidQubitCount { num_qubits });
    }
    let num_qubits = usize::try_from(num_qubits)
        .map_err(|_| AnsatzError::InvalidQubitCount { num_qubits })?;

    let topology = TopologyConfig::from_name(topology_name, options)?;
    log::debug!("generate {} for {} qubits", topology, num_qubits);

    let builder = AnsatzBuilder::new(num_qubits).topology(topology);
    Ok(match options.encoding() {
        Some(encoding) => builder.encoding_config(encoding),
        None => builder,
    })
}

/// Generate an ansatz by topology name
/// Gantree: generate(name, n, options) -> Result<Ansatz> // 이름으로 생성
///
/// `topology_name` is one of `ladder-x`, `ladder-y`, `ladder-z`,
/// `brick-sweep`, `butterfly`. Identical arguments always produce
/// identical ansätze.
pub fn generate(
    topology_name: &str,
    num_qubits: i64,
    options: &TopologyOptions,
) -> AnsatzResult<Ansatz> {
    resolve(topology_name, num_qubits, options)
        .and_then(AnsatzBuilder::build)
        .map_err(|err| rejected(topology_name, num_qubits, err))
}

/// Generate by name and replay into `sink`
pub fn generate_into<S: CircuitSink + ?Sized>(
    topology_name: &str,
    num_qubits: i64,
    options: &TopologyOptions,
    sink: &mut S,
) -> AnsatzResult<Ansatz> {
    resolve(topology_name, num_qubits, options)
        .and_then(|builder| builder.build_into(sink))
        .map_err(|err| rejected(topology_name, num_qubits, err))
}

fn rejected(topology_name: &str, num_qubits: i64, err: AnsatzError) -> AnsatzError {
    log::warn!("generate {} on {} qubits failed: {}", topology_name, num_qubits, err);
    err
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use qansatz_core::{Axis, Circuit};
    use std::sync::Mutex;

    struct Capture {
        records: Mutex<Vec<String>>,
    }

    impl log::Log for Capture {
        fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record<'_>) {
            if self.enabled(record.metadata()) {
                if let Ok(mut records) = self.records.lock() {
                    records.push(record.args().to_string());
                }
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture {
        records: Mutex::new(Vec::new()),
    };

    fn warnings_containing(needle: &str) -> usize {
        CAPTURE
            .records
            .lock()
            .map(|records| records.iter().filter(|r| r.contains(needle)).count())
            .unwrap_or(0)
    }

    #[test]
    fn test_generate_defaults() {
        let options = TopologyOptions::new();

        let ladder = generate("ladder-x", 4, &options).unwrap();
        assert_eq!(ladder.num_parameters(), 4);
        assert_eq!(ladder.count_two_qubit(), 3);

        let sweep = generate("brick-sweep", 2, &options).unwrap();
        assert_eq!(sweep.num_parameters(), 8);

        let butterfly = generate("butterfly", 2, &options).unwrap();
        assert_eq!(butterfly.num_parameters(), 1);
    }

    #[test]
    fn test_generate_non_positive_qubits() {
        for n in [0, -1, -64] {
            let err = generate("brick-sweep", n, &TopologyOptions::new()).unwrap_err();
            assert_eq!(err, AnsatzError::InvalidQubitCount { num_qubits: n });
            assert!(err.to_string().contains(&n.to_string()));
        }
    }

    #[test]
    fn test_generate_with_encoding() {
        let options = TopologyOptions::new()
            .with_encoding(Axis::Y)
            .with_encoding_prefix("e");
        let ansatz = generate("butterfly", 4, &options).unwrap();

        assert_eq!(ansatz.num_parameters(), 4 + 4);
        assert_eq!(ansatz.events()[0].to_string(), "ry(π*e[0]) q[0];");
        assert!(ansatz.validate().is_ok());
    }

    #[test]
    fn test_generate_encoding_collides_with_topology() {
        let options = TopologyOptions::new()
            .with_encoding(Axis::X)
            .with_encoding_prefix("x");
        let err = generate("ladder-z", 3, &options).unwrap_err();
        assert_eq!(err, AnsatzError::PrefixCollision("x".into()));
    }

    #[test]
    fn test_generate_into_circuit() {
        let mut circuit = Circuit::new(3);
        let ansatz =
            generate_into("ladder-z", 3, &TopologyOptions::new(), &mut circuit).unwrap();
        assert_eq!(circuit.gates(), ansatz.events());
        assert_eq!(circuit.count_1q(), 3);
    }

    #[test]
    fn test_generate_into_error_emits_nothing() {
        let mut circuit = Circuit::new(6);
        let result = generate_into("butterfly", 6, &TopologyOptions::new(), &mut circuit);
        assert!(result.unwrap_err().is_configuration_error());
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_failure_warns_once_on_both_paths() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(log::LevelFilter::Warn);

        assert!(generate("butterfly", 24, &TopologyOptions::new()).is_err());
        assert_eq!(warnings_containing("butterfly on 24 qubits"), 1);

        let mut circuit = Circuit::new(4);
        let options = TopologyOptions::new();
        assert!(generate_into("ring", 4, &options, &mut circuit).is_err());
        assert_eq!(warnings_containing("generate ring on 4 qubits"), 1);
    }
}
