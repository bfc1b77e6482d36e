//! Recursive pairwise butterfly network
//!
//! Gantree: L2_Topology → Butterfly
//!
//! For `n = 2^d` qubits, level `depth` (from `d-1` down to `0`) splits
//! the register into blocks of `2^(depth+1)` and pairs each element of a
//! block's first half with its partner in the second half, one RBS per
//! pair. Every level is a perfect matching of the register and ends with
//! a barrier.
//!
//! ```text
//!      ┌───────────┐               ░ ┌───────────┐ ░
//! q_0: ┤0          ├───────────────░─┤0          ├─░─
//!      │           │┌───────────┐  ░ │ RBS(θ[2]) │ ░
//! q_1: ┤ RBS(θ[0]) ├┤0          ├──░─┤1          ├─░─
//!      │           ││           │  ░ ├───────────┤ ░
//! q_2: ┤1          ├┤ RBS(θ[1]) ├──░─┤0          ├─░─
//!      └───────────┘│           │  ░ │ RBS(θ[3]) │ ░
//! q_3: ─────────────┤1          ├──░─┤1          ├─░─
//!                   └───────────┘  ░ └───────────┘ ░
//! ```

use crate::ansatz::Stage;
use qansatz_core::{AnsatzError, AnsatzResult, GateEvent, ParamExpr, ParameterStream, QubitId};

/// Number of levels, `log2(num_qubits)`
///
/// Checked with integer arithmetic; anything but an exact power of two
/// is rejected.
pub fn levels(num_qubits: usize) -> AnsatzResult<u32> {
    if num_qubits < 1 {
        return Err(AnsatzError::InvalidQubitCount { num_qubits: 0 });
    }
    if !num_qubits.is_power_of_two() {
        return Err(AnsatzError::NotPowerOfTwo(num_qubits));
    }
    Ok(num_qubits.trailing_zeros())
}

/// Parameter budget: d·n/2
pub fn num_parameters(num_qubits: usize) -> AnsatzResult<usize> {
    let d = levels(num_qubits)? as usize;
    Ok(d * num_qubits / 2)
}

/// Pairs of one level, in emission order
/// Gantree: level_pairs(d, depth) -> Vec<(q,q)> // 레벨 페어
pub fn level_pairs(levels: u32, depth: u32) -> Vec<(QubitId, QubitId)> {
    let half = 1usize << depth;
    let blocks = 1usize << (levels - depth - 1);

    let mut pairs = Vec::with_capacity(half * blocks);
    for j in 0..half {
        for i in 0..blocks {
            let offset = i * (half << 1);
            pairs.push((offset + j, offset + j + half));
        }
    }
    pairs
}

/// Generate the butterfly
/// Gantree: generate(n, prefix) -> Stage // 버터플라이 생성
pub fn generate(num_qubits: usize, param_prefix: &str) -> AnsatzResult<Stage> {
    let d = levels(num_qubits)?;

    let mut stream = ParameterStream::new(param_prefix)?;
    let mut events = Vec::with_capacity(num_parameters(num_qubits)? + d as usize);

    for depth in (0..d).rev() {
        for (qubit_a, qubit_b) in level_pairs(d, depth) {
            let angle = ParamExpr::new(stream.next_parameter());
            events.push(GateEvent::rbs(angle, qubit_a, qubit_b));
        }
        events.push(GateEvent::Barrier);
        log::trace!("butterfly level {}: {} pairs", depth, num_qubits / 2);
    }

    Ok(Stage::new(events, stream.allocated()))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Split a stage into per-level pair lists at each barrier
    fn split_levels(stage: &Stage) -> Vec<Vec<(usize, usize)>> {
        let mut out = vec![Vec::new()];
        for event in stage.events() {
            match event {
                GateEvent::ReconfigurableBeamSplitter {
                    qubit_a, qubit_b, ..
                } => out.last_mut().unwrap().push((*qubit_a, *qubit_b)),
                GateEvent::Barrier => out.push(Vec::new()),
                other => panic!("unexpected event {other}"),
            }
        }
        out.pop();
        out
    }

    #[test]
    fn test_butterfly_4q() {
        let stage = generate(4, "θ").unwrap();
        assert_eq!(stage.num_parameters(), 4);
        assert_eq!(split_levels(&stage), vec![vec![(0, 2), (1, 3)], vec![(0, 1), (2, 3)]]);

        let text: Vec<String> = stage.events().iter().map(|e| e.to_string()).collect();
        assert_eq!(
            text,
            vec![
                "rbs(θ[0]) q[0],q[2];",
                "rbs(θ[1]) q[1],q[3];",
                "barrier q;",
                "rbs(θ[2]) q[0],q[1];",
                "rbs(θ[3]) q[2],q[3];",
                "barrier q;",
            ]
        );
    }

    #[test]
    fn test_butterfly_levels_are_perfect_matchings() {
        for d in 1..7u32 {
            let n = 1usize << d;
            let stage = generate(n, "θ").unwrap();
            let levels = split_levels(&stage);
            assert_eq!(levels.len(), d as usize);

            for pairs in levels {
                assert_eq!(pairs.len(), n / 2);
                let mut touched: Vec<usize> =
                    pairs.iter().flat_map(|&(a, b)| [a, b]).collect();
                touched.sort_unstable();
                assert_eq!(touched, (0..n).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_butterfly_budget_matches_pairings() {
        for d in 0..9u32 {
            let n = 1usize << d;
            let stage = generate(n, "θ").unwrap();
            let rbs = stage.events().iter().filter(|e| e.is_two_qubit()).count();

            assert_eq!(rbs, d as usize * n / 2);
            assert_eq!(stage.num_parameters(), rbs);
            assert_eq!(num_parameters(n).unwrap(), rbs);
        }
    }

    #[test]
    fn test_butterfly_8q_first_level() {
        assert_eq!(level_pairs(3, 2), vec![(0, 4), (1, 5), (2, 6), (3, 7)]);
        assert_eq!(level_pairs(3, 0), vec![(0, 1), (2, 3), (4, 5), (6, 7)]);
    }

    #[test]
    fn test_butterfly_single_qubit() {
        let stage = generate(1, "θ").unwrap();
        assert!(stage.events().is_empty());
        assert_eq!(stage.num_parameters(), 0);
    }

    #[test]
    fn test_butterfly_not_power_of_two() {
        for n in [3usize, 5, 6, 7, 12, 100] {
            let err = generate(n, "θ").unwrap_err();
            assert_eq!(err, AnsatzError::NotPowerOfTwo(n));
            assert!(err.is_configuration_error());
        }
    }

    #[test]
    fn test_butterfly_large_near_power_of_two() {
        // log2(2^40 + 1) is within 1e-8 of an integer
        let n = (1usize << 40) + 1;
        assert_eq!(levels(n).unwrap_err(), AnsatzError::NotPowerOfTwo(n));
    }

    #[test]
    fn test_butterfly_zero_qubits() {
        assert!(matches!(
            generate(0, "θ").unwrap_err(),
            AnsatzError::InvalidQubitCount { .. }
        ));
    }
}
