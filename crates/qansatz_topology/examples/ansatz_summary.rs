//! qansatz Topology Summary
//!
//! Generates every named topology over a range of register widths and
//! prints gate counts, parameter budgets, and depth.

use qansatz_core::{names, Axis, Circuit};
use qansatz_topology::{generate, AnsatzBuilder, TopologyOptions};
use std::time::Instant;

fn main() {
    println!("╔══════════════════════════════════════════════════════════════════════╗");
    println!("║                   qansatz Topology Summary Report                    ║");
    println!("╚══════════════════════════════════════════════════════════════════════╝\n");

    let qubit_configs = vec![2i64, 4, 6, 8];
    let options = TopologyOptions::new().with_entanglement_depth(2);

    println!("Configuration:");
    println!("  • Qubits: {:?}", qubit_configs);
    println!("  • Ladder entanglement depth: 2");
    println!();

    // =========================================================================
    // Section 1: Named topologies
    // =========================================================================
    println!("┌──────────────┬────────┬──────────┬──────────┬──────────┬──────────┐");
    println!("│ Topology     │ Qubits │ Params   │ 2Q Gates │ Depth    │ Time(µs) │");
    println!("├──────────────┼────────┼──────────┼──────────┼──────────┼──────────┤");

    for name in names::ALL {
        for &n in &qubit_configs {
            let start = Instant::now();
            let result = generate(name, n, &options);
            let elapsed = start.elapsed().as_micros();

            match result {
                Ok(ansatz) => println!(
                    "│ {:<12} │ {:6} │ {:8} │ {:8} │ {:8} │ {:8} │",
                    name,
                    n,
                    ansatz.num_parameters(),
                    ansatz.count_two_qubit(),
                    ansatz.depth(),
                    elapsed
                ),
                Err(err) => println!("│ {:<12} │ {:6} │ rejected: {:<35} │", name, n, err),
            }
        }
    }
    println!("└──────────────┴────────┴──────────┴──────────┴──────────┴──────────┘\n");

    // =========================================================================
    // Section 2: Encoding + butterfly into a recording circuit
    // =========================================================================
    let mut circuit = Circuit::with_name(8, "encoded_butterfly");
    match AnsatzBuilder::new(8)
        .encoding(Axis::Y)
        .butterfly()
        .build_into(&mut circuit)
    {
        Ok(ansatz) => {
            println!("{}", ansatz);
            println!("{}", circuit);
        }
        Err(err) => println!("build failed: {}", err),
    }
}
