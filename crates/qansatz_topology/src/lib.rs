//! # qansatz Topology
//!
//! Entanglement topologies and parameter allocation for variational
//! ansätze.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qansatz_topology // L2+L3: Topology + Ansatz (완료)
//!     L2_Topology // 토폴로지 생성기 (완료)
//!         Layers // 회전 레이어 (완료)
//!         Ladder // 깊이별 CNOT 래더 (완료)
//!         BrickSweep // Ry/Rz 교대 스윕 (완료)
//!         Butterfly // 재귀 페어 네트워크 (완료)
//!     L3_Ansatz // 안사츠 조립 (완료)
//!         Config // 설정 (완료)
//!         Ansatz // 결과 값 (완료)
//!         AnsatzBuilder // 빌더 패턴 (완료)
//!         Library // 이름 기반 생성 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qansatz_topology::prelude::*;
//!
//! let ansatz = generate("brick-sweep", 3, &TopologyOptions::new()).unwrap();
//!
//! assert_eq!(ansatz.num_parameters(), 18);
//! assert_eq!(ansatz.count_two_qubit(), 4);
//! println!("{}", ansatz);
//! ```
//!
//! ## Composing Stages
//!
//! ```rust
//! use qansatz_topology::prelude::*;
//!
//! let mut circuit = Circuit::new(8);
//! let ansatz = AnsatzBuilder::new(8)
//!     .encoding(Axis::Y)
//!     .butterfly()
//!     .build_into(&mut circuit)
//!     .unwrap();
//!
//! // 8 encoding rotations + 3 levels of 4 beam splitters
//! assert_eq!(ansatz.num_parameters(), 8 + 12);
//! assert_eq!(circuit.gate_count(), ansatz.events().len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Shared rotation layers (Gantree: L2_Topology → Layers)
pub mod layers;

/// CNOT ladder (Gantree: L2_Topology → Ladder)
pub mod ladder;

/// Brick sweep (Gantree: L2_Topology → BrickSweep)
pub mod brick_sweep;

/// Butterfly network (Gantree: L2_Topology → Butterfly)
pub mod butterfly;

/// Configuration (Gantree: L3_Ansatz → Config)
pub mod config;

/// Ansatz value (Gantree: L3_Ansatz → Ansatz)
pub mod ansatz;

/// Builder (Gantree: L3_Ansatz → AnsatzBuilder)
pub mod builder;

/// Name-keyed generation (Gantree: L3_Ansatz → Library)
pub mod library;

// ============================================================================
// Re-exports
// ============================================================================

pub use ansatz::{Ansatz, Stage};
pub use builder::AnsatzBuilder;
pub use config::{AnsatzConfig, EncodingConfig, TopologyConfig, TopologyOptions};
pub use library::{generate, generate_into};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use qansatz_topology::prelude::*;
    //! ```

    pub use crate::ansatz::{Ansatz, Stage};
    pub use crate::builder::AnsatzBuilder;
    pub use crate::config::{AnsatzConfig, EncodingConfig, TopologyConfig, TopologyOptions};
    pub use crate::library::{generate, generate_into};
    pub use qansatz_core::prelude::*;
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Integration Tests
// ============================================================================
