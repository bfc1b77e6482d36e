//! # qansatz Core
//!
//! Parameters, gate events, and the circuit collaborator shared by the
//! ansatz generators.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qansatz_core // L0+L1: Foundation + Events (완료)
//!     L0_Foundation // 기반 타입/상수/에러 (완료)
//!         CoreTypes // QubitId, Angle, Axis (완료)
//!         Constants // 토폴로지 이름/기본값 (완료)
//!         Errors // 에러 타입 (완료)
//!         ParameterStream // 심볼 파라미터 할당 (완료)
//!     L1_Events // 게이트 이벤트 (완료)
//!         GateEvent // 이벤트 enum (완료)
//!         CircuitSink // 외부 회로 협력자 trait (완료)
//!         Circuit // 기록용 회로 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qansatz_core::prelude::*;
//!
//! let mut theta = ParameterStream::new("θ").unwrap();
//! let events = vec![
//!     GateEvent::rotation(Axis::Y, 0, theta.next_parameter()),
//!     GateEvent::cnot(0, 1),
//!     GateEvent::Barrier,
//! ];
//!
//! let mut circuit = Circuit::new(2);
//! for event in &events {
//!     event.apply_to(&mut circuit).unwrap();
//! }
//!
//! assert_eq!(circuit.count_2q(), 1);
//! assert_eq!(theta.allocated(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core types (Gantree: L0_Foundation → CoreTypes)
pub mod types;

/// Constants (Gantree: L0_Foundation → Constants)
pub mod constants;

/// Error types (Gantree: L0_Foundation → Errors)
pub mod error;

/// Symbolic parameters (Gantree: L0_Foundation → ParameterStream)
pub mod parameter;

/// Gate events (Gantree: L1_Events → GateEvent)
pub mod event;

/// Circuit collaborator (Gantree: L1_Events → CircuitSink, Circuit)
pub mod circuit;

// ============================================================================
// Re-exports
// ============================================================================

pub use circuit::{layered_depth, Circuit, CircuitSink};
pub use constants::{defaults, names};
pub use error::{AnsatzError, AnsatzResult};
pub use event::GateEvent;
pub use parameter::{ParamExpr, Parameter, ParameterStream};
pub use types::{Angle, Axis, QubitId};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use qansatz_core::prelude::*;
    //! ```

    pub use crate::circuit::{Circuit, CircuitSink};
    pub use crate::constants::{defaults, names};
    pub use crate::error::{AnsatzError, AnsatzResult};
    pub use crate::event::GateEvent;
    pub use crate::parameter::{ParamExpr, Parameter, ParameterStream};
    pub use crate::types::{Angle, Axis, QubitId};
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================
