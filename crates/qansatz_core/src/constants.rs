//! Constants for qansatz
//!
//! Gantree: L0_Foundation → Constants
//!
//! Topology names and the default construction of each ansatz.

// ============================================================================
// Topology Names
// ============================================================================

/// Names accepted by the string-keyed `generate` surface
/// Gantree: names // 토폴로지 이름
pub mod names {
    /// Ladder with an X rotation layer
    pub const LADDER_X: &str = "ladder-x";

    /// Ladder with a Y rotation layer
    pub const LADDER_Y: &str = "ladder-y";

    /// Ladder with a Z rotation layer
    pub const LADDER_Z: &str = "ladder-z";

    /// Alternating Ry/Rz brick sweep
    pub const BRICK_SWEEP: &str = "brick-sweep";

    /// Recursive pairwise beam-splitter network
    pub const BUTTERFLY: &str = "butterfly";

    /// All topology names in documentation order
    pub const ALL: [&str; 5] = [LADDER_X, LADDER_Y, LADDER_Z, BRICK_SWEEP, BUTTERFLY];
}

// ============================================================================
// Defaults
// ============================================================================

/// Default construction parameters
/// Gantree: defaults // 기본값
pub mod defaults {
    use std::f64::consts::PI;

    /// Parameter prefix of the ladder rotation layer
    pub const LADDER_PREFIX: &str = "x";

    /// Parameter prefix of the brick sweep
    pub const BRICK_SWEEP_PREFIX: &str = "θ";

    /// Parameter prefix of the butterfly network
    pub const BUTTERFLY_PREFIX: &str = "θ";

    /// Parameter prefix of the optional encoding layer
    pub const ENCODING_PREFIX: &str = "φ";

    /// Number of strided CNOT layers in the ladder
    pub const ENTANGLEMENT_DEPTH: usize = 1;

    /// Angle-encoding rotations apply π·x
    pub const ENCODING_SCALE: f64 = PI;

    /// Variational rotations apply the bare parameter
    pub const UNIT_SCALE: f64 = 1.0;
}

// ============================================================================
// Tests
// ============================================================================
