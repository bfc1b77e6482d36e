//! Ansatz configuration
//!
//! Gantree: L3_Ansatz → Config
//!
//! Typed, serde-loadable configuration for each topology, the optional
//! encoding layer, and a whole ansatz. Everything is validated before
//! any event is generated.

use crate::ansatz::Stage;
use crate::{brick_sweep, butterfly, ladder};
use qansatz_core::{defaults, names, Angle, AnsatzError, AnsatzResult, Axis};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// TopologyOptions
// ============================================================================

/// Raw, untyped options of the string-keyed `generate` surface
/// Gantree: TopologyOptions // 원시 옵션
///
/// Missing fields fall back to the topology's defaults; unknown fields
/// are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TopologyOptions {
    /// Ladder only: number of strided CNOT layers
    pub entanglement_depth: Option<i64>,

    /// Prefix of the topology's parameter stream
    pub param_prefix: Option<String>,

    /// Prepend an encoding rotation layer about this axis
    pub encoding_axis: Option<Axis>,

    /// Prefix of the encoding layer's parameter stream
    pub encoding_prefix: Option<String>,
}

impl TopologyOptions {
    /// Empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set entanglement depth
    pub fn with_entanglement_depth(mut self, depth: i64) -> Self {
        self.entanglement_depth = Some(depth);
        self
    }

    /// Set parameter prefix
    pub fn with_param_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.param_prefix = Some(prefix.into());
        self
    }

    /// Enable the encoding layer
    pub fn with_encoding(mut self, axis: Axis) -> Self {
        self.encoding_axis = Some(axis);
        self
    }

    /// Set encoding prefix
    pub fn with_encoding_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.encoding_prefix = Some(prefix.into());
        self
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> AnsatzResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encoding layer requested by these options, if any
    pub fn encoding(&self) -> Option<EncodingConfig> {
        self.encoding_axis.map(|axis| {
            let encoding = EncodingConfig::new(axis);
            match &self.encoding_prefix {
                Some(prefix) => encoding.with_param_prefix(prefix.clone()),
                None => encoding,
            }
        })
    }
}

// ============================================================================
// TopologyConfig
// ============================================================================

/// Per-topology configuration
/// Gantree: TopologyConfig // 토폴로지 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TopologyConfig {
    /// Depth-staggered CNOT ladder
    Ladder {
        /// Axis of the rotation layer
        axis: Axis,
        /// Number of strided CNOT layers
        entanglement_depth: usize,
        /// Parameter prefix
        param_prefix: String,
    },

    /// Alternating Ry/Rz brick sweep
    BrickSweep {
        /// Parameter prefix
        param_prefix: String,
    },

    /// Recursive butterfly network
    Butterfly {
        /// Parameter prefix
        param_prefix: String,
    },
}

impl TopologyConfig {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Ladder with default depth and prefix
    pub fn ladder(axis: Axis) -> Self {
        TopologyConfig::Ladder {
            axis,
            entanglement_depth: defaults::ENTANGLEMENT_DEPTH,
            param_prefix: defaults::LADDER_PREFIX.to_string(),
        }
    }

    /// Brick sweep with default prefix
    pub fn brick_sweep() -> Self {
        TopologyConfig::BrickSweep {
            param_prefix: defaults::BRICK_SWEEP_PREFIX.to_string(),
        }
    }

    /// Butterfly with default prefix
    pub fn butterfly() -> Self {
        TopologyConfig::Butterfly {
            param_prefix: defaults::BUTTERFLY_PREFIX.to_string(),
        }
    }

    /// Resolve a topology name plus raw options
    /// Gantree: from_name(name, options) -> Result<Self> // 이름 해석
    ///
    /// `name` must be one of [`names::ALL`] exactly; no case folding or
    /// trimming.
    pub fn from_name(name: &str, options: &TopologyOptions) -> AnsatzResult<Self> {
        let config = match name {
            names::LADDER_X => Self::ladder(Axis::X),
            names::LADDER_Y => Self::ladder(Axis::Y),
            names::LADDER_Z => Self::ladder(Axis::Z),
            names::BRICK_SWEEP => Self::brick_sweep(),
            names::BUTTERFLY => Self::butterfly(),
            _ => return Err(AnsatzError::UnknownTopology(name.to_string())),
        };

        let config = match options.entanglement_depth {
            Some(depth) if depth < 0 => {
                return Err(AnsatzError::NegativeEntanglementDepth(depth));
            }
            Some(depth) if config.is_ladder() => config.with_entanglement_depth(depth as usize),
            Some(_) => {
                log::warn!("entanglement_depth has no effect on {}", config.name());
                config
            }
            None => config,
        };

        Ok(match &options.param_prefix {
            Some(prefix) => config.with_param_prefix(prefix.clone()),
            None => config,
        })
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Set the ladder's entanglement depth (no effect on other topologies)
    pub fn with_entanglement_depth(mut self, depth: usize) -> Self {
        if let TopologyConfig::Ladder {
            entanglement_depth, ..
        } = &mut self
        {
            *entanglement_depth = depth;
        }
        self
    }

    /// Set parameter prefix
    pub fn with_param_prefix(mut self, prefix: impl Into<String>) -> Self {
        match &mut self {
            TopologyConfig::Ladder { param_prefix, .. }
            | TopologyConfig::BrickSweep { param_prefix }
            | TopologyConfig::Butterfly { param_prefix } => *param_prefix = prefix.into(),
        }
        self
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// Topology name as accepted by `generate`
    pub fn name(&self) -> &'static str {
        match self {
            TopologyConfig::Ladder { axis: Axis::X, .. } => names::LADDER_X,
            TopologyConfig::Ladder { axis: Axis::Y, .. } => names::LADDER_Y,
            TopologyConfig::Ladder { axis: Axis::Z, .. } => names::LADDER_Z,
            TopologyConfig::BrickSweep { .. } => names::BRICK_SWEEP,
            TopologyConfig::Butterfly { .. } => names::BUTTERFLY,
        }
    }

    /// Parameter prefix
    pub fn param_prefix(&self) -> &str {
        match self {
            TopologyConfig::Ladder { param_prefix, .. }
            | TopologyConfig::BrickSweep { param_prefix }
            | TopologyConfig::Butterfly { param_prefix } => param_prefix,
        }
    }

    /// Check if ladder
    pub fn is_ladder(&self) -> bool {
        matches!(self, TopologyConfig::Ladder { .. })
    }

    /// Parameters this topology draws for `num_qubits`
    pub fn num_parameters(&self, num_qubits: usize) -> AnsatzResult<usize> {
        self.validate(num_qubits)?;
        Ok(match self {
            TopologyConfig::Ladder { .. } => num_qubits,
            TopologyConfig::BrickSweep { .. } => brick_sweep::num_parameters(num_qubits),
            TopologyConfig::Butterfly { .. } => butterfly::num_parameters(num_qubits)?,
        })
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate against a register width
    /// Gantree: validate(&self, n) -> Result // 검증
    pub fn validate(&self, num_qubits: usize) -> AnsatzResult<()> {
        if num_qubits < 1 {
            return Err(AnsatzError::InvalidQubitCount { num_qubits: 0 });
        }
        if self.param_prefix().is_empty() {
            return Err(AnsatzError::EmptyPrefix);
        }
        if let TopologyConfig::Butterfly { .. } = self {
            butterfly::levels(num_qubits)?;
        }
        Ok(())
    }

    // ========================================================================
    // Generation
    // ========================================================================

    /// Run the matching generator
    /// Gantree: generate(&self, n) -> Stage // 생성
    pub fn generate(&self, num_qubits: usize) -> AnsatzResult<Stage> {
        match self {
            TopologyConfig::Ladder {
                axis,
                entanglement_depth,
                param_prefix,
            } => ladder::generate(num_qubits, *entanglement_depth, *axis, param_prefix),
            TopologyConfig::BrickSweep { param_prefix } => {
                brick_sweep::generate(num_qubits, param_prefix)
            }
            TopologyConfig::Butterfly { param_prefix } => {
                butterfly::generate(num_qubits, param_prefix)
            }
        }
    }
}

impl fmt::Display for TopologyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopologyConfig::Ladder {
                entanglement_depth,
                param_prefix,
                ..
            } => write!(
                f,
                "{}(depth={}, prefix={})",
                self.name(),
                entanglement_depth,
                param_prefix
            ),
            _ => write!(f, "{}(prefix={})", self.name(), self.param_prefix()),
        }
    }
}

// ============================================================================
// EncodingConfig
// ============================================================================

/// Optional rotation layer prepended to the topology events
/// Gantree: EncodingConfig // 인코딩 레이어
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodingConfig {
    /// Rotation axis
    pub axis: Axis,

    /// Prefix of the encoding stream
    #[serde(default = "default_encoding_prefix")]
    pub param_prefix: String,

    /// Coefficient applied to each encoding parameter
    #[serde(default = "default_encoding_scale")]
    pub scale: Angle,
}

fn default_encoding_prefix() -> String {
    defaults::ENCODING_PREFIX.to_string()
}

fn default_encoding_scale() -> Angle {
    defaults::ENCODING_SCALE
}

impl EncodingConfig {
    /// Encoding about `axis` with default prefix and π scale
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            param_prefix: default_encoding_prefix(),
            scale: default_encoding_scale(),
        }
    }

    /// Set prefix
    pub fn with_param_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.param_prefix = prefix.into();
        self
    }

    /// Set scale
    pub fn with_scale(mut self, scale: Angle) -> Self {
        self.scale = scale;
        self
    }

    /// Validate
    pub fn validate(&self) -> AnsatzResult<()> {
        if self.param_prefix.is_empty() {
            return Err(AnsatzError::EmptyPrefix);
        }
        if !self.scale.is_finite() {
            return Err(AnsatzError::InvalidScale(self.scale));
        }
        Ok(())
    }
}

impl fmt::Display for EncodingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "encoding(r{}, prefix={}, scale={:.4})",
            self.axis.to_char().to_ascii_lowercase(),
            self.param_prefix,
            self.scale
        )
    }
}

// ============================================================================
// AnsatzConfig
// ============================================================================

/// Whole-ansatz configuration
/// Gantree: AnsatzConfig // 안사츠 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnsatzConfig {
    /// Register width
    pub num_qubits: usize,

    /// Optional encoding layer
    #[serde(default)]
    pub encoding: Option<EncodingConfig>,

    /// Topology stages in emission order
    pub topologies: Vec<TopologyConfig>,
}

impl AnsatzConfig {
    /// Single-topology configuration
    pub fn new(num_qubits: usize, topology: TopologyConfig) -> Self {
        Self {
            num_qubits,
            encoding: None,
            topologies: vec![topology],
        }
    }

    /// Set encoding layer
    pub fn with_encoding(mut self, encoding: EncodingConfig) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Append a topology stage
    pub fn with_topology(mut self, topology: TopologyConfig) -> Self {
        self.topologies.push(topology);
        self
    }

    /// Validate every stage and prefix uniqueness
    /// Gantree: validate(&self) -> Result // 검증
    pub fn validate(&self) -> AnsatzResult<()> {
        if self.num_qubits < 1 {
            return Err(AnsatzError::InvalidQubitCount { num_qubits: 0 });
        }
        if self.topologies.is_empty() {
            return Err(AnsatzError::NoTopology);
        }

        let mut prefixes: Vec<&str> = Vec::with_capacity(self.topologies.len() + 1);
        if let Some(encoding) = &self.encoding {
            encoding.validate()?;
            prefixes.push(&encoding.param_prefix);
        }
        for topology in &self.topologies {
            topology.validate(self.num_qubits)?;
            let prefix = topology.param_prefix();
            if prefixes.contains(&prefix) {
                return Err(AnsatzError::PrefixCollision(prefix.to_string()));
            }
            prefixes.push(prefix);
        }
        Ok(())
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> AnsatzResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> AnsatzResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for AnsatzConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnsatzConfig({}Q", self.num_qubits)?;
        if let Some(encoding) = &self.encoding {
            write!(f, ", {}", encoding)?;
        }
        for topology in &self.topologies {
            write!(f, ", {}", topology)?;
        }
        write!(f, ")")
    }
}

// ============================================================================
// Tests
// ============================================================================
