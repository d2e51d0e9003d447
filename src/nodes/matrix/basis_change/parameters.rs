//! Configuration model for the Matrix Basis Change node
//!
//! The host persists node parameters as loose string/bool values. This module
//! decodes them into typed configuration and fails fast on unknown tokens;
//! there is no silent fallback to a default order.

use serde::{Deserialize, Serialize};

use crate::error::{BasisError, BasisResult};

/// Socket-default parameter values, matching the node's stored properties
pub const DEFAULT_LOCATION: [f32; 3] = [0.0, 0.0, 0.0];
pub const DEFAULT_SCALE: [f32; 3] = [1.0, 1.0, 1.0];
pub const DEFAULT_DIRECTION_A: [f32; 3] = [1.0, 0.0, 0.0];
pub const DEFAULT_DIRECTION_B: [f32; 3] = [0.0, 1.0, 0.0];

/// Priority order in which the X, Y, Z axes are orthogonalized
///
/// The first letter names the axis that keeps the raw T vector; the second
/// letter names the slot the U vector starts in before recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrthogonalizingOrder {
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    Zxy,
    Zyx,
}

impl OrthogonalizingOrder {
    /// All six orders, in the order the host UI lists them
    pub const ALL: [OrthogonalizingOrder; 6] = [
        OrthogonalizingOrder::Xyz,
        OrthogonalizingOrder::Xzy,
        OrthogonalizingOrder::Yxz,
        OrthogonalizingOrder::Yzx,
        OrthogonalizingOrder::Zxy,
        OrthogonalizingOrder::Zyx,
    ];

    /// Parse a stored order token
    ///
    /// Whitespace inside the token is ignored, so both "XYZ" and the display
    /// form "X Y  Z" are accepted.
    pub fn parse(token: &str) -> BasisResult<Self> {
        let compact: String = token.chars().filter(|c| !c.is_whitespace()).collect();
        match compact.as_str() {
            "XYZ" => Ok(OrthogonalizingOrder::Xyz),
            "XZY" => Ok(OrthogonalizingOrder::Xzy),
            "YXZ" => Ok(OrthogonalizingOrder::Yxz),
            "YZX" => Ok(OrthogonalizingOrder::Yzx),
            "ZXY" => Ok(OrthogonalizingOrder::Zxy),
            "ZYX" => Ok(OrthogonalizingOrder::Zyx),
            _ => Err(BasisError::InvalidConfiguration {
                parameter: "orthogonalizing_order",
                value: token.to_string(),
            }),
        }
    }

    /// Canonical token for this order
    pub fn token(&self) -> &'static str {
        match self {
            OrthogonalizingOrder::Xyz => "XYZ",
            OrthogonalizingOrder::Xzy => "XZY",
            OrthogonalizingOrder::Yxz => "YXZ",
            OrthogonalizingOrder::Yzx => "YZX",
            OrthogonalizingOrder::Zxy => "ZXY",
            OrthogonalizingOrder::Zyx => "ZYX",
        }
    }
}

/// Selects which input direction feeds a working vector, optionally negated
///
/// The T and U working vectors each map to one of these four choices; the
/// token is data resolved once per invocation, never an interpreted
/// expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisSelect {
    A,
    B,
    NegA,
    NegB,
}

impl AxisSelect {
    /// Parse a stored axis-select token ("A", "B", "-A" or "-B")
    pub fn parse(parameter: &'static str, token: &str) -> BasisResult<Self> {
        match token.trim() {
            "A" => Ok(AxisSelect::A),
            "B" => Ok(AxisSelect::B),
            "-A" => Ok(AxisSelect::NegA),
            "-B" => Ok(AxisSelect::NegB),
            _ => Err(BasisError::InvalidConfiguration {
                parameter,
                value: token.to_string(),
            }),
        }
    }

    /// Canonical token for this selector
    pub fn token(&self) -> &'static str {
        match self {
            AxisSelect::A => "A",
            AxisSelect::B => "B",
            AxisSelect::NegA => "-A",
            AxisSelect::NegB => "-B",
        }
    }
}

/// Complete configuration snapshot for one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasisChangeConfig {
    /// Priority order for orthogonalization
    pub order: OrthogonalizingOrder,
    /// Source of the T working vector
    pub track: AxisSelect,
    /// Source of the U working vector
    pub up: AxisSelect,
    /// Unit-scale each output axis independently after orthogonalization
    pub normalize: bool,
}

impl Default for BasisChangeConfig {
    fn default() -> Self {
        Self {
            order: OrthogonalizingOrder::Xyz,
            track: AxisSelect::A,
            up: AxisSelect::B,
            normalize: true,
        }
    }
}
