//! Socket value types exchanged with the host
//!
//! Every value crossing a socket boundary is one `NodeData` variant, matching
//! the host's plugin data model. Matrices cross the boundary in row-major
//! `[[f32; 4]; 4]` form; batch outputs are wrapped one level deep (one batch
//! per invocation).

use serde::{Deserialize, Serialize};

/// Node data types used by both the host and this plugin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeData {
    // Basic types
    Float(f32),
    Vec3([f32; 3]),
    Int(i32),
    Boolean(bool),
    String(String),

    // Complex types
    Matrix4([[f32; 4]; 4]),

    // Collections
    FloatArray(Vec<f32>),
    Vec3Array(Vec<[f32; 3]>),
    Matrix4Array(Vec<[[f32; 4]; 4]>),

    // Special
    None,
}

impl NodeData {
    /// Human-readable name of the variant, used in host-side diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeData::Float(_) => "Float",
            NodeData::Vec3(_) => "Vec3",
            NodeData::Int(_) => "Int",
            NodeData::Boolean(_) => "Boolean",
            NodeData::String(_) => "String",
            NodeData::Matrix4(_) => "Matrix4",
            NodeData::FloatArray(_) => "FloatArray",
            NodeData::Vec3Array(_) => "Vec3Array",
            NodeData::Matrix4Array(_) => "Matrix4Array",
            NodeData::None => "None",
        }
    }
}
