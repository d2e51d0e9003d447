//! Node system - metadata types and the node implementations this plugin
//! registers with the host

// Plugin-side node system modules
pub mod factory;
pub mod interface;

// Node implementations
pub mod matrix;

// Re-export factory types
pub use factory::{
    NodeFactory, NodeMetadata, NodeCategory,
    DataType, PortDefinition,
};

// Re-export interface types
pub use interface::NodeData;
