//! Matrix construction nodes for the Nodle node editor
//!
//! This plugin crate supplies node metadata and computation callbacks.
//! The host editor owns graph execution, socket wiring, parameter
//! persistence, and UI panels; nothing in here touches any of that.

pub mod error;
pub mod nodes;

// Re-export commonly used types
pub use error::{BasisError, BasisResult};
pub use nodes::matrix::basis_change::{
    BasisBatch, BasisChangeConfig, BasisChangeLogic, BasisChangeNodeFactory, BatchInput,
    OutputRequest,
};
