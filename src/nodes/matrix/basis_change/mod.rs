//! Matrix Basis Change node implementation
//!
//! Constructs a transform matrix from two arbitrary track and up vectors:
//! - mod.rs: node metadata and factory implementation
//! - parameters.rs: configuration model and token parsing
//! - functions.rs: orthogonalization and matrix assembly math
//! - logic.rs: batched evaluation entry point

pub mod functions;
pub mod logic;
pub mod parameters;

pub use functions::*;
pub use logic::*;
pub use parameters::*;

use crate::nodes::{DataType, NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::nodes::factory::ProcessingCost;

/// Node that builds a location/rotation/scale matrix from two direction vectors
#[derive(Default)]
pub struct BasisChangeNodeFactory;

impl NodeFactory for BasisChangeNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Matrix_BasisChange",
            "Matrix Basis Change",
            NodeCategory::matrix(),
            "Constructs a matrix from arbitrary track and up vectors",
        )
        .with_inputs(vec![
            PortDefinition::optional("Location", DataType::Vector3)
                .with_description("The location component of the output matrix"),
            PortDefinition::optional("Scale", DataType::Vector3)
                .with_description("The scale component of the output matrix"),
            PortDefinition::optional("A", DataType::Vector3)
                .with_description("A direction"),
            PortDefinition::optional("B", DataType::Vector3)
                .with_description("B direction"),
        ])
        .with_outputs(vec![
            PortDefinition::required("Matrix", DataType::Matrix4)
                .with_description("Composed location/rotation/scale matrices"),
            PortDefinition::required("X", DataType::Vector3)
                .with_description("Orthogonalized X axis per input tuple"),
            PortDefinition::required("Y", DataType::Vector3)
                .with_description("Orthogonalized Y axis per input tuple"),
            PortDefinition::required("Z", DataType::Vector3)
                .with_description("Orthogonalized Z axis per input tuple"),
        ])
        .with_tags(vec!["matrix", "basis", "orthogonalize", "transform"])
        .with_processing_cost(ProcessingCost::Minimal)
    }
}
