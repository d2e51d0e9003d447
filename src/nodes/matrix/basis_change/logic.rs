//! Batched evaluation for the Matrix Basis Change node
//!
//! The host's execution engine hands over the current socket data and a
//! snapshot of which outputs are connected; evaluation is a pure function of
//! those arguments. Nothing is cached across invocations and there is no
//! shared state, so independent batches may run concurrently.

use std::collections::HashMap;

use glam::{Mat4, Vec3};
use log::debug;

use crate::error::{BasisError, BasisResult};
use crate::nodes::interface::NodeData;

use super::functions::{compose_matrix, matrix_rows, orthogonalize, resolve_axis};
use super::parameters::{
    AxisSelect, BasisChangeConfig, OrthogonalizingOrder, DEFAULT_DIRECTION_A,
    DEFAULT_DIRECTION_B, DEFAULT_LOCATION, DEFAULT_SCALE,
};

/// One batch of socket inputs, in socket order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchInput {
    /// Translation component per output matrix
    pub locations: Vec<Vec3>,
    /// Per-axis scale component per output matrix
    pub scales: Vec<Vec3>,
    /// First direction input
    pub direction_a: Vec<Vec3>,
    /// Second direction input
    pub direction_b: Vec<Vec3>,
}

impl BatchInput {
    fn validate(&self) -> BasisResult<()> {
        let sockets: [(&'static str, &Vec<Vec3>); 4] = [
            ("Location", &self.locations),
            ("Scale", &self.scales),
            ("A", &self.direction_a),
            ("B", &self.direction_b),
        ];
        for (socket, list) in sockets {
            if list.is_empty() {
                return Err(BasisError::EmptyInput { socket });
            }
        }
        Ok(())
    }
}

/// Which outputs downstream consumers are connected to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputRequest {
    pub matrices: bool,
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl OutputRequest {
    /// Every output connected
    pub const ALL: OutputRequest = OutputRequest {
        matrices: true,
        x: true,
        y: true,
        z: true,
    };

    /// True if any downstream consumer exists
    pub fn any(&self) -> bool {
        self.matrices || self.x || self.y || self.z
    }
}

/// One evaluated batch; unrequested outputs stay empty
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasisBatch {
    pub matrices: Vec<Mat4>,
    pub x: Vec<Vec3>,
    pub y: Vec<Vec3>,
    pub z: Vec<Vec3>,
}

/// Repeat the last element of each list until all share the longest length
fn broadcast_longest<T: Clone>(lists: &mut [&mut Vec<T>]) {
    let longest = lists.iter().map(|list| list.len()).max().unwrap_or(0);
    for list in lists.iter_mut() {
        if let Some(last) = list.last().cloned() {
            while list.len() < longest {
                list.push(last.clone());
            }
        }
    }
}

/// Unit-scale one axis; a zero-length axis is a domain error, not NaN
fn normalize_axis(axis: Vec3, index: usize) -> BasisResult<Vec3> {
    let length = axis.length();
    if length == 0.0 {
        return Err(BasisError::DegenerateBasis { index });
    }
    Ok(axis / length)
}

/// Core basis change data and functionality
#[derive(Debug, Clone, Default)]
pub struct BasisChangeLogic {
    /// Configuration snapshot for this invocation
    pub config: BasisChangeConfig,
}

impl BasisChangeLogic {
    /// Decode the host's stored parameter map into a typed configuration
    ///
    /// Unknown tokens fail fast; missing entries keep the stored defaults.
    pub fn from_parameters(parameters: &HashMap<String, NodeData>) -> BasisResult<Self> {
        let mut config = BasisChangeConfig::default();
        if let Some(NodeData::String(token)) = parameters.get("orthogonalizing_order") {
            config.order = OrthogonalizingOrder::parse(token)?;
        }
        if let Some(NodeData::String(token)) = parameters.get("T") {
            config.track = AxisSelect::parse("T", token)?;
        }
        if let Some(NodeData::String(token)) = parameters.get("U") {
            config.up = AxisSelect::parse("U", token)?;
        }
        if let Some(NodeData::Boolean(flag)) = parameters.get("normalize") {
            config.normalize = *flag;
        }
        Ok(Self { config })
    }

    /// Evaluate one batch of inputs
    ///
    /// Shorter input lists are broadcast by repeating their last element
    /// until all four match the longest. Each output is only computed when
    /// requested; with nothing requested this returns an empty batch before
    /// touching the inputs at all.
    pub fn evaluate(&self, input: &BatchInput, request: OutputRequest) -> BasisResult<BasisBatch> {
        if !request.any() {
            return Ok(BasisBatch::default());
        }

        input.validate()?;

        let mut locations = input.locations.clone();
        let mut scales = input.scales.clone();
        let mut directions_a = input.direction_a.clone();
        let mut directions_b = input.direction_b.clone();
        broadcast_longest(&mut [
            &mut locations,
            &mut scales,
            &mut directions_a,
            &mut directions_b,
        ]);

        let count = locations.len();
        let mut batch = BasisBatch::default();
        if request.matrices {
            batch.matrices.reserve(count);
        }

        for index in 0..count {
            let a = directions_a[index];
            let b = directions_b[index];
            let t = resolve_axis(self.config.track, a, b);
            let u = resolve_axis(self.config.up, a, b);

            let (mut x, mut y, mut z) = orthogonalize(self.config.order, t, u);
            if self.config.normalize {
                x = normalize_axis(x, index)?;
                y = normalize_axis(y, index)?;
                z = normalize_axis(z, index)?;
            }

            if request.x {
                batch.x.push(x);
            }
            if request.y {
                batch.y.push(y);
            }
            if request.z {
                batch.z.push(z);
            }
            if request.matrices {
                batch
                    .matrices
                    .push(compose_matrix(x, y, z, scales[index], locations[index]));
            }
        }

        debug!(
            "basis change: evaluated {} tuples, order {}",
            count,
            self.config.order.token()
        );
        Ok(batch)
    }

    /// NodeData-level entry point used by the host's execution engine
    ///
    /// Inputs arrive in socket order (Location, Scale, A, B); missing or
    /// unconnected sockets fall back to a one-element batch holding the
    /// stored parameter default, exactly like the node's socket defaults.
    /// Outputs are emitted in socket order (Matrix, X, Y, Z) with
    /// `NodeData::None` in unrequested slots; a connected socket that
    /// delivers an empty list is a precondition violation.
    pub fn process(
        &self,
        inputs: &[NodeData],
        request: OutputRequest,
    ) -> BasisResult<Vec<NodeData>> {
        if !request.any() {
            return Ok(Vec::new());
        }

        let input = BatchInput {
            locations: extract_vec3_batch(inputs.get(0), DEFAULT_LOCATION),
            scales: extract_vec3_batch(inputs.get(1), DEFAULT_SCALE),
            direction_a: extract_vec3_batch(inputs.get(2), DEFAULT_DIRECTION_A),
            direction_b: extract_vec3_batch(inputs.get(3), DEFAULT_DIRECTION_B),
        };
        let batch = self.evaluate(&input, request)?;

        let mut outputs = vec![NodeData::None; 4];
        if request.matrices {
            outputs[0] =
                NodeData::Matrix4Array(batch.matrices.iter().map(|m| matrix_rows(*m)).collect());
        }
        if request.x {
            outputs[1] = NodeData::Vec3Array(batch.x.iter().map(|v| v.to_array()).collect());
        }
        if request.y {
            outputs[2] = NodeData::Vec3Array(batch.y.iter().map(|v| v.to_array()).collect());
        }
        if request.z {
            outputs[3] = NodeData::Vec3Array(batch.z.iter().map(|v| v.to_array()).collect());
        }
        Ok(outputs)
    }
}

/// Extract a vector batch from socket data
///
/// Unconnected sockets (`None` slots) fall back to a one-element batch of the
/// stored default. An explicitly delivered empty array is kept empty so that
/// validation can report it.
fn extract_vec3_batch(data: Option<&NodeData>, default: [f32; 3]) -> Vec<Vec3> {
    match data {
        Some(NodeData::Vec3Array(values)) => {
            values.iter().map(|v| Vec3::from_array(*v)).collect()
        }
        Some(NodeData::Vec3(value)) => vec![Vec3::from_array(*value)],
        _ => vec![Vec3::from_array(default)],
    }
}
