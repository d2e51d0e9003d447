//! Core math for the Matrix Basis Change node

use glam::{Mat4, Vec3};

use super::parameters::{AxisSelect, OrthogonalizingOrder};

/// Map a working vector onto one of the input directions or its negation
pub fn resolve_axis(select: AxisSelect, a: Vec3, b: Vec3) -> Vec3 {
    match select {
        AxisSelect::A => a,
        AxisSelect::B => b,
        AxisSelect::NegA => -a,
        AxisSelect::NegB => -b,
    }
}

/// Orthogonalize the working vectors T and U into a right-handed frame
///
/// The axis named by the order's first letter keeps the raw T vector exactly.
/// U starts in the slot named by the second letter; the remaining axis is the
/// cross product of the two, and the U slot is then recomputed so all three
/// axes end up mutually orthogonal. Parallel or zero inputs collapse the
/// cross products and produce zero axes.
pub fn orthogonalize(order: OrthogonalizingOrder, t: Vec3, u: Vec3) -> (Vec3, Vec3, Vec3) {
    match order {
        // keep X, derive Z from X and Y, then rebuild Y
        OrthogonalizingOrder::Xyz => {
            let (x, y) = (t, u);
            let z = x.cross(y);
            let y = z.cross(x);
            (x, y, z)
        }
        // keep X, derive Y from Z and X, then rebuild Z
        OrthogonalizingOrder::Xzy => {
            let (x, z) = (t, u);
            let y = z.cross(x);
            let z = x.cross(y);
            (x, y, z)
        }
        // keep Y, derive Z from X and Y, then rebuild X
        OrthogonalizingOrder::Yxz => {
            let (y, x) = (t, u);
            let z = x.cross(y);
            let x = y.cross(z);
            (x, y, z)
        }
        // keep Y, derive X from Y and Z, then rebuild Z
        OrthogonalizingOrder::Yzx => {
            let (y, z) = (t, u);
            let x = y.cross(z);
            let z = x.cross(y);
            (x, y, z)
        }
        // keep Z, derive Y from Z and X, then rebuild X
        OrthogonalizingOrder::Zxy => {
            let (z, x) = (t, u);
            let y = z.cross(x);
            let x = y.cross(z);
            (x, y, z)
        }
        // keep Z, derive X from Y and Z, then rebuild Y
        OrthogonalizingOrder::Zyx => {
            let (z, y) = (t, u);
            let x = y.cross(z);
            let y = z.cross(x);
            (x, y, z)
        }
    }
}

/// Compose the output matrix: M = T * R * S
///
/// The rotation/scale block has the axes as columns, each scaled by the
/// matching component of `scale`; `location` fills the translation column.
pub fn compose_matrix(x: Vec3, y: Vec3, z: Vec3, scale: Vec3, location: Vec3) -> Mat4 {
    Mat4::from_cols(
        (x * scale.x).extend(0.0),
        (y * scale.y).extend(0.0),
        (z * scale.z).extend(0.0),
        location.extend(1.0),
    )
}

/// Row-major form of a matrix for the socket boundary
pub fn matrix_rows(matrix: Mat4) -> [[f32; 4]; 4] {
    [
        matrix.row(0).to_array(),
        matrix.row(1).to_array(),
        matrix.row(2).to_array(),
        matrix.row(3).to_array(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn raw_slot(order: OrthogonalizingOrder, frame: (Vec3, Vec3, Vec3)) -> Vec3 {
        match order {
            OrthogonalizingOrder::Xyz | OrthogonalizingOrder::Xzy => frame.0,
            OrthogonalizingOrder::Yxz | OrthogonalizingOrder::Yzx => frame.1,
            OrthogonalizingOrder::Zxy | OrthogonalizingOrder::Zyx => frame.2,
        }
    }

    #[test]
    fn test_resolve_axis_mapping() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 5.0, 0.5);
        assert_eq!(resolve_axis(AxisSelect::A, a, b), a);
        assert_eq!(resolve_axis(AxisSelect::B, a, b), b);
        assert_eq!(resolve_axis(AxisSelect::NegA, a, b), -a);
        assert_eq!(resolve_axis(AxisSelect::NegB, a, b), -b);
    }

    #[test]
    fn test_all_orders_produce_orthogonal_frames() {
        // deliberately non-orthogonal, non-unit inputs
        let t = Vec3::new(1.0, 0.2, -0.3);
        let u = Vec3::new(0.4, 1.0, 0.8);
        for order in OrthogonalizingOrder::ALL {
            let (x, y, z) = orthogonalize(order, t, u);
            assert!(x.dot(y).abs() < EPS, "{order:?}: X not orthogonal to Y");
            assert!(y.dot(z).abs() < EPS, "{order:?}: Y not orthogonal to Z");
            assert!(z.dot(x).abs() < EPS, "{order:?}: Z not orthogonal to X");
        }
    }

    #[test]
    fn test_all_orders_keep_raw_axis_exactly() {
        let t = Vec3::new(0.7, -1.3, 2.1);
        let u = Vec3::new(-0.2, 0.9, 0.4);
        for order in OrthogonalizingOrder::ALL {
            let frame = orthogonalize(order, t, u);
            // bitwise equality: the kept axis is passed through untouched
            assert_eq!(raw_slot(order, frame), t, "{order:?} mangled the raw axis");
        }
    }

    #[test]
    fn test_all_orders_are_right_handed() {
        let t = Vec3::new(1.0, 0.1, 0.0);
        let u = Vec3::new(0.0, 1.0, 0.2);
        for order in OrthogonalizingOrder::ALL {
            let (x, y, z) = orthogonalize(order, t, u);
            assert!(
                x.dot(y.cross(z)) > 0.0,
                "{order:?} produced a left-handed frame"
            );
        }
    }

    #[test]
    fn test_parallel_inputs_collapse_to_zero_axis() {
        let (_, y, z) = orthogonalize(
            OrthogonalizingOrder::Xyz,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        );
        assert_eq!(z, Vec3::ZERO);
        assert_eq!(y, Vec3::ZERO);
    }

    #[test]
    fn test_compose_matrix_identity_frame() {
        let matrix = compose_matrix(
            Vec3::X,
            Vec3::Y,
            Vec3::Z,
            Vec3::splat(2.0),
            Vec3::new(1.0, 2.0, 3.0),
        );
        assert_eq!(
            matrix_rows(matrix),
            [
                [2.0, 0.0, 0.0, 1.0],
                [0.0, 2.0, 0.0, 2.0],
                [0.0, 0.0, 2.0, 3.0],
                [0.0, 0.0, 0.0, 1.0],
            ]
        );
    }

    #[test]
    fn test_compose_matrix_columns_are_scaled_axes() {
        let x = Vec3::new(0.0, 1.0, 0.0);
        let y = Vec3::new(-1.0, 0.0, 0.0);
        let z = Vec3::Z;
        let matrix = compose_matrix(x, y, z, Vec3::new(2.0, 3.0, 4.0), Vec3::ZERO);
        assert_eq!(matrix.x_axis.truncate(), x * 2.0);
        assert_eq!(matrix.y_axis.truncate(), y * 3.0);
        assert_eq!(matrix.z_axis.truncate(), z * 4.0);
        assert_eq!(matrix.w_axis.to_array(), [0.0, 0.0, 0.0, 1.0]);
    }
}
