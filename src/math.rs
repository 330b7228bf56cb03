//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::Component;

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Tolerance used by the loose comparisons.
pub const EPSILON: Component = 1.0e-6;

/// Build a transform from a 3x3 matrix laid out for row vectors, i.e. each
/// row holds the contribution of one input component to the outputs.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, [x, y, z]: [Component; 3]) -> [Component; 3] {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    [x, y, z]
}

/// Linear interpolation between `a` and `b`. `t == 0` yields exactly `a` and
/// `t == 1` yields exactly `b`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a * (T::one() - t) + b * t
}

/// Returns true if `a` and `b` differ by less than [`EPSILON`].
pub fn loose_equals(a: Component, b: Component) -> bool {
    (a - b).abs() < EPSILON
}

pub fn almost_zero(value: Component) -> bool {
    loose_equals(value, 0.0)
}

/// Wrap a hue into `[0, 360)`.
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid rounds tiny negative values up to the modulus itself.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_both_ends_exactly() {
        assert_eq!(lerp(0.3, 0.7, 0.0), 0.3);
        assert_eq!(lerp(0.3, 0.7, 1.0), 0.7);
        assert_eq!(lerp(1.0, 0.0, 0.5), 0.5);
        assert_eq!(lerp(0.1_f32, 0.9_f32, 1.0), 0.9);
    }

    #[test]
    fn loose_comparisons() {
        assert!(loose_equals(0.1 + 0.2, 0.3));
        assert!(!loose_equals(0.1, 0.2));
        assert!(almost_zero(1.0e-9));
    }

    #[test]
    fn hue_wraps_into_range() {
        assert_eq!(normalize_hue(370.0), 10.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-1.0e-17), 0.0);
    }

    #[test]
    fn identity_transform() {
        const IDENTITY: Transform = transform_3x3(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
        assert_eq!(transform(&IDENTITY, [0.1, 0.2, 0.3]), [0.1, 0.2, 0.3]);
    }
}
