//! Angle utilities used by the curvature estimator.

use nalgebra::Vector2;
use std::f32::consts::PI;

/// Wraps an angle into the range [-π, π].
#[inline]
pub fn wrap_to_pi(angle: f32) -> f32 {
    let mut a = (angle + PI).rem_euclid(2.0 * PI) - PI;
    if a < -PI {
        a = -PI;
    }
    a
}

/// Signed angle of a unit direction: `acos(x)`, negated when `y < 0`.
///
/// The input need not be normalized; a zero vector maps to 0.
#[inline]
pub fn signed_angle(dir: &Vector2<f32>) -> f32 {
    let n = dir.norm();
    if n <= f32::EPSILON {
        return 0.0;
    }
    let angle = (dir.x / n).clamp(-1.0, 1.0).acos();
    if dir.y < 0.0 {
        -angle
    } else {
        angle
    }
}

/// Signed turning angle from direction `from` to direction `to`, in [-π, π].
#[inline]
pub fn turning_angle(from: &Vector2<f32>, to: &Vector2<f32>) -> f32 {
    wrap_to_pi(signed_angle(to) - signed_angle(from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn wrap_to_pi_basic() {
        assert!(approx_eq(wrap_to_pi(0.5), 0.5));
        assert!(approx_eq(wrap_to_pi(2.0 * PI), 0.0));
        assert!(approx_eq(wrap_to_pi(1.5 * PI), -FRAC_PI_2));
        assert!(approx_eq(wrap_to_pi(-1.5 * PI), FRAC_PI_2));
        let w = wrap_to_pi(PI);
        assert!(w.abs() <= PI + 1e-6);
    }

    #[test]
    fn signed_angle_follows_y_sign() {
        assert!(approx_eq(signed_angle(&Vector2::new(1.0, 0.0)), 0.0));
        assert!(approx_eq(signed_angle(&Vector2::new(0.0, 1.0)), FRAC_PI_2));
        assert!(approx_eq(signed_angle(&Vector2::new(0.0, -1.0)), -FRAC_PI_2));
        assert!(approx_eq(signed_angle(&Vector2::new(1.0, -1.0)), -FRAC_PI_4));
        assert!(approx_eq(signed_angle(&Vector2::zeros()), 0.0));
    }

    #[test]
    fn turning_angle_handles_wrap() {
        let a = Vector2::new(-1.0, 0.1);
        let b = Vector2::new(-1.0, -0.1);
        let t = turning_angle(&a, &b);
        assert!(t.abs() < 0.3, "expected small turn across the ±π seam, got {t}");

        let east = Vector2::new(1.0, 0.0);
        let south = Vector2::new(0.0, 1.0);
        assert!(approx_eq(turning_angle(&east, &south), FRAC_PI_2));
        assert!(approx_eq(turning_angle(&south, &east), -FRAC_PI_2));
    }
}
