//! Scalar and vector helpers.

use std::ops::{Add, Mul};

/// Linear interpolation `(1 - t) * a + t * b`.
///
/// Works for any type scalable by `f32` (`f32`, `Vec3`, `Quat`, ...). `t` is not
/// clamped, so values outside `[0, 1]` extrapolate.
#[inline]
pub fn lerp<T>(t: f32, a: T, b: T) -> T
where
    T: Mul<f32, Output = T> + Add<Output = T>,
{
    a * (1.0 - t) + b * t
}

/// Restricts `x` to `[min, max]`.
///
/// Unlike `f32::clamp` this does not panic when `min > max`: `x < min` wins
/// and returns `min`, otherwise `x > max` returns `max`.
#[inline]
pub fn clamp<T: PartialOrd>(x: T, min: T, max: T) -> T {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use bevy::math::Vec3;

    use super::*;

    #[test]
    fn test_lerp() {
        let (a, b) = (2.0_f32, 4.0_f32);
        assert_eq!(lerp(0.0, a, b), 2.0);
        assert_eq!(lerp(1.0, a, b), 4.0);
        assert_eq!(lerp(0.5, a, b), 3.0);

        // No clamping on t
        assert_eq!(lerp(2.0, a, b), 6.0);
        assert_eq!(lerp(-1.0, a, b), 0.0);

        let v = lerp(0.5, Vec3::ZERO, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(5, 0, 3), 3);

        // Inverted bounds do not panic
        assert_eq!(clamp(0.5, 1.0, 0.0), 1.0);
    }
}
