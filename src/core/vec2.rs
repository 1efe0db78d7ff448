//! 2D Vector
//!
//! Value-type vector math for entity movement and collision.
//! Every operation returns a new vector; nothing mutates in place.

use std::fmt;
use std::ops::{Add, Neg, Sub};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by geometry primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Attempted to normalize a vector of zero length.
    #[error("cannot normalize a zero-length vector")]
    DivisionByZero,

    /// Attempted to normalize a vector with a NaN or infinite component.
    #[error("cannot normalize a non-finite vector")]
    NonFinite,
}

/// 2D vector with `f64` components.
#[derive(Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Unit vector pointing right (+X)
    pub const RIGHT: Self = Self { x: 1.0, y: 0.0 };

    /// Unit vector pointing down the screen (+Y)
    pub const DOWN: Self = Self { x: 0.0, y: 1.0 };

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Componentwise sum.
    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Negate both components.
    ///
    /// The relative position of `a` from `b` is `a.add(b.inverse())`.
    #[inline]
    pub fn inverse(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Normalize to unit length.
    ///
    /// Fails with [`GeometryError::DivisionByZero`] for the zero vector and
    /// [`GeometryError::NonFinite`] for NaN or infinite components. Any other
    /// finite vector, however large or small, normalizes to length one.
    pub fn unit(self) -> Result<Self, GeometryError> {
        if !self.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        // Divide by the larger component first so the length can neither
        // overflow nor underflow.
        let largest = self.x.abs().max(self.y.abs());
        if largest == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        let (x, y) = (self.x / largest, self.y / largest);
        let len = x.hypot(y);
        Ok(Self::new(x / len, y / len))
    }

    /// Squared length (avoids sqrt - prefer this for comparisons).
    #[inline]
    pub fn magnitude_sqr(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Angle from the +X axis in radians, `atan2(y, x)`.
    #[inline]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Scale both components by `k`.
    #[inline]
    pub fn scale_all(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    /// Offset the X component only.
    #[inline]
    pub fn add_x(self, dx: f64) -> Self {
        Self::new(self.x + dx, self.y)
    }

    /// Offset the Y component only.
    #[inline]
    pub fn add_y(self, dy: f64) -> Self {
        Self::new(self.x, self.y + dy)
    }

    /// Componentwise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Whether both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vec2::add(self, rhs)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Vec2::add(self, rhs.inverse())
    }
}

impl Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.inverse()
    }
}

impl fmt::Debug for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2({:.3}, {:.3})", self.x, self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_vec2_add_and_inverse() {
        let a = Vec2::new(3.0, 4.0);
        let b = Vec2::new(1.0, 2.0);
        assert_eq!(a.add(b), Vec2::new(4.0, 6.0));
        assert_eq!(a.add(b.inverse()), Vec2::new(2.0, 2.0));
        assert_eq!(a - b, a.add(b.inverse()));
        assert_eq!(-a, Vec2::new(-3.0, -4.0));
    }

    #[test]
    fn test_vec2_magnitude() {
        // 3-4-5 triangle
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.magnitude_sqr(), 25.0);
    }

    #[test]
    fn test_vec2_unit() {
        let unit = Vec2::new(3.0, 4.0).unit().unwrap();
        assert!((unit.x - 0.6).abs() < 1e-12);
        assert!((unit.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_vec2_unit_of_zero_fails() {
        assert_eq!(Vec2::ZERO.unit(), Err(GeometryError::DivisionByZero));
        assert_eq!(Vec2::new(-0.0, 0.0).unit(), Err(GeometryError::DivisionByZero));
    }

    #[test]
    fn test_vec2_unit_extreme_magnitudes() {
        // Squared length overflows to infinity
        assert_eq!(Vec2::new(1e200, 0.0).unit(), Ok(Vec2::RIGHT));
        let big = Vec2::new(f64::MAX, -f64::MAX).unit().unwrap();
        assert!((big.magnitude_sqr() - 1.0).abs() < 1e-12);

        // Squared length underflows to zero
        assert_eq!(Vec2::new(0.0, -1e-200).unit(), Ok(Vec2::new(0.0, -1.0)));
        let tiny = Vec2::new(f64::MIN_POSITIVE / 4.0, 5e-324).unit().unwrap();
        assert!((tiny.magnitude_sqr() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_vec2_unit_non_finite_fails() {
        assert_eq!(Vec2::new(f64::NAN, 0.0).unit(), Err(GeometryError::NonFinite));
        assert_eq!(Vec2::new(0.0, f64::INFINITY).unit(), Err(GeometryError::NonFinite));
    }

    #[test]
    fn test_vec2_angle() {
        assert_eq!(Vec2::RIGHT.angle(), 0.0);
        assert!((Vec2::DOWN.angle() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((Vec2::new(-1.0, 0.0).angle() - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_vec2_axis_offsets() {
        let v = Vec2::new(1.0, 1.0);
        assert_eq!(v.add_x(-0.5), Vec2::new(0.5, 1.0));
        assert_eq!(v.add_y(2.0), Vec2::new(1.0, 3.0));
        assert_eq!(v.scale_all(3.0), Vec2::new(3.0, 3.0));
    }

    proptest! {
        #[test]
        fn magnitude_sqr_is_non_negative(x in -1e6f64..1e6, y in -1e6f64..1e6) {
            prop_assert!(Vec2::new(x, y).magnitude_sqr() >= 0.0);
        }

        #[test]
        fn unit_has_length_one(
            x in prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO,
            y in prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL,
        ) {
            let unit = Vec2::new(x, y).unit().unwrap();
            prop_assert!((unit.magnitude_sqr() - 1.0).abs() < 1e-9);
        }
    }
}
