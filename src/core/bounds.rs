//! Map Bounds
//!
//! The playable rectangle `[0, width] x [0, height]`. Leaving it is not an
//! error: positions are clamped back in, never reflected or wrapped.

use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

/// Playable map rectangle anchored at the origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    /// Map width (X extent)
    pub width: f64,
    /// Map height (Y extent)
    pub height: f64,
}

impl Default for MapBounds {
    fn default() -> Self {
        Self::new(crate::MAP_SIZE[0], crate::MAP_SIZE[1])
    }
}

impl MapBounds {
    /// Create bounds of the given size.
    ///
    /// The size is not checked here; `WorldConfig::validate` rejects
    /// non-positive and NaN sizes before a world is built.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Clamp each axis of `position` into the map independently.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is negative or NaN.
    #[inline]
    pub fn clamp(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            position.x.clamp(0.0, self.width),
            position.y.clamp(0.0, self.height),
        )
    }

    /// Check if position is within bounds (edges inclusive).
    #[inline]
    pub fn contains(&self, position: Vec2) -> bool {
        position.x >= 0.0
            && position.x <= self.width
            && position.y >= 0.0
            && position.y <= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside_unchanged() {
        let bounds = MapBounds::new(100.0, 50.0);
        let inside = Vec2::new(10.0, 20.0);
        assert_eq!(bounds.clamp(inside), inside);
    }

    #[test]
    fn test_clamp_per_axis() {
        let bounds = MapBounds::new(100.0, 50.0);
        assert_eq!(bounds.clamp(Vec2::new(150.0, -3.0)), Vec2::new(100.0, 0.0));
        assert_eq!(bounds.clamp(Vec2::new(-1e12, 1e12)), Vec2::new(0.0, 50.0));
        assert!(bounds.contains(Vec2::new(100.0, 50.0)));
        assert!(!bounds.contains(Vec2::new(100.1, 0.0)));
    }
}
