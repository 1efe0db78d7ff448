//! Hitbox Shapes
//!
//! Collision shapes attached to entities. Shapes are axis-aligned and carry
//! no position of their own; the owning entity supplies the center.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when building hitboxes from external data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HitboxError {
    /// Shape tag is not one of the supported shapes.
    #[error("unsupported hitbox shape: {0:?}")]
    UnsupportedShape(String),

    /// Pair of shape tags that collision dispatch cannot handle.
    #[error("unsupported hitbox pair: {first:?} vs {second:?}")]
    UnsupportedHitboxPair {
        /// Tag of the first shape
        first: String,
        /// Tag of the second shape
        second: String,
    },

    /// Negative or non-finite measurement.
    #[error("invalid hitbox measurement {name} = {value}")]
    InvalidMeasurement {
        /// Measurement name
        name: &'static str,
        /// Offending value
        value: f64,
    },
}

/// Shape discriminant, as it appears in serialized data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    /// Circle
    Circle,
    /// Axis-aligned rectangle
    Rect,
}

impl ShapeKind {
    /// Serialized tag.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rect => "rect",
        }
    }

    /// Validate a pair of external shape tags before dispatching on them.
    pub fn parse_pair(first: &str, second: &str) -> Result<(Self, Self), HitboxError> {
        match (first.parse::<Self>(), second.parse::<Self>()) {
            (Ok(a), Ok(b)) => Ok((a, b)),
            _ => Err(HitboxError::UnsupportedHitboxPair {
                first: first.to_string(),
                second: second.to_string(),
            }),
        }
    }
}

impl FromStr for ShapeKind {
    type Err = HitboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(ShapeKind::Circle),
            "rect" => Ok(ShapeKind::Rect),
            other => Err(HitboxError::UnsupportedShape(other.to_string())),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collision shape of an entity.
///
/// Serialized with a `type` tag, e.g. `{"type":"circle","radius":1.0}`.
/// Unknown tags fail to deserialize.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Hitbox {
    /// Circle centered on the entity position.
    Circle {
        /// Radius in map units
        radius: f64,
    },
    /// Axis-aligned rectangle centered on the entity position.
    Rect {
        /// Full width in map units
        width: f64,
        /// Full height in map units
        height: f64,
    },
}

impl Default for Hitbox {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Hitbox {
    /// Zero-radius circle, the default entity hitbox.
    pub const ZERO: Self = Hitbox::Circle { radius: 0.0 };

    /// Circle of the given radius.
    pub fn circle(radius: f64) -> Result<Self, HitboxError> {
        check_measurement("radius", radius)?;
        Ok(Hitbox::Circle { radius })
    }

    /// Rectangle of the given full width and height.
    pub fn rect(width: f64, height: f64) -> Result<Self, HitboxError> {
        check_measurement("width", width)?;
        check_measurement("height", height)?;
        Ok(Hitbox::Rect { width, height })
    }

    /// Shape discriminant.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Hitbox::Circle { .. } => ShapeKind::Circle,
            Hitbox::Rect { .. } => ShapeKind::Rect,
        }
    }

    /// Shape-normalized size used by renderers to scale sprites.
    ///
    /// Radius for circles, half of the shorter side for rectangles.
    pub fn comparable(&self) -> f64 {
        match *self {
            Hitbox::Circle { radius } => radius,
            Hitbox::Rect { width, height } => width.min(height) / 2.0,
        }
    }

    /// Check measurements of a hitbox that arrived through deserialization.
    pub fn validate(&self) -> Result<(), HitboxError> {
        match *self {
            Hitbox::Circle { radius } => check_measurement("radius", radius),
            Hitbox::Rect { width, height } => {
                check_measurement("width", width)?;
                check_measurement("height", height)
            }
        }
    }
}

fn check_measurement(name: &'static str, value: f64) -> Result<(), HitboxError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(HitboxError::InvalidMeasurement { name, value })
    }
}
