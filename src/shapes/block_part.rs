//! # Block Part Module
//!
//! This module names the pieces a block shape is split into: the six faces of
//! the block plus a center piece for geometry that is not attached to a face.

use cgmath::{InnerSpace, Vector3};
use serde::Deserialize;

/// One piece of a block shape.
///
/// Side parts can be culled when the neighbouring block covers that face.
/// The center part is always rendered.
///
/// The side order is: [FRONT, BACK, BOTTOM, TOP, LEFT, RIGHT]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockPart {
    /// Geometry inside the block, never culled.
    Center,

    /// The front face (facing negative Z)
    Front,

    /// The back face (facing positive Z)
    Back,

    /// The bottom face (facing negative Y)
    Bottom,

    /// The top face (facing positive Y)
    Top,

    /// The left face (facing negative X)
    Left,

    /// The right face (facing positive X)
    Right,
}

impl BlockPart {
    /// Returns all parts, the center first followed by the six sides.
    pub fn all() -> [BlockPart; 7] {
        [
            BlockPart::Center,
            BlockPart::Front,
            BlockPart::Back,
            BlockPart::Bottom,
            BlockPart::Top,
            BlockPart::Left,
            BlockPart::Right,
        ]
    }

    /// Returns the six side parts.
    pub fn sides() -> [BlockPart; 6] {
        [
            BlockPart::Front,
            BlockPart::Back,
            BlockPart::Bottom,
            BlockPart::Top,
            BlockPart::Left,
            BlockPart::Right,
        ]
    }

    /// Returns `true` for every part except the center.
    pub fn is_side(self) -> bool {
        self != BlockPart::Center
    }

    /// The outward unit normal of the face, or the zero vector for the center.
    pub fn direction(self) -> Vector3<f32> {
        match self {
            BlockPart::Center => Vector3::new(0.0, 0.0, 0.0),
            BlockPart::Front => Vector3::new(0.0, 0.0, -1.0),
            BlockPart::Back => Vector3::new(0.0, 0.0, 1.0),
            BlockPart::Bottom => Vector3::new(0.0, -1.0, 0.0),
            BlockPart::Top => Vector3::new(0.0, 1.0, 0.0),
            BlockPart::Left => Vector3::new(-1.0, 0.0, 0.0),
            BlockPart::Right => Vector3::new(1.0, 0.0, 0.0),
        }
    }

    /// Finds the side whose outward normal is closest to `direction`.
    ///
    /// Used to work out which face a side part ends up on after the shape has
    /// been rotated. Ties resolve to the earlier side in [`BlockPart::sides`].
    pub fn from_direction(direction: Vector3<f32>) -> BlockPart {
        let mut best = BlockPart::Front;
        let mut best_dot = f32::NEG_INFINITY;
        for side in BlockPart::sides() {
            let dot = side.direction().dot(direction);
            if dot > best_dot {
                best = side;
                best_dot = dot;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_round_trip_through_direction() {
        for side in BlockPart::sides() {
            assert!(side.is_side());
            assert_eq!(BlockPart::from_direction(side.direction()), side);
        }
        assert!(!BlockPart::Center.is_side());
    }

    #[test]
    fn drifted_direction_snaps_to_nearest_side() {
        let drifted = Vector3::new(0.02, 0.999, -0.01);
        assert_eq!(BlockPart::from_direction(drifted), BlockPart::Top);
    }
}
