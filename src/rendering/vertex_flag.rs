//! # Vertex Flag Module
//!
//! Per-vertex tags written into the chunk mesh alongside each vertex. The
//! shaders read the flag to pick special behaviour such as water animation or
//! foliage waving. Mesh parts treat the value as opaque.

use num_derive::FromPrimitive;

/// Tags a vertex with the shading behaviour the renderer should apply to it.
///
/// The discriminants are the values stored in [`VertexElements::flags`](super::VertexElements)
/// and must stay in sync with the shader side.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, FromPrimitive)]
pub enum ChunkVertexFlag {
    /// Regular lit geometry.
    #[default]
    Normal = 0,

    /// Submerged water geometry.
    Water = 1,

    /// The animated top surface of a water body.
    WaterSurface = 2,

    /// Geometry tinted by the biome color mask (grass, leaves).
    ColorMask = 3,

    /// Plants that sway with their whole mesh.
    Waving = 4,

    /// Full blocks whose vertices sway (leaf blocks).
    WavingBlock = 5,
}

impl ChunkVertexFlag {
    /// Returns the integer written into the vertex buffer for this flag.
    pub fn value(self) -> u32 {
        self as u32
    }

    /// Converts a raw buffer value back into a flag.
    ///
    /// # Returns
    /// `None` when the value does not correspond to a known flag.
    pub fn from_value(value: u32) -> Option<Self> {
        num::FromPrimitive::from_u32(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_the_buffer() {
        for flag in [
            ChunkVertexFlag::Normal,
            ChunkVertexFlag::Water,
            ChunkVertexFlag::WaterSurface,
            ChunkVertexFlag::ColorMask,
            ChunkVertexFlag::Waving,
            ChunkVertexFlag::WavingBlock,
        ] {
            assert_eq!(ChunkVertexFlag::from_value(flag.value()), Some(flag));
        }
    }

    #[test]
    fn unknown_value_is_rejected() {
        assert_eq!(ChunkVertexFlag::from_value(6), None);
        assert_eq!(ChunkVertexFlag::WavingBlock.value(), 5);
    }
}
