//! Interleaved vertex format for uploading chunk meshes.
//!
//! [`VertexElements`](super::VertexElements) keeps each attribute in its own
//! array while parts are appended. Once a chunk is complete the arrays are
//! zipped into [`ChunkVertex`] values that can be handed to the GPU as raw bytes.

/// A single vertex of a chunk mesh.
///
/// # Memory Layout
/// - Position: 3x f32 (12 bytes)
/// - Normal: 3x f32 (12 bytes)
/// - Color: 4x f32 (16 bytes)
/// - Texture Coordinates: 2x f32 (8 bytes)
/// - Flag: u32 (4 bytes)
/// - Frames: u32 (4 bytes)
///
/// Total size: 56 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ChunkVertex {
    /// Position in chunk space
    pub position: [f32; 3],
    /// Unit surface normal
    pub normal: [f32; 3],
    /// RGBA vertex color
    pub color: [f32; 4],
    /// Texture atlas coordinates
    pub tex_coords: [f32; 2],
    /// Raw [`ChunkVertexFlag`](super::ChunkVertexFlag) value
    pub flag: u32,
    /// Number of animation frames of the sampled texture
    pub frames: u32,
}

impl ChunkVertex {
    /// Byte distance between two consecutive vertices in a buffer.
    pub const STRIDE: usize = std::mem::size_of::<ChunkVertex>();

    /// Byte offsets of each attribute, in declaration order.
    ///
    /// Matches the shader input locations 0 through 5.
    pub const ATTRIBUTE_OFFSETS: [usize; 6] = [
        0,
        std::mem::size_of::<[f32; 3]>(),
        std::mem::size_of::<[f32; 6]>(),
        std::mem::size_of::<[f32; 10]>(),
        std::mem::size_of::<[f32; 12]>(),
        std::mem::size_of::<[f32; 13]>(),
    ];
}
