//! Chunk mesh vertex buffers.
//!
//! A chunk mesh collects the geometry of every block in a chunk. Geometry is
//! split by [`RenderType`] so opaque, translucent, billboard and water passes
//! can each be drawn with their own pipeline state.

use super::vertex::ChunkVertex;

/// Selects the buffer within a [`ChunkMesh`] that geometry is appended to.
///
/// The order of the variants matches the order of [`ChunkMesh::elements`].
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum RenderType {
    /// Solid blocks, drawn first with depth writes.
    Opaque = 0,

    /// Alpha-blended blocks such as glass.
    Translucent = 1,

    /// Camera-facing quads such as flowers and tall grass.
    Billboard = 2,

    /// Water and ice, drawn in the refraction pass.
    WaterAndIce = 3,
}

impl RenderType {
    /// Returns all render types in buffer order.
    pub fn all() -> [RenderType; 4] {
        [
            RenderType::Opaque,
            RenderType::Translucent,
            RenderType::Billboard,
            RenderType::WaterAndIce,
        ]
    }

    /// Position of this render type's buffer within a [`ChunkMesh`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Growable vertex attribute arrays for one render type.
///
/// Attributes are stored flattened in parallel arrays. `vertex_count` is the
/// running number of vertices appended so far and is the base added to the
/// indices of the next appended part.
#[derive(Debug, Default, Clone)]
pub struct VertexElements {
    /// Positions, three floats per vertex
    pub vertices: Vec<f32>,
    /// Normals, three floats per vertex
    pub normals: Vec<f32>,
    /// RGBA colors, four floats per vertex
    pub color: Vec<f32>,
    /// Texture coordinates, two floats per vertex
    pub tex: Vec<f32>,
    /// One vertex flag value per vertex
    pub flags: Vec<u32>,
    /// One animation frame count per vertex
    pub frames: Vec<u32>,
    /// Triangle list indices into this buffer's vertices
    pub indices: Vec<u32>,
    /// Number of vertices appended so far
    pub vertex_count: u32,
}

impl VertexElements {
    /// Creates an empty set of vertex arrays.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when no geometry has been appended.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Number of triangle indices appended so far.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Drops all geometry while keeping the allocations for reuse.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.normals.clear();
        self.color.clear();
        self.tex.clear();
        self.flags.clear();
        self.frames.clear();
        self.indices.clear();
        self.vertex_count = 0;
    }

    /// Zips the parallel attribute arrays into interleaved vertices.
    ///
    /// # Returns
    /// One [`ChunkVertex`] per appended vertex, in append order.
    pub fn to_vertices(&self) -> Vec<ChunkVertex> {
        (0..self.vertex_count as usize)
            .map(|i| ChunkVertex {
                position: [
                    self.vertices[i * 3],
                    self.vertices[i * 3 + 1],
                    self.vertices[i * 3 + 2],
                ],
                normal: [
                    self.normals[i * 3],
                    self.normals[i * 3 + 1],
                    self.normals[i * 3 + 2],
                ],
                color: [
                    self.color[i * 4],
                    self.color[i * 4 + 1],
                    self.color[i * 4 + 2],
                    self.color[i * 4 + 3],
                ],
                tex_coords: [self.tex[i * 2], self.tex[i * 2 + 1]],
                flag: self.flags[i],
                frames: self.frames[i],
            })
            .collect()
    }

    /// Interleaved vertex data as raw bytes, ready for a vertex buffer.
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.to_vertices()).to_vec()
    }

    /// Index data as raw bytes, ready for an index buffer.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// The vertex buffers of a single chunk, one per [`RenderType`].
#[derive(Debug, Clone)]
pub struct ChunkMesh {
    /// Buffers indexed by [`RenderType::index`].
    pub elements: [VertexElements; 4],
}

impl Default for ChunkMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkMesh {
    /// Creates a chunk mesh with empty buffers for every render type.
    pub fn new() -> Self {
        ChunkMesh {
            elements: std::array::from_fn(|_| VertexElements::new()),
        }
    }

    /// Buffer for the given render type.
    pub fn vertex_elements(&self, render_type: RenderType) -> &VertexElements {
        &self.elements[render_type.index()]
    }

    /// Mutable buffer for the given render type.
    pub fn vertex_elements_mut(&mut self, render_type: RenderType) -> &mut VertexElements {
        &mut self.elements[render_type.index()]
    }

    /// Total number of vertices across all render types.
    pub fn vertex_count(&self) -> u64 {
        self.elements.iter().map(|e| e.vertex_count as u64).sum()
    }

    /// Total number of triangles across all render types.
    pub fn triangle_count(&self) -> u64 {
        self.elements.iter().map(|e| e.index_count() as u64 / 3).sum()
    }

    /// Clears every buffer.
    pub fn clear(&mut self) {
        for elements in self.elements.iter_mut() {
            elements.clear();
        }
    }
}
