//! Chunk mesh buffers that block geometry is appended into.
//!
//! This module holds the CPU side of a chunk's renderable geometry:
//! - [`ChunkMesh`]: one set of vertex buffers per [`RenderType`]
//! - [`VertexElements`]: the growable attribute arrays of a single buffer
//! - [`ChunkVertexFlag`]: per-vertex shading tags
//! - [`ChunkVertex`]: the interleaved upload format

mod chunk_mesh;
mod vertex;
mod vertex_flag;

pub use chunk_mesh::{ChunkMesh, RenderType, VertexElements};
pub use vertex::ChunkVertex;
pub use vertex_flag::ChunkVertexFlag;
