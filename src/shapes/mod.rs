//! # Block Shapes
//!
//! Geometry used to draw blocks.
//!
//! ## Key Components
//! - [`BlockMeshPart`]: an immutable fragment of vertices, normals, texture
//!   coordinates and triangle indices
//! - [`BlockPart`]: the center or one of the six sides of a block
//! - [`BlockShape`]: the parts making up one block, built in code or loaded from JSON
//!
//! ## Usage
//! ```rust
//! use cgmath::{Deg, Quaternion, Rotation3, Vector2};
//! use voxel_block_shapes::{
//!     rendering::{ChunkMesh, ChunkVertexFlag, RenderType},
//!     shapes::BlockShape,
//! };
//!
//! let turned = BlockShape::cube()?
//!     .map_tex_coords(Vector2::new(0.25, 0.0), 0.0625, 1)
//!     .rotate(Quaternion::from_angle_y(Deg(90.0)));
//!
//! let mut chunk = ChunkMesh::new();
//! turned.append_to(
//!     &mut chunk,
//!     4,
//!     10,
//!     2,
//!     RenderType::Opaque,
//!     ChunkVertexFlag::Normal,
//!     |_| true,
//! );
//! assert_eq!(chunk.vertex_count(), 24);
//! # Ok::<(), voxel_block_shapes::MeshPartError>(())
//! ```

mod block_mesh_part;
mod block_part;
mod block_shape;

pub use block_mesh_part::{BlockMeshPart, BORDER, OPAQUE_WHITE};
pub use block_part::BlockPart;
pub use block_shape::BlockShape;
