//! Error type shared by the block shape and mesh part modules.

use thiserror::Error;

/// Errors raised while building, reading or loading block mesh parts.
#[derive(Debug, Error)]
pub enum MeshPartError {
    /// A positional accessor was called with an index past the end of its sequence.
    #[error("{kind} index {index} out of bounds (len {len})")]
    OutOfBounds {
        /// Which sequence was accessed (`"vertex"`, `"normal"`, `"tex_coord"` or `"index"`)
        kind: &'static str,
        /// The requested position
        index: usize,
        /// Length of the accessed sequence
        len: usize,
    },

    /// Vertices, normals and texture coordinates must be parallel sequences.
    #[error(
        "mismatched part arrays: {vertices} vertices, {normals} normals, {tex_coords} tex coords"
    )]
    LengthMismatch {
        /// Number of vertices supplied
        vertices: usize,
        /// Number of normals supplied
        normals: usize,
        /// Number of texture coordinates supplied
        tex_coords: usize,
    },

    /// A triangle index points past the last vertex of the part.
    #[error("triangle index {index} references a part with only {size} vertices")]
    IndexOutOfRange {
        /// The offending index value
        index: u32,
        /// Number of vertices in the part
        size: usize,
    },

    /// A shape definition could not be parsed.
    #[error("invalid shape definition: {0}")]
    Json(#[from] serde_json::Error),
}
