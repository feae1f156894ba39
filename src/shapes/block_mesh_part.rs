//! Reusable geometry fragments for block meshes.
//!
//! A block's visual mesh is assembled from one or more [`BlockMeshPart`]s, one
//! per side of the block plus an optional center piece. Parts are built once
//! when a shape is loaded, adapted to a texture and orientation with
//! [`BlockMeshPart::map_tex_coords`] and [`BlockMeshPart::rotate`], and then
//! stamped into chunk meshes many times with [`BlockMeshPart::append_to`].

use std::sync::Arc;

use cgmath::{InnerSpace, Quaternion, Rotation, Vector2, Vector3};
use log::trace;

use crate::{
    error::MeshPartError,
    rendering::{ChunkMesh, ChunkVertexFlag, RenderType},
};

/// Inset applied to each atlas tile edge, as a fraction of the tile width.
///
/// Keeps linear filtering from sampling texels of neighbouring tiles.
pub const BORDER: f32 = 1.0 / 128.0;

/// Vertex color written for every vertex of a part.
pub const OPAQUE_WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// The elements composing part of a block mesh.
///
/// Vertices, normals and texture coordinates are parallel sequences of equal
/// length; `indices` is a triangle list into them. The sequences are never
/// mutated after construction, so derived parts share the ones they leave
/// untouched and cloning a part is cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockMeshPart {
    vertices: Arc<[Vector3<f32>]>,
    normals: Arc<[Vector3<f32>]>,
    tex_coords: Arc<[Vector2<f32>]>,
    indices: Arc<[u32]>,
    tex_frames: u32,
}

impl BlockMeshPart {
    /// Creates a part from caller supplied geometry.
    ///
    /// All four sequences are copied. The texture frame count starts at 1.
    ///
    /// # Errors
    /// - [`MeshPartError::LengthMismatch`] if the vertex, normal and texture
    ///   coordinate sequences differ in length
    /// - [`MeshPartError::IndexOutOfRange`] if an index does not reference a vertex
    pub fn new(
        vertices: &[Vector3<f32>],
        normals: &[Vector3<f32>],
        tex_coords: &[Vector2<f32>],
        indices: &[u32],
    ) -> Result<Self, MeshPartError> {
        if vertices.len() != normals.len() || vertices.len() != tex_coords.len() {
            return Err(MeshPartError::LengthMismatch {
                vertices: vertices.len(),
                normals: normals.len(),
                tex_coords: tex_coords.len(),
            });
        }
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(MeshPartError::IndexOutOfRange {
                index,
                size: vertices.len(),
            });
        }

        Ok(BlockMeshPart {
            vertices: Arc::from(vertices),
            normals: Arc::from(normals),
            tex_coords: Arc::from(tex_coords),
            indices: Arc::from(indices),
            tex_frames: 1,
        })
    }

    /// Number of vertices in the part.
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangle indices in the part.
    pub fn indices_size(&self) -> usize {
        self.indices.len()
    }

    /// Returns the vertex at position `i`.
    pub fn vertex(&self, i: usize) -> Result<Vector3<f32>, MeshPartError> {
        lookup(&self.vertices, i, "vertex")
    }

    /// Returns the normal at position `i`.
    pub fn normal(&self, i: usize) -> Result<Vector3<f32>, MeshPartError> {
        lookup(&self.normals, i, "normal")
    }

    /// Returns the texture coordinate at position `i`.
    pub fn tex_coord(&self, i: usize) -> Result<Vector2<f32>, MeshPartError> {
        lookup(&self.tex_coords, i, "tex_coord")
    }

    /// Returns the triangle index at position `i`.
    pub fn index(&self, i: usize) -> Result<u32, MeshPartError> {
        lookup(&self.indices, i, "index")
    }

    /// Number of animation frames of the texture this part is mapped to.
    pub fn tex_frames(&self) -> u32 {
        self.tex_frames
    }

    /// All vertices of the part.
    pub fn vertices(&self) -> &[Vector3<f32>] {
        &self.vertices
    }

    /// All normals of the part.
    pub fn normals(&self) -> &[Vector3<f32>] {
        &self.normals
    }

    /// All texture coordinates of the part.
    pub fn tex_coords(&self) -> &[Vector2<f32>] {
        &self.tex_coords
    }

    /// All triangle indices of the part.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Remaps the texture coordinates into a square region of a texture atlas.
    ///
    /// Each coordinate in `0..1` is scaled into the tile starting at `offset`
    /// with side length `width`, inset by [`BORDER`] of the tile width on every
    /// edge.
    ///
    /// # Arguments
    /// * `offset` - Atlas coordinate of the tile's upper-left corner
    /// * `width` - Tile side length in atlas coordinates
    /// * `frames` - Number of animation frames of the tile
    ///
    /// # Returns
    /// A new part sharing this part's vertices, normals and indices.
    pub fn map_tex_coords(&self, offset: Vector2<f32>, width: f32, frames: u32) -> Self {
        let border = BORDER * width;
        let scale = width - 2.0 * border;
        let tex_coords: Arc<[Vector2<f32>]> = self
            .tex_coords
            .iter()
            .map(|t| {
                Vector2::new(
                    offset.x + border + t.x * scale,
                    offset.y + border + t.y * scale,
                )
            })
            .collect();

        BlockMeshPart {
            vertices: Arc::clone(&self.vertices),
            normals: Arc::clone(&self.normals),
            tex_coords,
            indices: Arc::clone(&self.indices),
            tex_frames: frames,
        }
    }

    /// Appends this part's geometry to a chunk mesh.
    ///
    /// Vertices are translated by the block position. Indices are shifted by
    /// the number of vertices already present in the target buffer so every
    /// triangle keeps pointing at this part's vertices.
    ///
    /// # Arguments
    /// * `chunk` - The chunk mesh receiving the geometry
    /// * `offset_x`, `offset_y`, `offset_z` - Block position within the chunk
    /// * `render_type` - Selects the buffer the geometry is appended to
    /// * `flags` - Vertex flag written for every vertex
    pub fn append_to(
        &self,
        chunk: &mut ChunkMesh,
        offset_x: i32,
        offset_y: i32,
        offset_z: i32,
        render_type: RenderType,
        flags: ChunkVertexFlag,
    ) {
        let elements = chunk.vertex_elements_mut(render_type);

        for tex_coord in self.tex_coords.iter() {
            elements.tex.push(tex_coord.x);
            elements.tex.push(tex_coord.y);
        }

        let next_index = elements.vertex_count;
        let offset = Vector3::new(offset_x as f32, offset_y as f32, offset_z as f32);
        for (vertex, normal) in self.vertices.iter().zip(self.normals.iter()) {
            let position = *vertex + offset;
            elements.color.extend_from_slice(&OPAQUE_WHITE);
            elements
                .vertices
                .extend_from_slice(&[position.x, position.y, position.z]);
            elements
                .normals
                .extend_from_slice(&[normal.x, normal.y, normal.z]);
            elements.flags.push(flags.value());
            elements.frames.push(self.tex_frames);
        }
        elements.vertex_count += self.vertices.len() as u32;

        elements
            .indices
            .extend(self.indices.iter().map(|index| index + next_index));

        trace!(
            "Appended {} vertices to {:?} buffer at ({}, {}, {})",
            self.vertices.len(),
            render_type,
            offset_x,
            offset_y,
            offset_z
        );
    }

    /// Rotates the part's geometry.
    ///
    /// Normals are re-normalized after rotation to remove accumulated drift.
    ///
    /// # Returns
    /// A new part sharing this part's texture coordinates and indices.
    pub fn rotate(&self, rotation: Quaternion<f32>) -> Self {
        let vertices: Arc<[Vector3<f32>]> = self
            .vertices
            .iter()
            .map(|v| rotation.rotate_vector(*v))
            .collect();
        let normals: Arc<[Vector3<f32>]> = self
            .normals
            .iter()
            .map(|n| rotation.rotate_vector(*n).normalize())
            .collect();

        BlockMeshPart {
            vertices,
            normals,
            tex_coords: Arc::clone(&self.tex_coords),
            indices: Arc::clone(&self.indices),
            tex_frames: self.tex_frames,
        }
    }
}

fn lookup<T: Copy>(values: &[T], i: usize, kind: &'static str) -> Result<T, MeshPartError> {
    values.get(i).copied().ok_or(MeshPartError::OutOfBounds {
        kind,
        index: i,
        len: values.len(),
    })
}

#[cfg(test)]
mod tests {
    use cgmath::{Deg, Rotation3};

    use super::*;

    const EPSILON: f32 = 1e-6;

    /// A unit quad on the top face of a block.
    fn top_quad() -> BlockMeshPart {
        BlockMeshPart::new(
            &[
                Vector3::new(0.0, 1.0, 0.0),
                Vector3::new(1.0, 1.0, 0.0),
                Vector3::new(1.0, 1.0, 1.0),
                Vector3::new(0.0, 1.0, 1.0),
            ],
            &[Vector3::unit_y(); 4],
            &[
                Vector2::new(0.0, 0.0),
                Vector2::new(1.0, 0.0),
                Vector2::new(1.0, 1.0),
                Vector2::new(0.0, 1.0),
            ],
            &[0, 1, 2, 0, 2, 3],
        )
        .unwrap()
    }

    fn triangle() -> BlockMeshPart {
        BlockMeshPart::new(
            &[
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 0.0, 1.0),
            ],
            &[Vector3::new(0.0, -2.0, 0.0); 3],
            &[Vector2::new(0.0, 0.0); 3],
            &[0, 2, 1],
        )
        .unwrap()
    }

    #[test]
    fn sizes_match_supplied_arrays() {
        let part = top_quad();
        assert_eq!(part.size(), 4);
        assert_eq!(part.indices_size(), 6);
        assert_eq!(part.tex_frames(), 1);
    }

    #[test]
    fn construction_copies_input() {
        let mut vertices = vec![Vector3::new(0.0, 0.0, 0.0); 3];
        let part = BlockMeshPart::new(
            &vertices,
            &[Vector3::unit_z(); 3],
            &[Vector2::new(0.0, 0.0); 3],
            &[0, 1, 2],
        )
        .unwrap();
        vertices[0] = Vector3::new(9.0, 9.0, 9.0);
        assert_eq!(part.vertex(0).unwrap(), Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn accessors_reject_out_of_range() {
        let part = top_quad();
        assert_eq!(part.index(5).unwrap(), 3);
        assert_eq!(part.normal(3).unwrap(), Vector3::unit_y());
        assert!(matches!(
            part.vertex(4),
            Err(MeshPartError::OutOfBounds {
                kind: "vertex",
                index: 4,
                len: 4
            })
        ));
        assert!(part.tex_coord(10).is_err());
        assert!(part.index(6).is_err());
    }

    #[test]
    fn construction_validates_lengths_and_indices() {
        let mismatched = BlockMeshPart::new(
            &[Vector3::new(0.0, 0.0, 0.0); 3],
            &[Vector3::unit_y(); 2],
            &[Vector2::new(0.0, 0.0); 3],
            &[0, 1, 2],
        );
        assert!(matches!(
            mismatched,
            Err(MeshPartError::LengthMismatch {
                vertices: 3,
                normals: 2,
                tex_coords: 3
            })
        ));

        let dangling = BlockMeshPart::new(
            &[Vector3::new(0.0, 0.0, 0.0); 3],
            &[Vector3::unit_y(); 3],
            &[Vector2::new(0.0, 0.0); 3],
            &[0, 1, 3],
        );
        assert!(matches!(
            dangling,
            Err(MeshPartError::IndexOutOfRange { index: 3, size: 3 })
        ));
    }

    #[test]
    fn map_tex_coords_insets_by_border() {
        let mapped = top_quad().map_tex_coords(Vector2::new(0.0, 0.0), 1.0, 1);
        let low = mapped.tex_coord(0).unwrap();
        let high = mapped.tex_coord(2).unwrap();
        assert!((low - Vector2::new(BORDER, BORDER)).magnitude() < EPSILON);
        assert!((high - Vector2::new(1.0 - BORDER, 1.0 - BORDER)).magnitude() < EPSILON);
    }

    #[test]
    fn map_tex_coords_scales_into_tile() {
        let width = 0.25;
        let offset = Vector2::new(0.5, 0.75);
        let mapped = top_quad().map_tex_coords(offset, width, 4);
        let border = BORDER * width;

        let corner = mapped.tex_coord(1).unwrap();
        assert!((corner.x - (0.5 + width - border)).abs() < EPSILON);
        assert!((corner.y - (0.75 + border)).abs() < EPSILON);
        assert_eq!(mapped.tex_frames(), 4);
    }

    #[test]
    fn map_tex_coords_is_pure() {
        let part = top_quad();
        let a = part.map_tex_coords(Vector2::new(0.125, 0.0), 0.0625, 2);
        let b = part.map_tex_coords(Vector2::new(0.125, 0.0), 0.0625, 2);

        for (x, y) in a.tex_coords().iter().zip(b.tex_coords()) {
            assert!((*x - *y).magnitude() < EPSILON);
        }
        assert_eq!(part.tex_coord(2).unwrap(), Vector2::new(1.0, 1.0));
        assert_eq!(part.tex_frames(), 1);
        assert_eq!(a.vertices(), part.vertices());
        assert_eq!(a.indices(), part.indices());
    }

    #[test]
    fn identity_rotation_is_a_no_op() {
        let part = top_quad();
        let rotated = part.rotate(Quaternion::new(1.0, 0.0, 0.0, 0.0));

        for i in 0..part.size() {
            assert!((rotated.vertex(i).unwrap() - part.vertex(i).unwrap()).magnitude() < EPSILON);
            assert!((rotated.normal(i).unwrap() - part.normal(i).unwrap()).magnitude() < EPSILON);
        }
    }

    #[test]
    fn rotation_keeps_counts_and_unit_normals() {
        let part = triangle();
        let rotation = Quaternion::from_angle_y(Deg(90.0)) * Quaternion::from_angle_x(Deg(30.0));
        let rotated = part.rotate(rotation);

        assert_eq!(rotated.size(), part.size());
        assert_eq!(rotated.indices(), part.indices());
        assert_eq!(rotated.tex_frames(), part.tex_frames());
        for normal in rotated.normals() {
            assert!((normal.magnitude() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn quarter_turn_moves_vertices() {
        let rotated = triangle().rotate(Quaternion::from_angle_y(Deg(90.0)));
        // +X rotates onto -Z around the Y axis
        let moved = rotated.vertex(1).unwrap();
        assert!((moved - Vector3::new(0.0, 0.0, -1.0)).magnitude() < 1e-5);
    }

    #[test]
    fn append_to_empty_buffer() {
        let part = top_quad().map_tex_coords(Vector2::new(0.0, 0.0), 0.5, 3);
        let mut chunk = ChunkMesh::new();
        part.append_to(
            &mut chunk,
            0,
            0,
            0,
            RenderType::Opaque,
            ChunkVertexFlag::ColorMask,
        );

        let elements = chunk.vertex_elements(RenderType::Opaque);
        assert_eq!(elements.vertex_count as usize, part.size());
        assert_eq!(elements.indices, part.indices());
        assert_eq!(elements.flags, vec![ChunkVertexFlag::ColorMask.value(); 4]);
        assert_eq!(elements.frames, vec![3; 4]);
        assert_eq!(elements.color, OPAQUE_WHITE.repeat(4));
        assert_eq!(elements.tex.len(), 8);
        assert_eq!(&elements.vertices[3..6], &[1.0, 1.0, 0.0]);
        assert_eq!(&elements.normals[0..3], &[0.0, 1.0, 0.0]);
        assert!(chunk.vertex_elements(RenderType::Translucent).is_empty());
    }

    #[test]
    fn append_to_translates_vertices() {
        let mut chunk = ChunkMesh::new();
        top_quad().append_to(
            &mut chunk,
            3,
            -2,
            7,
            RenderType::Billboard,
            ChunkVertexFlag::Normal,
        );

        let elements = chunk.vertex_elements(RenderType::Billboard);
        assert_eq!(&elements.vertices[6..9], &[4.0, -1.0, 8.0]);
    }

    #[test]
    fn second_append_shifts_indices() {
        let first = top_quad();
        let second = triangle();
        let mut chunk = ChunkMesh::new();
        first.append_to(&mut chunk, 0, 0, 0, RenderType::Opaque, ChunkVertexFlag::Normal);
        second.append_to(&mut chunk, 1, 0, 0, RenderType::Opaque, ChunkVertexFlag::Water);

        let elements = chunk.vertex_elements(RenderType::Opaque);
        assert_eq!(elements.vertex_count, 7);
        assert_eq!(&elements.indices[first.indices_size()..], &[4, 6, 5]);
        assert!(elements
            .indices
            .iter()
            .all(|&i| i < elements.vertex_count));
        assert_eq!(elements.flags[4..], [ChunkVertexFlag::Water.value(); 3]);
    }
}
