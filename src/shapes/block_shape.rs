//! Block shapes assembled from mesh parts.
//!
//! A [`BlockShape`] maps each [`BlockPart`] to the geometry drawn for it.
//! Shapes are either built in code ([`BlockShape::cube`]) or loaded from a JSON
//! definition:
//!
//! ```json
//! {
//!     "name": "slab",
//!     "parts": {
//!         "top": {
//!             "vertices": [[0, 0.5, 0], [1, 0.5, 0], [1, 0.5, 1], [0, 0.5, 1]],
//!             "normals": [[0, 1, 0], [0, 1, 0], [0, 1, 0], [0, 1, 0]],
//!             "texcoords": [[0, 0], [1, 0], [1, 1], [0, 1]],
//!             "indices": [0, 2, 1, 0, 3, 2]
//!         }
//!     }
//! }
//! ```

use std::collections::HashMap;

use cgmath::{Quaternion, Rotation, Vector2, Vector3};
use log::{debug, warn};
use serde::Deserialize;

use super::{block_mesh_part::BlockMeshPart, block_part::BlockPart};
use crate::{
    error::MeshPartError,
    rendering::{ChunkMesh, ChunkVertexFlag, RenderType},
};

#[derive(Deserialize)]
struct ShapeDefinition {
    name: String,
    #[serde(default)]
    parts: HashMap<BlockPart, MeshPartDefinition>,
}

#[derive(Deserialize)]
struct MeshPartDefinition {
    vertices: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    #[serde(rename = "texcoords")]
    tex_coords: Vec<[f32; 2]>,
    indices: Vec<u32>,
}

impl MeshPartDefinition {
    fn build(self) -> Result<BlockMeshPart, MeshPartError> {
        let vertices: Vec<Vector3<f32>> = self.vertices.into_iter().map(Vector3::from).collect();
        let normals: Vec<Vector3<f32>> = self.normals.into_iter().map(Vector3::from).collect();
        let tex_coords: Vec<Vector2<f32>> =
            self.tex_coords.into_iter().map(Vector2::from).collect();
        BlockMeshPart::new(&vertices, &normals, &tex_coords, &self.indices)
    }
}

/// The geometry of a block, split into at most one mesh part per [`BlockPart`].
#[derive(Debug, Clone)]
pub struct BlockShape {
    /// Display name of the shape
    pub name: String,
    parts: HashMap<BlockPart, BlockMeshPart>,
}

impl BlockShape {
    /// Creates a shape with no geometry.
    pub fn new(name: impl Into<String>) -> Self {
        BlockShape {
            name: name.into(),
            parts: HashMap::new(),
        }
    }

    /// Sets the geometry for `part`, replacing any previous geometry.
    pub fn with_part(mut self, part: BlockPart, mesh: BlockMeshPart) -> Self {
        self.parts.insert(part, mesh);
        self
    }

    /// Geometry for `part`, if the shape has any.
    pub fn mesh_part(&self, part: BlockPart) -> Option<&BlockMeshPart> {
        self.parts.get(&part)
    }

    /// Iterates the shape's parts, center first and then in side order.
    pub fn parts(&self) -> impl Iterator<Item = (BlockPart, &BlockMeshPart)> {
        BlockPart::all()
            .into_iter()
            .filter_map(|part| self.parts.get(&part).map(|mesh| (part, mesh)))
    }

    /// A unit cube centered on the origin, with one quad per side and no
    /// center geometry.
    ///
    /// Each quad has outward facing normals, counter-clockwise winding when
    /// seen from outside, and texture coordinates covering `0..1`.
    pub fn cube() -> Result<Self, MeshPartError> {
        let mut shape = BlockShape::new("cube");
        for side in BlockPart::sides() {
            let normal = side.direction();
            let (u, v) = face_axes(side);
            let center = normal * 0.5;
            let corners: [(f32, f32); 4] = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];

            let vertices: Vec<Vector3<f32>> = corners
                .iter()
                .map(|&(s, t)| center + u * (s - 0.5) + v * (t - 0.5))
                .collect();
            let tex_coords: Vec<Vector2<f32>> = corners
                .iter()
                .map(|&(s, t)| Vector2::new(s, 1.0 - t))
                .collect();

            let part =
                BlockMeshPart::new(&vertices, &[normal; 4], &tex_coords, &[0, 1, 2, 0, 2, 3])?;
            shape.parts.insert(side, part);
        }
        Ok(shape)
    }

    /// Parses a shape from its JSON definition.
    ///
    /// # Errors
    /// Returns [`MeshPartError::Json`] for malformed JSON and the
    /// [`BlockMeshPart::new`] validation errors for inconsistent part geometry.
    pub fn from_json(json: &str) -> Result<Self, MeshPartError> {
        let definition: ShapeDefinition = serde_json::from_str(json)?;
        let mut shape = BlockShape::new(definition.name);
        for (part, mesh) in definition.parts {
            shape.parts.insert(part, mesh.build()?);
        }
        debug!(
            "Loaded block shape '{}' with {} parts",
            shape.name,
            shape.parts.len()
        );
        Ok(shape)
    }

    /// Rotates every part of the shape.
    ///
    /// Side parts are moved to the side their outward direction points to
    /// after rotation. Only axis aligned rotations keep every side distinct;
    /// if two sides land on the same face the later one in side order wins.
    pub fn rotate(&self, rotation: Quaternion<f32>) -> Self {
        let mut rotated = BlockShape::new(self.name.clone());
        for (part, mesh) in self.parts() {
            let target = if part.is_side() {
                BlockPart::from_direction(rotation.rotate_vector(part.direction()))
            } else {
                BlockPart::Center
            };
            if rotated.parts.insert(target, mesh.rotate(rotation)).is_some() {
                warn!(
                    "Rotating shape '{}' folded {:?} onto an occupied {:?} side",
                    self.name, part, target
                );
            }
        }
        debug!("Rotated block shape '{}'", self.name);
        rotated
    }

    /// Maps every part onto the same atlas tile.
    ///
    /// See [`BlockMeshPart::map_tex_coords`].
    pub fn map_tex_coords(&self, offset: Vector2<f32>, width: f32, frames: u32) -> Self {
        BlockShape {
            name: self.name.clone(),
            parts: self
                .parts
                .iter()
                .map(|(&part, mesh)| (part, mesh.map_tex_coords(offset, width, frames)))
                .collect(),
        }
    }

    /// Appends the shape's visible geometry to a chunk mesh.
    ///
    /// The center part is always appended. Side parts are appended only when
    /// `visible` returns `true` for them, which lets the caller cull faces
    /// hidden by neighbouring blocks.
    #[allow(clippy::too_many_arguments)]
    pub fn append_to(
        &self,
        chunk: &mut ChunkMesh,
        offset_x: i32,
        offset_y: i32,
        offset_z: i32,
        render_type: RenderType,
        flags: ChunkVertexFlag,
        visible: impl Fn(BlockPart) -> bool,
    ) {
        for (part, mesh) in self.parts() {
            if !part.is_side() || visible(part) {
                mesh.append_to(chunk, offset_x, offset_y, offset_z, render_type, flags);
            }
        }
    }
}

/// In-plane axes of a cube face, chosen so that `u × v` is the outward normal.
fn face_axes(side: BlockPart) -> (Vector3<f32>, Vector3<f32>) {
    let x = Vector3::unit_x();
    let y = Vector3::unit_y();
    let z = Vector3::unit_z();
    match side {
        BlockPart::Top => (x, -z),
        BlockPart::Bottom => (x, z),
        BlockPart::Right => (-z, y),
        BlockPart::Left => (z, y),
        BlockPart::Back => (x, y),
        BlockPart::Front => (-x, y),
        BlockPart::Center => (x, y),
    }
}
