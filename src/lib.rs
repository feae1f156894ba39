#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Block Shapes
//!
//! Block geometry for a voxel engine: reusable mesh parts, the shapes built
//! from them, and the chunk mesh buffers they are stamped into.
//!
//! ## Key Modules
//!
//! * `shapes` - Block mesh parts, block sides and block shapes
//! * `rendering` - Chunk mesh vertex buffers, vertex flags and the upload vertex format
//! * `error` - The error type shared by the crate
//!
//! ## Data Flow
//!
//! 1. A shape is built in code or loaded from a JSON definition
//! 2. Its parts are mapped onto a texture atlas tile and rotated to the block's orientation
//! 3. For each block in a chunk the visible parts are appended to the chunk mesh
//! 4. The chunk mesh buffers are interleaved into raw bytes for upload
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Native demo initialization
//! fn main() {
//!     voxel_block_shapes::run().unwrap();
//! }
//! ```

use cgmath::{Deg, Quaternion, Rotation3, Vector2};
use log::info;

pub mod error;
pub mod rendering;
pub mod shapes;

pub use error::MeshPartError;

use rendering::{ChunkMesh, ChunkVertexFlag, RenderType};
use shapes::{BlockPart, BlockShape};

/// Side length of the demo grid of blocks.
const DEMO_GRID: i32 = 4;

/// Number of tiles along one edge of the demo texture atlas.
const DEMO_ATLAS_TILES: u32 = 16;

/// Initializes `env_logger`, writing to stdout and filtered by `RUST_LOG`.
pub fn init_logger() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");
}

/// Builds a small grid of rotated cubes into a chunk mesh and logs the result.
///
/// Faces shared by two blocks of the grid are culled.
pub fn run() -> Result<(), MeshPartError> {
    init_logger();

    let tile_width = 1.0 / DEMO_ATLAS_TILES as f32;
    let cube = BlockShape::cube()?;
    let grass = cube.map_tex_coords(Vector2::new(2.0 * tile_width, 0.0), tile_width, 1);
    let water = cube.map_tex_coords(Vector2::new(0.0, tile_width), tile_width, 8);

    let mut chunk = ChunkMesh::new();
    for x in 0..DEMO_GRID {
        for z in 0..DEMO_GRID {
            let rotation = Quaternion::from_angle_y(Deg(90.0 * ((x + z) % 4) as f32));
            let inside = |dx: i32, dz: i32| {
                (0..DEMO_GRID).contains(&(x + dx)) && (0..DEMO_GRID).contains(&(z + dz))
            };
            let visible = |side: BlockPart| {
                let d = side.direction();
                side == BlockPart::Top
                    || side == BlockPart::Bottom
                    || !inside(d.x as i32, d.z as i32)
            };
            grass.rotate(rotation).append_to(
                &mut chunk,
                x,
                0,
                z,
                RenderType::Opaque,
                ChunkVertexFlag::ColorMask,
                visible,
            );
        }
    }

    water.append_to(
        &mut chunk,
        0,
        1,
        0,
        RenderType::WaterAndIce,
        ChunkVertexFlag::WaterSurface,
        |side| side == BlockPart::Top,
    );

    for render_type in RenderType::all() {
        let elements = chunk.vertex_elements(render_type);
        if !elements.is_empty() {
            info!(
                "{:?}: {} vertices, {} indices, {} bytes of vertex data",
                render_type,
                elements.vertex_count,
                elements.index_count(),
                elements.vertex_bytes().len()
            );
        }
    }
    info!(
        "Chunk mesh holds {} vertices in {} triangles",
        chunk.vertex_count(),
        chunk.triangle_count()
    );

    Ok(())
}
