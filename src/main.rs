//! # Voxel Block Shapes Demo Entry Point
//!
//! Runs the library's `run()` demo, which assembles a few blocks into a chunk
//! mesh and logs the buffer sizes.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --release
//! ```

fn main() {
    if let Err(err) = voxel_block_shapes::run() {
        log::error!("Demo failed: {}", err);
        std::process::exit(1);
    }
}
