//! Procedural primitive mesh generation
//!
//! Every face is its own quad with 4 unshared vertices, so normals and
//! tangents stay flat per face:
//! - Quad (two triangles over 4 corners)
//! - Cuboid (6 quads around an axis-aligned box)

mod cuboid;
mod quad;

pub use cuboid::{CuboidFace, build_cuboid, cuboid_corners, generate_cuboid_mesh};
pub use quad::build_quad;
