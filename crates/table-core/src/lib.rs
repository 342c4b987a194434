//! Procedural Table Mesh Generation
//!
//! This crate builds flat-shaded geometry for a four-legged table:
//! - Mesh: vertex layout, owned buffers and write cursors
//! - Primitive: quad and cuboid builders writing into caller-owned buffers
//! - Table: tabletop and legs generated as separate mesh sections
//! - Config: RON parameter files
//!
//! Coordinates are left-handed with X forward, Y right and Z up.

pub mod config;
pub mod constants;
pub mod mesh;
pub mod primitive;
pub mod table;

pub use config::*;
pub use constants::*;
pub use mesh::*;
pub use primitive::*;
pub use table::*;
