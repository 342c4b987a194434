//! Global constants for table-core

/// Vertices emitted per quad (one per corner, never shared)
pub const QUAD_VERTEX_COUNT: usize = 4;

/// Indices emitted per quad (2 triangles, 3 indices each)
pub const QUAD_INDEX_COUNT: usize = 6;

/// Quad-local triangle list: 0-1-2 then 0-2-3
pub const QUAD_TRIANGLES: [u32; QUAD_INDEX_COUNT] = [0, 1, 2, 0, 2, 3];

/// UVs for bottom-left, bottom-right, top-right, top-left (upper-left origin)
pub const QUAD_UVS: [[f32; 2]; QUAD_VERTEX_COUNT] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

/// Faces on a cuboid
pub const CUBOID_FACE_COUNT: usize = 6;

/// Vertices per cuboid (6 sides, 4 verts each)
pub const CUBOID_VERTEX_COUNT: usize = CUBOID_FACE_COUNT * QUAD_VERTEX_COUNT;

/// Indices per cuboid (2 triangles per side, 3 indices each)
pub const CUBOID_INDEX_COUNT: usize = CUBOID_FACE_COUNT * QUAD_INDEX_COUNT;

/// Number of legs under the tabletop
pub const TABLE_LEG_COUNT: usize = 4;

/// Mesh sections per table (tabletop + legs)
pub const TABLE_SECTION_COUNT: usize = 1 + TABLE_LEG_COUNT;

/// Distance legs are pulled in from the tabletop edge on X and Y
pub const LEG_INSET: f32 = 2.5;

/// Tabletop thickness multiplier for the leg center drop
pub const LEG_DROP_SCALE: f32 = 5.0;

/// Fixed padding added to the leg center drop
pub const LEG_DROP_PAD: f32 = 2.5;

/// Default tabletop size (X, Y, Z)
pub const DEFAULT_TABLE_SIZE: [f32; 3] = [100.0, 100.0, 5.0];

/// Default leg size (X, Y, Z)
pub const DEFAULT_LEG_SIZE: [f32; 3] = [5.0, 5.0, 50.0];
