//! Cuboid (rectangular prism) mesh generation

use glam::Vec3;

use super::quad::build_quad;
use crate::constants::{CUBOID_INDEX_COUNT, CUBOID_VERTEX_COUNT};
use crate::mesh::{MeshBuffers, MeshCursor, MeshError, Vertex};

/// Face of an axis-aligned cuboid, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CuboidFace {
    PosX,
    NegX,
    NegY,
    PosY,
    PosZ,
    NegZ,
}

impl CuboidFace {
    /// All faces in the order they are written
    pub const ALL: [CuboidFace; 6] = [
        CuboidFace::PosX,
        CuboidFace::NegX,
        CuboidFace::NegY,
        CuboidFace::PosY,
        CuboidFace::PosZ,
        CuboidFace::NegZ,
    ];

    /// Corner labels (see [`cuboid_corners`]) as bottom-left, bottom-right,
    /// top-right, top-left
    pub fn corner_indices(self) -> [usize; 4] {
        match self {
            CuboidFace::PosX => [0, 1, 2, 3],
            CuboidFace::NegX => [5, 4, 7, 6],
            CuboidFace::NegY => [1, 5, 6, 2],
            CuboidFace::PosY => [4, 0, 3, 7],
            CuboidFace::PosZ => [6, 7, 3, 2],
            CuboidFace::NegZ => [1, 0, 4, 5],
        }
    }

    pub fn normal(self) -> Vec3 {
        match self {
            CuboidFace::PosX => Vec3::X,
            CuboidFace::NegX => Vec3::NEG_X,
            CuboidFace::NegY => Vec3::NEG_Y,
            CuboidFace::PosY => Vec3::Y,
            CuboidFace::PosZ => Vec3::Z,
            CuboidFace::NegZ => Vec3::NEG_Z,
        }
    }

    pub fn tangent(self) -> Vec3 {
        match self {
            CuboidFace::PosX => Vec3::Y,
            CuboidFace::NegX => Vec3::NEG_Y,
            CuboidFace::NegY => Vec3::X,
            CuboidFace::PosY => Vec3::NEG_X,
            CuboidFace::PosZ => Vec3::Y,
            CuboidFace::NegZ => Vec3::NEG_Y,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CuboidFace::PosX => "+X",
            CuboidFace::NegX => "-X",
            CuboidFace::NegY => "-Y",
            CuboidFace::PosY => "+Y",
            CuboidFace::PosZ => "+Z",
            CuboidFace::NegZ => "-Z",
        }
    }
}

/// The 8 corners of a box of full extents `size` centered at `offset`
///
/// p0..p3 lie on +X, p4..p7 on -X:
/// p0 (+y,-z), p1 (-y,-z), p2 (-y,+z), p3 (+y,+z), same pattern for p4..p7.
pub fn cuboid_corners(size: Vec3, offset: Vec3) -> [Vec3; 8] {
    let h = size / 2.0;
    [
        Vec3::new(h.x, h.y, -h.z),
        Vec3::new(h.x, -h.y, -h.z),
        Vec3::new(h.x, -h.y, h.z),
        Vec3::new(h.x, h.y, h.z),
        Vec3::new(-h.x, h.y, -h.z),
        Vec3::new(-h.x, -h.y, -h.z),
        Vec3::new(-h.x, -h.y, h.z),
        Vec3::new(-h.x, h.y, h.z),
    ]
    .map(|corner| corner + offset)
}

/// Write a full flat-shaded box into caller-owned buffers starting at slot 0
///
/// # Arguments
/// * `size` - full extents along X, Y, Z
/// * `offset` - box center in the parent's local space
///
/// Requires at least 24 vertex and 36 index slots; nothing is written otherwise.
pub fn build_cuboid(
    vertices: &mut [Vertex],
    indices: &mut [u32],
    size: Vec3,
    offset: Vec3,
) -> Result<(), MeshError> {
    MeshCursor::default()
        .ensure_room(
            vertices.len(),
            indices.len(),
            CUBOID_VERTEX_COUNT,
            CUBOID_INDEX_COUNT,
        )
        .inspect_err(|e| tracing::warn!("Cannot build cuboid: {}", e))?;

    let corners = cuboid_corners(size, offset);
    let mut cursor = MeshCursor::default();
    for face in CuboidFace::ALL {
        let quad = face.corner_indices().map(|i| corners[i]);
        cursor = build_quad(vertices, indices, quad, cursor, face.normal(), face.tangent())?;
    }
    debug_assert_eq!(
        cursor,
        MeshCursor::new(CUBOID_VERTEX_COUNT, CUBOID_INDEX_COUNT)
    );

    tracing::debug!(?size, ?offset, "Built cuboid");
    Ok(())
}

/// Generate a box into freshly owned buffers
///
/// # Returns
/// 24 vertices (4 per face), 12 triangles
pub fn generate_cuboid_mesh(size: Vec3, offset: Vec3) -> Result<MeshBuffers, MeshError> {
    let mut mesh = MeshBuffers::for_cuboid();
    let (vertices, indices) = mesh.as_slices_mut();
    build_cuboid(vertices, indices, size, offset)?;
    Ok(mesh)
}
