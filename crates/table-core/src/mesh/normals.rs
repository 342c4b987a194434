//! Winding normals for mesh data
//!
//! Coordinates are left-handed (X forward, Y right, Z up). A triangle whose
//! corners run counter-clockwise when viewed from outside gets an outward
//! normal from these helpers.

use glam::Vec3;

use super::Vertex;

/// Calculate the winding normal for a single triangle
pub fn calculate_triangle_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v2 - v0)
        .cross(v1 - v0)
        .try_normalize()
        .unwrap_or(Vec3::Z)
}

/// Calculate one winding normal per triangle
///
/// Trailing indices that do not form a full triangle, and triangles that
/// reference missing vertices, are skipped.
pub fn calculate_face_normals(vertices: &[Vertex], indices: &[u32]) -> Vec<Vec3> {
    indices
        .chunks_exact(3)
        .filter_map(|tri| {
            let corner = |i: u32| {
                vertices
                    .get(i as usize)
                    .map(|v| Vec3::from_array(v.position))
            };
            Some(calculate_triangle_normal(
                corner(tri[0])?,
                corner(tri[1])?,
                corner(tri[2])?,
            ))
        })
        .collect()
}
