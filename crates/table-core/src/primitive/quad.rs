//! Single flat-shaded quad emission

use glam::Vec3;

use crate::constants::{QUAD_INDEX_COUNT, QUAD_TRIANGLES, QUAD_UVS, QUAD_VERTEX_COUNT};
use crate::mesh::{MeshCursor, MeshError, Vertex};

/// Write one quad into caller-owned buffers at `cursor`
///
/// # Arguments
/// * `corners` - [bottom_left, bottom_right, top_right, top_left], counter-clockwise
///   as seen from the side `normal` points to
/// * `cursor` - next free vertex and index slots
/// * `normal`, `tangent` - shared by all four vertices
///
/// # Returns
/// The cursor advanced past the 4 vertices and 6 indices written. Nothing is
/// written if either buffer lacks room.
pub fn build_quad(
    vertices: &mut [Vertex],
    indices: &mut [u32],
    corners: [Vec3; 4],
    cursor: MeshCursor,
    normal: Vec3,
    tangent: Vec3,
) -> Result<MeshCursor, MeshError> {
    cursor.ensure_room(
        vertices.len(),
        indices.len(),
        QUAD_VERTEX_COUNT,
        QUAD_INDEX_COUNT,
    )?;
    // Highest index written is base + 3
    let base = u32::try_from(cursor.vertex + QUAD_VERTEX_COUNT - 1)
        .map(|_| cursor.vertex as u32)
        .map_err(|_| MeshError::IndexOverflow {
            base: cursor.vertex,
        })?;

    let normal = normal.to_array();
    let tangent = tangent.to_array();
    let slots = &mut vertices[cursor.vertex..cursor.vertex + QUAD_VERTEX_COUNT];
    for ((slot, corner), uv) in slots.iter_mut().zip(corners).zip(QUAD_UVS) {
        *slot = Vertex {
            position: corner.to_array(),
            uv,
            normal,
            tangent,
        };
    }

    indices[cursor.index..cursor.index + QUAD_INDEX_COUNT]
        .copy_from_slice(&QUAD_TRIANGLES.map(|local| base + local));

    Ok(cursor.advance(QUAD_VERTEX_COUNT, QUAD_INDEX_COUNT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{BufferKind, MeshBuffers};

    const CORNERS: [Vec3; 4] = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
        Vec3::new(0.0, 2.0, 1.0),
        Vec3::new(0.0, 0.0, 1.0),
    ];

    #[test]
    fn test_quad_writes_vertices() {
        let mut mesh = MeshBuffers::with_len(4, 6);
        let (v, i) = mesh.as_slices_mut();
        let cursor = build_quad(v, i, CORNERS, MeshCursor::default(), Vec3::NEG_X, Vec3::Y).unwrap();
        assert_eq!(cursor, MeshCursor::new(4, 6));

        let positions: Vec<[f32; 3]> = mesh.positions().collect();
        assert_eq!(positions, CORNERS.map(|c| c.to_array()).to_vec());
        for v in &mesh.vertices {
            assert_eq!(v.normal, [-1.0, 0.0, 0.0]);
            assert_eq!(v.tangent, [0.0, 1.0, 0.0]);
        }
        let uvs: Vec<[f32; 2]> = mesh.vertices.iter().map(|v| v.uv).collect();
        assert_eq!(uvs, vec![[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]]);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_quad_at_offset() {
        let mut mesh = MeshBuffers::with_len(12, 18);
        let (v, i) = mesh.as_slices_mut();
        let cursor = build_quad(v, i, CORNERS, MeshCursor::new(8, 12), Vec3::X, Vec3::Y).unwrap();
        assert_eq!(cursor, MeshCursor::new(12, 18));
        assert_eq!(&mesh.indices[12..], &[8, 9, 10, 8, 10, 11]);
        // Slots before the cursor stay untouched
        assert!(mesh.indices[..12].iter().all(|&i| i == 0));
        assert!(mesh.vertices[..8].iter().all(|v| *v == Vertex::default()));
    }

    #[test]
    fn test_consecutive_quads_accumulate() {
        let mut mesh = MeshBuffers::with_len(8, 12);
        let (v, i) = mesh.as_slices_mut();
        let cursor = build_quad(v, i, CORNERS, MeshCursor::default(), Vec3::X, Vec3::Y).unwrap();
        let cursor = build_quad(v, i, CORNERS, cursor, Vec3::Z, Vec3::Y).unwrap();
        assert_eq!(cursor, MeshCursor::new(8, 12));
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7]);
        assert_eq!(mesh.vertices[3].normal, [1.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices[4].normal, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_quad_without_room_writes_nothing() {
        let mut mesh = MeshBuffers::with_len(4, 5);
        let (v, i) = mesh.as_slices_mut();
        let err = build_quad(v, i, CORNERS, MeshCursor::default(), Vec3::X, Vec3::Y).unwrap_err();
        assert!(matches!(
            err,
            MeshError::Capacity {
                buffer: BufferKind::Index,
                ..
            }
        ));
        assert_eq!(mesh, MeshBuffers::with_len(4, 5));
    }
}
