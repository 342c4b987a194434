//! Mesh buffers, vertex layout and write cursors

mod bounds;
mod normals;

use std::fmt;

use crate::constants::{CUBOID_INDEX_COUNT, CUBOID_VERTEX_COUNT};

pub use bounds::BoundingBox;
pub use normals::{calculate_face_normals, calculate_triangle_normal};

/// Vertex for flat-shaded procedural meshes.
///
/// Plain `f32` arrays keep the layout `Pod` so a renderer can upload a
/// vertex slice with `bytemuck::cast_slice` directly.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Vertex position in the parent's local space.
    pub position: [f32; 3],
    /// Texture coordinate (upper-left origin).
    pub uv: [f32; 2],
    /// Face normal, shared by every vertex of the face.
    pub normal: [f32; 3],
    /// Face tangent, shared by every vertex of the face.
    pub tangent: [f32; 3],
}

/// Next free slot in a vertex buffer and an index buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeshCursor {
    pub vertex: usize,
    pub index: usize,
}

impl MeshCursor {
    pub fn new(vertex: usize, index: usize) -> Self {
        Self { vertex, index }
    }

    /// Cursor moved past `vertices` and `indices` written slots
    pub fn advance(self, vertices: usize, indices: usize) -> Self {
        Self {
            vertex: self.vertex + vertices,
            index: self.index + indices,
        }
    }

    /// Check that `vertices` and `indices` more slots fit behind this cursor
    pub fn ensure_room(
        &self,
        vertex_len: usize,
        index_len: usize,
        vertices: usize,
        indices: usize,
    ) -> Result<(), MeshError> {
        check_room(BufferKind::Vertex, self.vertex, vertices, vertex_len)?;
        check_room(BufferKind::Index, self.index, indices, index_len)
    }
}

fn check_room(
    buffer: BufferKind,
    start: usize,
    count: usize,
    available: usize,
) -> Result<(), MeshError> {
    match start.checked_add(count) {
        Some(required) if required <= available => Ok(()),
        required => Err(MeshError::Capacity {
            buffer,
            required: required.unwrap_or(usize::MAX),
            available,
        }),
    }
}

/// Owned vertex and index storage for one mesh section
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Zero-filled buffers holding exactly `vertex_count` vertices and `index_count` indices
    pub fn with_len(vertex_count: usize, index_count: usize) -> Self {
        Self {
            vertices: vec![Vertex::default(); vertex_count],
            indices: vec![0; index_count],
        }
    }

    /// Buffers sized for one cuboid (24 vertices, 36 indices)
    pub fn for_cuboid() -> Self {
        Self::with_len(CUBOID_VERTEX_COUNT, CUBOID_INDEX_COUNT)
    }

    /// Split borrow for the slice-writing builders
    pub fn as_slices_mut(&mut self) -> (&mut [Vertex], &mut [u32]) {
        (&mut self.vertices, &mut self.indices)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex positions as flat arrays
    pub fn positions(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.vertices.iter().map(|v| v.position)
    }

    /// Bounding box of all vertex positions
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_points(self.positions().map(glam::Vec3::from_array))
    }
}

/// Which of the two buffers a write targeted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    Vertex,
    Index,
}

impl fmt::Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferKind::Vertex => f.write_str("vertex"),
            BufferKind::Index => f.write_str("index"),
        }
    }
}

/// Mesh construction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    #[error("{buffer} buffer too small: need {required} slots, have {available}")]
    Capacity {
        buffer: BufferKind,
        required: usize,
        available: usize,
    },
    #[error("vertex offset {base} does not fit in a u32 index")]
    IndexOverflow { base: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 11 * std::mem::size_of::<f32>());
    }

    #[test]
    fn test_for_cuboid_sizes() {
        let mesh = MeshBuffers::for_cuboid();
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.index_count(), 36);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_cursor_advance() {
        let cursor = MeshCursor::default().advance(4, 6).advance(4, 6);
        assert_eq!(cursor, MeshCursor::new(8, 12));
    }

    #[test]
    fn test_ensure_room_exact_fit() {
        let cursor = MeshCursor::new(20, 30);
        assert!(cursor.ensure_room(24, 36, 4, 6).is_ok());
    }

    #[test]
    fn test_ensure_room_reports_vertex_shortfall() {
        let cursor = MeshCursor::new(22, 0);
        let err = cursor.ensure_room(24, 36, 4, 6).unwrap_err();
        assert_eq!(
            err,
            MeshError::Capacity {
                buffer: BufferKind::Vertex,
                required: 26,
                available: 24,
            }
        );
    }

    #[test]
    fn test_ensure_room_reports_index_shortfall() {
        let cursor = MeshCursor::new(0, 33);
        let err = cursor.ensure_room(24, 36, 4, 6).unwrap_err();
        assert!(matches!(
            err,
            MeshError::Capacity {
                buffer: BufferKind::Index,
                required: 39,
                available: 36,
            }
        ));
        assert_eq!(err.to_string(), "index buffer too small: need 39 slots, have 36");
    }

    #[test]
    fn test_ensure_room_overflowing_offset() {
        let cursor = MeshCursor::new(usize::MAX, 0);
        assert!(cursor.ensure_room(24, 36, 4, 6).is_err());
    }
}
