//! Table assembly: a tabletop cuboid plus four legs, one mesh section each

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    DEFAULT_LEG_SIZE, DEFAULT_TABLE_SIZE, LEG_DROP_PAD, LEG_DROP_SCALE, LEG_INSET,
    TABLE_SECTION_COUNT,
};
use crate::mesh::{BoundingBox, MeshBuffers, MeshError, Vertex};
use crate::primitive::build_cuboid;

/// Opaque shading resource handle, passed through to every section untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialHandle(pub Uuid);

impl MaterialHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MaterialHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Table dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableParams {
    /// Tabletop full extents (X, Y, Z)
    pub size: Vec3,
    /// Full extents of each leg
    pub leg_size: Vec3,
    /// Shading resource applied to every section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<MaterialHandle>,
}

impl Default for TableParams {
    fn default() -> Self {
        Self {
            size: Vec3::from_array(DEFAULT_TABLE_SIZE),
            leg_size: Vec3::from_array(DEFAULT_LEG_SIZE),
            material: None,
        }
    }
}

impl TableParams {
    pub fn new(size: Vec3, leg_size: Vec3) -> Self {
        Self {
            size,
            leg_size,
            material: None,
        }
    }

    pub fn with_material(mut self, material: MaterialHandle) -> Self {
        self.material = Some(material);
        self
    }

    /// Box descriptors in section order: tabletop, then the four legs
    pub fn cuboids(&self) -> [CuboidDesc; TABLE_SECTION_COUNT] {
        let [l1, l2, l3, l4] = leg_offsets(self.size);
        [
            CuboidDesc::new(self.size, Vec3::ZERO),
            CuboidDesc::new(self.leg_size, l1),
            CuboidDesc::new(self.leg_size, l2),
            CuboidDesc::new(self.leg_size, l3),
            CuboidDesc::new(self.leg_size, l4),
        ]
    }
}

/// Size and center of one box, consumed by a single build
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuboidDesc {
    pub size: Vec3,
    pub offset: Vec3,
}

impl CuboidDesc {
    pub fn new(size: Vec3, offset: Vec3) -> Self {
        Self { size, offset }
    }
}

/// Leg centers derived from the tabletop size
///
/// Legs sit inset from each corner and are dropped below the tabletop by a
/// multiple of its thickness. Order: (+x,+y), (-x,+y), (+x,-y), (-x,-y).
pub fn leg_offsets(table_size: Vec3) -> [Vec3; 4] {
    let dx = table_size.x / 2.0 - LEG_INSET;
    let dy = table_size.y / 2.0 - LEG_INSET;
    let dz = table_size.z * LEG_DROP_SCALE + LEG_DROP_PAD;
    [
        Vec3::new(dx, dy, -dz),
        Vec3::new(-dx, dy, -dz),
        Vec3::new(dx, -dy, -dz),
        Vec3::new(-dx, -dy, -dz),
    ]
}

/// One independently rendered cuboid
#[derive(Debug, Clone, PartialEq)]
pub struct MeshSection {
    pub index: u32,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub bounds: BoundingBox,
    pub material: Option<MaterialHandle>,
}

impl MeshSection {
    fn from_buffers(index: u32, buffers: &MeshBuffers, material: Option<MaterialHandle>) -> Self {
        Self {
            index,
            vertices: buffers.vertices.clone(),
            indices: buffers.indices.clone(),
            bounds: buffers.bounds(),
            material,
        }
    }
}

/// Generated table geometry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableMesh {
    pub sections: Vec<MeshSection>,
}

impl TableMesh {
    pub fn section(&self, index: u32) -> Option<&MeshSection> {
        self.sections.iter().find(|s| s.index == index)
    }

    pub fn vertex_count(&self) -> usize {
        self.sections.iter().map(|s| s.vertices.len()).sum()
    }

    pub fn index_count(&self) -> usize {
        self.sections.iter().map(|s| s.indices.len()).sum()
    }

    /// Bounds enclosing every section
    pub fn bounds(&self) -> BoundingBox {
        self.sections
            .iter()
            .fold(BoundingBox::empty(), |acc, s| acc.union(&s.bounds))
    }

    pub fn clear(&mut self) {
        self.sections.clear();
    }
}

/// Regenerates table meshes on demand
///
/// The scratch buffers are sized for one cuboid once and reused for every
/// section of every regeneration.
#[derive(Debug, Clone)]
pub struct TableBuilder {
    scratch: MeshBuffers,
    mesh: TableMesh,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            scratch: MeshBuffers::for_cuboid(),
            mesh: TableMesh::default(),
        }
    }

    /// Drop all previous sections and rebuild them from `params`
    pub fn regenerate(&mut self, params: &TableParams) -> Result<&TableMesh, MeshError> {
        self.mesh.clear();
        for (index, cuboid) in (0u32..).zip(params.cuboids()) {
            let (vertices, indices) = self.scratch.as_slices_mut();
            build_cuboid(vertices, indices, cuboid.size, cuboid.offset)?;
            self.mesh
                .sections
                .push(MeshSection::from_buffers(index, &self.scratch, params.material));
        }

        tracing::info!(
            "Regenerated table: {} sections, {} vertices, {} indices",
            self.mesh.sections.len(),
            self.mesh.vertex_count(),
            self.mesh.index_count()
        );
        Ok(&self.mesh)
    }

    /// Most recently generated mesh
    pub fn mesh(&self) -> &TableMesh {
        &self.mesh
    }

    pub fn into_mesh(self) -> TableMesh {
        self.mesh
    }
}

/// Generate a complete table in one call
pub fn generate_table_mesh(params: &TableParams) -> Result<TableMesh, MeshError> {
    let mut builder = TableBuilder::new();
    builder.regenerate(params)?;
    Ok(builder.into_mesh())
}
