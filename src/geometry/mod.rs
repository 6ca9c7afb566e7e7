//! Mesh production: the shared buffer shape, parametric primitives, and
//! molecular buffer assembly.

pub mod assemble;
pub mod primitives;

/// Flat-array geometry shared by every mesh producer in this crate.
///
/// Four parallel arrays: positions and normals (3 floats per vertex),
/// optional per-vertex colors (3 floats per vertex), and a triangle index
/// list referencing all three by shared vertex index. The rendering
/// collaborator receives these as read-only byte views and owns GPU
/// upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffer {
    /// Vertex positions, `[x, y, z]` per vertex.
    pub positions: Vec<f32>,
    /// Vertex normals, `[x, y, z]` per vertex, parallel to `positions`.
    pub normals: Vec<f32>,
    /// Optional per-vertex colors, `[r, g, b]` per vertex.
    pub colors: Option<Vec<f32>>,
    /// Triangle indices, 3 per triangle, each `< vertex_count()`.
    pub indices: Vec<u32>,
}

impl MeshBuffer {
    /// Number of vertices held (position 3-tuples).
    #[must_use]
    pub fn vertex_count(&self) -> u32 {
        (self.positions.len() / 3) as u32
    }

    /// Number of triangles held.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the buffer holds no geometry at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.indices.is_empty()
    }

    /// Append a colorless submesh, broadcasting one color across all of
    /// its vertices and offsetting its indices by the running vertex
    /// count so both meshes share a single index space.
    pub fn append_colored(&mut self, submesh: &Self, color: [f32; 3]) {
        let base_vertex = self.vertex_count();
        self.positions.extend_from_slice(&submesh.positions);
        self.normals.extend_from_slice(&submesh.normals);
        let colors = self.colors.get_or_insert_with(Vec::new);
        for _ in 0..submesh.vertex_count() {
            colors.extend_from_slice(&color);
        }
        self.indices
            .extend(submesh.indices.iter().map(|&idx| idx + base_vertex));
    }

    /// Raw byte view of the position array for GPU upload.
    #[must_use]
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Raw byte view of the normal array for GPU upload.
    #[must_use]
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Raw byte view of the color array, if colors are present.
    #[must_use]
    pub fn color_bytes(&self) -> Option<&[u8]> {
        self.colors.as_deref().map(bytemuck::cast_slice)
    }

    /// Raw byte view of the index array for GPU upload.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Check the parallel-array and index-range invariants. Intended for
    /// debug assertions and tests, not hot paths.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let vertex_count = self.vertex_count();
        if self.positions.len() % 3 != 0 || self.normals.len() != self.positions.len() {
            return false;
        }
        if let Some(colors) = &self.colors {
            if colors.len() != self.positions.len() {
                return false;
            }
        }
        self.indices.len() % 3 == 0 && self.indices.iter().all(|&idx| idx < vertex_count)
    }
}
