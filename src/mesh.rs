//! Triangle-strip mesh over the point grid and its texture coordinates.
//!
//! Each of the 8 grid rows becomes a strip of 20 vertices: the two leading
//! points, two per cell, and two repeats that join the row to the next one
//! through zero-area triangles. The whole mesh is therefore drawn with a
//! single `TRIANGLE_STRIP` call.

use bytemuck::{Pod, Zeroable};

use crate::grid::{Grid, Point, GRID_SIDE};

/// Cells per grid side.
pub const CELLS: usize = GRID_SIDE - 1;
/// Vertices emitted per row strip.
pub const VERTICES_PER_ROW: usize = 2 + 2 * CELLS + 2;
/// Vertices in the full mesh.
pub const VERTEX_COUNT: usize = VERTICES_PER_ROW * CELLS;

/// GPU vertex layout: 5 floats, 20 byte stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub texel: [f32; 2],
    pub offset: f32,
}

impl Vertex {
    pub const STRIDE: i32 = std::mem::size_of::<Vertex>() as i32;
    pub const POSITION_OFFSET: i32 = 0;
    pub const TEXEL_OFFSET: i32 = 8;
    pub const OFFSET_OFFSET: i32 = 16;

    fn untextured(p: Point) -> Self {
        Self {
            position: [p.x, p.y],
            texel: [0.0; 2],
            offset: p.offset,
        }
    }
}

/// How texture coordinates are derived from a vertex position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TexelMapping {
    /// `s` from x, `t` from y. What the demo has always rendered.
    #[default]
    Planar,
    /// `s` and `t` both from x, so the texture never varies vertically.
    Horizontal,
}

impl TexelMapping {
    /// Texel for a position, confined to one quadrant (`[0, 0.5]^2`) of a
    /// 2x2 atlas. The per-frame shift picks the quadrant actually sampled.
    pub fn texel(self, [x, y]: [f32; 2]) -> [f32; 2] {
        let u = x / 2.0 + 0.5;
        let v = match self {
            TexelMapping::Planar => 1.0 - (y / 2.0 + 0.5),
            TexelMapping::Horizontal => 1.0 - u,
        };
        [u / 2.0, v / 2.0]
    }
}

/// Strip geometry whose texels have not been assigned yet. Not uploadable.
#[derive(Debug, Clone, PartialEq)]
pub struct UntexturedMesh {
    vertices: [Vertex; VERTEX_COUNT],
}

/// Fully built mesh, ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: [Vertex; VERTEX_COUNT],
}

/// Lays the grid out as one continuous triangle strip.
pub fn build_mesh(grid: &Grid) -> UntexturedMesh {
    let mut vertices = [Vertex::zeroed(); VERTEX_COUNT];
    let mut i = 0;
    let mut push = |p: Point| {
        vertices[i] = Vertex::untextured(p);
        i += 1;
    };

    for row in 0..CELLS {
        push(grid.point(row, 0));
        push(grid.point(row + 1, 0));

        for col in 0..CELLS {
            push(grid.point(row, col + 1));
            push(grid.point(row + 1, col + 1));
        }

        // Repeat the last vertex and the next row's first leading vertex.
        // The last row emits these too; they only produce zero-area triangles.
        push(grid.point(row + 1, CELLS));
        push(grid.point(row + 1, 0));
    }
    debug_assert_eq!(i, VERTEX_COUNT);

    UntexturedMesh { vertices }
}

impl UntexturedMesh {
    pub fn assign_texels(mut self, mapping: TexelMapping) -> Mesh {
        for v in self.vertices.iter_mut() {
            v.texel = mapping.texel(v.position);
        }
        Mesh {
            vertices: self.vertices,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

impl Mesh {
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes in upload order.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
