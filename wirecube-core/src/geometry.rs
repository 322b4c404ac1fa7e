/// Cube geometry: corner vertices and the fixed edge list
use nalgebra::{Point3, Vector3};

/// A cube corner in 3D space
pub type Vertex = Point3<f64>;

/// Number of cube corners
pub const VERTEX_COUNT: usize = 8;

/// An edge is a pair of indices into the vertex array
pub type Edge = (usize, usize);

/// The twelve visible cube edges
pub const CUBE_EDGES: [Edge; 12] = [
    // bottom face
    (0, 1),
    (1, 3),
    (3, 2),
    (2, 0),
    // top face
    (4, 5),
    (5, 7),
    (7, 6),
    (6, 4),
    // verticals
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Eight corners of an axis-aligned cube, mutated in place by rotations
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    vertices: [Vertex; VERTEX_COUNT],
}

impl Cube {
    /// Build the cube spanning `[min, max]` on every axis.
    ///
    /// Bit 1 of the index selects x, bit 0 selects y and bit 2 selects z,
    /// so vertex 0 is `(min, min, min)` and vertex 7 is `(max, max, max)`.
    pub fn new(min: f64, max: f64) -> Self {
        let pick = |index: usize, bit: usize| if index & (1 << bit) != 0 { max } else { min };
        let vertices = std::array::from_fn(|i| Point3::new(pick(i, 1), pick(i, 0), pick(i, 2)));
        Self { vertices }
    }

    pub fn from_vertices(vertices: [Vertex; VERTEX_COUNT]) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Vertex; VERTEX_COUNT] {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut [Vertex; VERTEX_COUNT] {
        &mut self.vertices
    }

    /// Arithmetic mean of all corners
    pub fn centroid(&self) -> Vertex {
        centroid(&self.vertices)
    }

    /// Iterate the twelve edges as pairs of endpoints
    pub fn edge_endpoints(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        CUBE_EDGES
            .iter()
            .map(move |&(a, b)| (self.vertices[a], self.vertices[b]))
    }
}

/// Arithmetic mean of a set of points
pub fn centroid(points: &[Vertex]) -> Vertex {
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Point3::from(sum / points.len() as f64)
}
