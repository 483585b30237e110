//! Flat-shaded triangle geometry buffers
use nalgebra::{Point3, Vector3};

use crate::error::InvalidGeometry;

/// A 3D vertex with position and normal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
}

impl Vertex {
    pub fn new(x: f32, y: f32, z: f32, nx: f32, ny: f32, nz: f32) -> Self {
        Self {
            position: Point3::new(x, y, z),
            normal: Vector3::new(nx, ny, nz),
        }
    }

    pub fn with_normal(position: Point3<f32>, normal: Vector3<f32>) -> Self {
        Self { position, normal }
    }
}

/// A triangle face defined by three vertices
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// A triangle whose three vertices all carry the same normal
    pub fn flat(a: Point3<f32>, b: Point3<f32>, c: Point3<f32>, normal: Vector3<f32>) -> Self {
        Self::new(
            Vertex::with_normal(a, normal),
            Vertex::with_normal(b, normal),
            Vertex::with_normal(c, normal),
        )
    }

    /// Calculate the face normal from the triangle's vertices
    pub fn face_normal(&self) -> Vector3<f32> {
        face_normal(
            &self.vertices[0].position,
            &self.vertices[1].position,
            &self.vertices[2].position,
        )
    }

    pub fn centroid(&self) -> Point3<f32> {
        let sum = self.vertices[0].position.coords
            + self.vertices[1].position.coords
            + self.vertices[2].position.coords;
        Point3::from(sum / 3.0)
    }

    pub fn area(&self) -> f32 {
        self.edge_cross().norm() / 2.0
    }

    /// True when the three positions are collinear (or coincide).
    pub fn is_degenerate(&self) -> bool {
        let v0 = self.vertices[0].position;
        let edge1 = self.vertices[1].position - v0;
        let edge2 = self.vertices[2].position - v0;
        self.edge_cross().norm() <= f32::EPSILON * edge1.norm() * edge2.norm()
    }

    fn edge_cross(&self) -> Vector3<f32> {
        let v0 = self.vertices[0].position;
        (self.vertices[1].position - v0).cross(&(self.vertices[2].position - v0))
    }
}

/// Normalized `(b - a) x (c - a)`, or the zero vector for a degenerate triangle.
pub fn face_normal(a: &Point3<f32>, b: &Point3<f32>, c: &Point3<f32>) -> Vector3<f32> {
    (b - a)
        .cross(&(c - a))
        .try_normalize(0.0)
        .unwrap_or_else(Vector3::zeros)
}

/// Non-indexed triangle soup: three position floats and three normal floats per
/// vertex occurrence, three occurrences per triangle.
///
/// Vertices are never shared between triangles, so each triangle keeps its own
/// face normal and renders flat.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryBuffer {
    positions: Vec<f32>,
    normals: Vec<f32>,
}

impl GeometryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            positions: Vec::with_capacity(triangles * 9),
            normals: Vec::with_capacity(triangles * 9),
        }
    }

    /// Wrap an already expanded position array, deriving one face normal per
    /// triangle from its winding.
    pub fn from_positions(positions: Vec<f32>) -> Result<Self, InvalidGeometry> {
        if positions.len() % 3 != 0 {
            return Err(InvalidGeometry::VertexTableLength {
                len: positions.len(),
            });
        }
        if positions.len() % 9 != 0 {
            return Err(InvalidGeometry::IncompleteTriangle {
                vertex_count: positions.len() / 3,
            });
        }

        let mut normals = Vec::with_capacity(positions.len());
        for corners in positions.chunks_exact(9) {
            let a = Point3::new(corners[0], corners[1], corners[2]);
            let b = Point3::new(corners[3], corners[4], corners[5]);
            let c = Point3::new(corners[6], corners[7], corners[8]);
            let normal = face_normal(&a, &b, &c);
            for _ in 0..3 {
                normals.extend_from_slice(&[normal.x, normal.y, normal.z]);
            }
        }

        Ok(Self { positions, normals })
    }

    pub fn add_triangle(&mut self, triangle: &Triangle) {
        for vertex in &triangle.vertices {
            let (p, n) = (vertex.position, vertex.normal);
            self.positions.extend_from_slice(&[p.x, p.y, p.z]);
            self.normals.extend_from_slice(&[n.x, n.y, n.z]);
        }
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 9
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn triangle(&self, index: usize) -> Option<Triangle> {
        let start = index.checked_mul(9)?;
        let end = start.checked_add(9)?;
        let p = self.positions.get(start..end)?;
        let n = self.normals.get(start..end)?;
        let vertex = |k: usize| {
            let o = k * 3;
            Vertex::new(p[o], p[o + 1], p[o + 2], n[o], n[o + 1], n[o + 2])
        };
        Some(Triangle::new(vertex(0), vertex(1), vertex(2)))
    }

    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        (0..self.triangle_count()).filter_map(move |i| self.triangle(i))
    }

    /// Mean of every emitted vertex position.
    pub fn centroid(&self) -> Point3<f32> {
        if self.is_empty() {
            return Point3::origin();
        }
        let sum = self
            .positions
            .chunks_exact(3)
            .fold(Vector3::zeros(), |acc, p| acc + Vector3::new(p[0], p[1], p[2]));
        Point3::from(sum / self.vertex_count() as f32)
    }
}

/// Corner sign patterns for each side of a box, counter-clockwise seen from outside.
const CUBOID_SIDES: [([f32; 3], [[f32; 3]; 4]); 6] = [
    // Front
    ([0.0, 0.0, 1.0], [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]]),
    // Back
    ([0.0, 0.0, -1.0], [[-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0], [1.0, -1.0, -1.0]]),
    // Top
    ([0.0, 1.0, 0.0], [[-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0]]),
    // Bottom
    ([0.0, -1.0, 0.0], [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]]),
    // Right
    ([1.0, 0.0, 0.0], [[1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0]]),
    // Left
    ([-1.0, 0.0, 0.0], [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]]),
];

/// Axis-aligned box centred on the origin, two triangles per side.
pub fn cuboid(width: f32, height: f32, depth: f32) -> GeometryBuffer {
    let half = Vector3::new(width, height, depth) / 2.0;
    let mut buffer = GeometryBuffer::with_capacity(12);

    for (normal, corners) in &CUBOID_SIDES {
        let normal = Vector3::from(*normal);
        let [a, b, c, d] =
            (*corners).map(|signs| Point3::from(Vector3::from(signs).component_mul(&half)));
        buffer.add_triangle(&Triangle::flat(a, b, c, normal));
        buffer.add_triangle(&Triangle::flat(a, c, d, normal));
    }

    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_face_normal_follows_winding() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);
        assert_eq!(face_normal(&a, &b, &c), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(face_normal(&a, &c, &b), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_degenerate_face_gets_zero_normal() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let normal = face_normal(&a, &a, &Point3::new(0.0, 0.0, 0.0));
        assert_eq!(normal, Vector3::zeros());
        assert!(normal.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_from_positions_assigns_flat_normals() {
        let buffer = GeometryBuffer::from_positions(vec![
            0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0, 0.0, //
            0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 2.0, 0.0, 0.0,
        ])
        .unwrap();

        assert_eq!(buffer.triangle_count(), 2);
        assert_eq!(buffer.vertex_count(), 6);
        assert_eq!(&buffer.normals()[0..9], &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(&buffer.normals()[9..18], &[0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_from_positions_rejects_partial_data() {
        assert_eq!(
            GeometryBuffer::from_positions(vec![0.0; 10]),
            Err(InvalidGeometry::VertexTableLength { len: 10 })
        );
        assert_eq!(
            GeometryBuffer::from_positions(vec![0.0; 12]),
            Err(InvalidGeometry::IncompleteTriangle { vertex_count: 4 })
        );
    }

    #[test]
    fn test_triangle_accessors() {
        let buffer = GeometryBuffer::from_positions(vec![
            0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 3.0, 0.0,
        ])
        .unwrap();
        let triangle = buffer.triangle(0).unwrap();

        assert_relative_eq!(triangle.area(), 4.5, epsilon = 1e-6);
        assert_relative_eq!(triangle.centroid(), Point3::new(1.0, 1.0, 0.0), epsilon = 1e-6);
        assert!(!triangle.is_degenerate());
        assert!(buffer.triangle(1).is_none());
    }

    #[test]
    fn test_collinear_triangle_is_degenerate() {
        let n = Vector3::zeros();
        let triangle = Triangle::flat(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
            n,
        );
        assert!(triangle.is_degenerate());
    }

    #[test]
    fn test_cuboid_layout() {
        let buffer = cuboid(2.0, 4.0, 6.0);
        assert_eq!(buffer.triangle_count(), 12);
        assert_eq!(buffer.positions().len(), 108);

        let max = |axis: usize| {
            buffer
                .positions()
                .iter()
                .skip(axis)
                .step_by(3)
                .fold(f32::MIN, |m, v| m.max(*v))
        };
        assert_eq!(max(0), 1.0);
        assert_eq!(max(1), 2.0);
        assert_eq!(max(2), 3.0);
    }

    #[test]
    fn test_cuboid_normals_match_winding() {
        for triangle in cuboid(1.0, 1.0, 1.0).triangles() {
            let stored = triangle.vertices[0].normal;
            assert_relative_eq!(triangle.face_normal(), stored, epsilon = 1e-6);
        }
    }
}
