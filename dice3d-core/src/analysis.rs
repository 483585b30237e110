//! Validity checks for closed, outward-facing solids
use std::collections::HashMap;

use nalgebra::Point3;

use crate::geometry::GeometryBuffer;

/// Allowed deviation of a stored normal from unit length.
const NORMAL_TOLERANCE: f32 = 1e-4;

/// Positions closer than `1 / WELD_RESOLUTION` are treated as the same corner
/// when matching edges.
const WELD_RESOLUTION: f32 = 1e4;

type CornerKey = [i64; 3];

/// Per-solid summary of geometric defects, listed by triangle index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolidReport {
    pub triangle_count: usize,
    /// Triangles whose corners are collinear or coincide.
    pub degenerate_faces: Vec<usize>,
    /// Triangles whose normal does not point away from the solid's centroid.
    pub inward_faces: Vec<usize>,
    pub non_unit_normals: Vec<usize>,
    /// Directed edges without exactly one opposite partner.
    pub open_edges: usize,
}

impl SolidReport {
    pub fn is_valid(&self) -> bool {
        self.degenerate_faces.is_empty()
            && self.inward_faces.is_empty()
            && self.non_unit_normals.is_empty()
            && self.open_edges == 0
    }
}

/// Check every triangle of `buffer`.
///
/// Degenerate triangles are only reported as degenerate; their normals are
/// not checked for length or direction.
pub fn analyze(buffer: &GeometryBuffer) -> SolidReport {
    let centroid = buffer.centroid();
    let mut report = SolidReport {
        triangle_count: buffer.triangle_count(),
        ..SolidReport::default()
    };
    let mut edges: HashMap<(CornerKey, CornerKey), usize> = HashMap::new();

    for (i, triangle) in buffer.triangles().enumerate() {
        let corners = triangle.vertices.map(|v| corner_key(&v.position));
        for k in 0..3 {
            *edges.entry((corners[k], corners[(k + 1) % 3])).or_insert(0) += 1;
        }

        if triangle.is_degenerate() {
            report.degenerate_faces.push(i);
            continue;
        }

        if triangle
            .vertices
            .iter()
            .any(|v| (v.normal.norm() - 1.0).abs() > NORMAL_TOLERANCE)
        {
            report.non_unit_normals.push(i);
        }

        let outward = triangle.centroid() - centroid;
        if triangle.vertices.iter().any(|v| v.normal.dot(&outward) <= 0.0) {
            report.inward_faces.push(i);
        }
    }

    report.open_edges = edges
        .iter()
        .filter(|&(&(from, to), &count)| count != 1 || edges.get(&(to, from)) != Some(&1))
        .count();

    report
}

fn corner_key(p: &Point3<f32>) -> CornerKey {
    [p.x, p.y, p.z].map(|c| (c * WELD_RESOLUTION).round() as i64)
}
