//! Pentagonal trapezohedron: ten kite faces, each split into two triangles
use std::f64::consts::TAU;

use crate::builder::PolyhedronBuilder;
use crate::error::InvalidGeometry;
use crate::geometry::GeometryBuffer;

const TOP: u32 = 10;
const BOTTOM: u32 = 11;

/// Height of the upper ring above the equator (the lower ring sits at the negative).
pub fn ring_height() -> f64 {
    (1.0 - 36f64.to_radians().cos()) / 2.0
}

/// Upper ring `0..5`, lower ring `5..10` offset by half a step, then the two apexes.
pub fn decahedron_vertices() -> [f32; 36] {
    let sp = ring_height();
    let mut vertices = [0.0; 36];

    for i in 0..5 {
        let upper = i as f64 * TAU / 5.0;
        let lower = (i as f64 + 0.5) * TAU / 5.0;

        vertices[i * 3..i * 3 + 3].copy_from_slice(&[upper.sin() as f32, sp as f32, upper.cos() as f32]);
        vertices[(i + 5) * 3..(i + 5) * 3 + 3]
            .copy_from_slice(&[lower.sin() as f32, -sp as f32, lower.cos() as f32]);
    }

    let apex = (1.0 + sp) as f32;
    vertices[30..33].copy_from_slice(&[0.0, apex, 0.0]);
    vertices[33..36].copy_from_slice(&[0.0, -apex, 0.0]);

    vertices
}

/// Four triangles per angular step: upper kite (apex + ring band) and lower
/// kite (ring band + apex).
pub fn decahedron_faces() -> [u32; 60] {
    let mut faces = [0; 60];

    for i in 0..5u32 {
        let next = (i + 1) % 5;
        let at = i as usize * 12;
        faces[at..at + 12].copy_from_slice(&[
            TOP, i, next, //
            i, i + 5, next, //
            i + 5, BOTTOM, next + 5, //
            i + 5, next + 5, next,
        ]);
    }

    faces
}

/// Ten-sided die with ring radius `size`.
pub fn decahedron(size: f32) -> Result<GeometryBuffer, InvalidGeometry> {
    PolyhedronBuilder::new(size, &decahedron_vertices())
        .indices(&decahedron_faces())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_ring_height() {
        assert_abs_diff_eq!(ring_height(), 0.095_491_502_812_526_27, epsilon = 1e-12);
    }

    #[test]
    fn test_vertex_layout() {
        let v = decahedron_vertices();
        let sp = ring_height() as f32;

        for i in 0..5 {
            let radius = (v[i * 3].powi(2) + v[i * 3 + 2].powi(2)).sqrt();
            assert_relative_eq!(radius, 1.0, epsilon = 1e-6);
            assert_eq!(v[i * 3 + 1], sp);
            assert_eq!(v[(i + 5) * 3 + 1], -sp);
        }
        assert_eq!(&v[0..3], &[0.0, sp, 1.0]);
        let apex = (1.0 + ring_height()) as f32;
        assert_eq!(&v[30..36], &[0.0, apex, 0.0, 0.0, -apex, 0.0]);
    }

    #[test]
    fn test_faces_wrap_around() {
        let faces = decahedron_faces();
        assert!(faces.iter().all(|&i| i < 12));
        assert_eq!(&faces[48..60], &[10, 4, 0, 4, 9, 0, 9, 11, 5, 9, 5, 0]);
    }

    #[test]
    fn test_apex_faces_meet_at_apexes() {
        let faces = decahedron_faces();
        let touching = |apex: u32| faces.chunks_exact(3).filter(|f| f.contains(&apex)).count();
        assert_eq!(touching(TOP), 5);
        assert_eq!(touching(BOTTOM), 5);
    }

    #[test]
    fn test_size_scales_ring_radius() {
        let buffer = decahedron(3.0).unwrap();
        assert_eq!(buffer.triangle_count(), 20);

        let top = buffer
            .positions()
            .chunks_exact(3)
            .map(|p| p[1])
            .fold(f32::MIN, f32::max);
        assert_relative_eq!(top, 3.0 * (1.0 + ring_height() as f32), epsilon = 1e-5);
    }
}
