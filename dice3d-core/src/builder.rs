//! Scaled, face-expanded polyhedra from constant vertex and index tables
use crate::error::InvalidGeometry;
use crate::geometry::GeometryBuffer;

/// Builds a flat-shaded [`GeometryBuffer`] from a vertex table and an optional
/// triangle index table.
///
/// ```
/// use dice3d_core::PolyhedronBuilder;
///
/// let vertices = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
/// let buffer = PolyhedronBuilder::new(2.0, &vertices)
///     .indices(&[0, 1, 2])
///     .build()
///     .unwrap();
/// assert_eq!(buffer.positions()[3], 2.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PolyhedronBuilder<'a> {
    scale: f32,
    vertices: &'a [f32],
    indices: Option<&'a [u32]>,
}

impl<'a> PolyhedronBuilder<'a> {
    /// Without indices, `vertices` must already list each triangle's corners in order.
    pub fn new(scale: f32, vertices: &'a [f32]) -> Self {
        Self {
            scale,
            vertices,
            indices: None,
        }
    }

    /// Triangles as index triples into the vertex table.
    pub fn indices(mut self, indices: &'a [u32]) -> Self {
        self.indices = Some(indices);
        self
    }

    pub fn build(&self) -> Result<GeometryBuffer, InvalidGeometry> {
        if self.vertices.len() % 3 != 0 {
            return Err(InvalidGeometry::VertexTableLength {
                len: self.vertices.len(),
            });
        }
        let vertex_count = self.vertices.len() / 3;

        let scaled: Vec<f32> = self.vertices.iter().map(|v| v * self.scale).collect();

        let positions = match self.indices {
            Some(indices) => {
                if indices.len() % 3 != 0 {
                    return Err(InvalidGeometry::IndexTableLength { len: indices.len() });
                }
                let mut positions = Vec::with_capacity(indices.len() * 3);
                for &index in indices {
                    if index as usize >= vertex_count {
                        return Err(InvalidGeometry::IndexOutOfRange {
                            index,
                            vertex_count,
                        });
                    }
                    let start = index as usize * 3;
                    positions.extend_from_slice(&scaled[start..start + 3]);
                }
                positions
            }
            None => scaled,
        };

        let buffer = GeometryBuffer::from_positions(positions)?;

        for (i, triangle) in buffer.triangles().enumerate() {
            if triangle.is_degenerate() {
                log::warn!("polyhedron triangle {} is degenerate", i);
            }
        }
        log::debug!(
            "built polyhedron: {} vertices, {} triangles, scale {}",
            vertex_count,
            buffer.triangle_count(),
            self.scale
        );

        Ok(buffer)
    }
}

/// Shorthand for [`PolyhedronBuilder`].
pub fn build_polyhedron(
    scale: f32,
    vertices: &[f32],
    indices: Option<&[u32]>,
) -> Result<GeometryBuffer, InvalidGeometry> {
    let builder = PolyhedronBuilder::new(scale, vertices);
    match indices {
        Some(indices) => builder.indices(indices).build(),
        None => builder.build(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const SQUARE: [f32; 12] = [
        0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        1.0, 1.0, 0.0, //
        0.0, 1.0, 0.0,
    ];
    const SQUARE_FACES: [u32; 6] = [0, 1, 2, 0, 2, 3];

    #[test]
    fn test_indexed_build_duplicates_shared_vertices() {
        let buffer = build_polyhedron(1.0, &SQUARE, Some(&SQUARE_FACES)).unwrap();

        assert_eq!(buffer.triangle_count(), 2);
        assert_eq!(buffer.positions().len(), 9 * 2);
        assert_eq!(&buffer.positions()[0..3], &buffer.positions()[9..12]);
        assert_eq!(&buffer.positions()[6..9], &buffer.positions()[12..15]);
    }

    #[test]
    fn test_unindexed_build_uses_vertices_as_is() {
        let soup = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let buffer = PolyhedronBuilder::new(3.0, &soup).build().unwrap();

        assert_eq!(buffer.positions(), &[0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 3.0, 0.0]);
        assert_eq!(&buffer.normals()[0..3], &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_scale_multiplies_positions_and_keeps_normals() {
        let unit = build_polyhedron(1.0, &SQUARE, Some(&SQUARE_FACES)).unwrap();

        for k in [2.0_f32, 3.7, 0.25] {
            let scaled = build_polyhedron(k, &SQUARE, Some(&SQUARE_FACES)).unwrap();
            for (a, b) in unit.positions().iter().zip(scaled.positions()) {
                assert_eq!(a * k, *b);
            }
            for (a, b) in unit.normals().iter().zip(scaled.normals()) {
                assert_abs_diff_eq!(*a, *b, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_rejects_ragged_vertex_table() {
        let result = build_polyhedron(1.0, &SQUARE[..11], Some(&SQUARE_FACES));
        assert_eq!(result, Err(InvalidGeometry::VertexTableLength { len: 11 }));
    }

    #[test]
    fn test_rejects_ragged_index_table() {
        let result = build_polyhedron(1.0, &SQUARE, Some(&SQUARE_FACES[..4]));
        assert_eq!(result, Err(InvalidGeometry::IndexTableLength { len: 4 }));
    }

    #[test]
    fn test_rejects_out_of_range_index() {
        let result = build_polyhedron(1.0, &SQUARE, Some(&[0, 1, 4]));
        assert_eq!(
            result,
            Err(InvalidGeometry::IndexOutOfRange {
                index: 4,
                vertex_count: 4
            })
        );
    }

    #[test]
    fn test_rejects_unindexed_partial_triangle() {
        let result = build_polyhedron(1.0, &SQUARE, None);
        assert_eq!(result, Err(InvalidGeometry::IncompleteTriangle { vertex_count: 4 }));
    }

    #[test]
    fn test_empty_tables_build_empty_buffer() {
        let buffer = build_polyhedron(1.0, &[], Some(&[])).unwrap();
        assert!(buffer.is_empty());
    }
}
