//! Twenty-sided die
use crate::builder::PolyhedronBuilder;
use crate::error::InvalidGeometry;
use crate::geometry::GeometryBuffer;

/// Circumradius 0.5, poles on the y axis. Vertex 0 is the bottom pole, `1..=5`
/// the lower ring (starting at 36 degrees), `6..=10` the upper ring and 11
/// the top pole.
pub const ICOSAHEDRON_VERTICES: [f32; 36] = [
    0.0, -0.50, -0.0, //
    0.36180, -0.223608, 0.262860, //
    -0.138193, -0.223608, 0.425320, //
    -0.447212, -0.223608, -0.0, //
    -0.138193, -0.223608, -0.425320, //
    0.36180, -0.223608, -0.262860, //
    0.138193, 0.223607, 0.425320, //
    -0.36180, 0.223607, 0.262860, //
    -0.36180, 0.223607, -0.262860, //
    0.138193, 0.223607, -0.425320, //
    0.447212, 0.223607, -0.0, //
    0.0, 0.50, -0.0,
];

/// Bottom cap, the two bands of ring triangles, then the top cap.
pub const ICOSAHEDRON_FACES: [u32; 60] = [
    0, 1, 2, //
    1, 0, 5, //
    0, 2, 3, //
    0, 3, 4, //
    0, 4, 5, //
    1, 5, 10, //
    2, 1, 6, //
    3, 2, 7, //
    4, 3, 8, //
    5, 4, 9, //
    1, 10, 6, //
    2, 6, 7, //
    3, 7, 8, //
    4, 8, 9, //
    5, 9, 10, //
    6, 10, 11, //
    7, 6, 11, //
    8, 7, 11, //
    9, 8, 11, //
    10, 9, 11,
];

/// The face table as first tabulated for this die, kept for review.
///
/// It differs from [`ICOSAHEDRON_FACES`] in faces 7, 11, 12, 16 and 17, which
/// name vertex 8 where vertex 7 belongs. Faces 12 and 17 repeat vertex 8 and
/// are degenerate, vertex 7 is never used, and the surface is not closed.
pub const LEGACY_ICOSAHEDRON_FACES: [u32; 60] = [
    0, 1, 2, //
    1, 0, 5, //
    0, 2, 3, //
    0, 3, 4, //
    0, 4, 5, //
    1, 5, 10, //
    2, 1, 6, //
    3, 2, 8, //
    4, 3, 8, //
    5, 4, 9, //
    1, 10, 6, //
    2, 6, 8, //
    3, 8, 8, //
    4, 8, 9, //
    5, 9, 10, //
    6, 10, 11, //
    8, 6, 11, //
    8, 8, 11, //
    9, 8, 11, //
    10, 9, 11,
];

/// Twenty-sided die with circumradius `size / 2`.
pub fn icosahedron(size: f32) -> Result<GeometryBuffer, InvalidGeometry> {
    PolyhedronBuilder::new(size, &ICOSAHEDRON_VERTICES)
        .indices(&ICOSAHEDRON_FACES)
        .build()
}

/// Twenty-sided die built from [`LEGACY_ICOSAHEDRON_FACES`].
pub fn legacy_icosahedron(size: f32) -> Result<GeometryBuffer, InvalidGeometry> {
    PolyhedronBuilder::new(size, &ICOSAHEDRON_VERTICES)
        .indices(&LEGACY_ICOSAHEDRON_FACES)
        .build()
}
