use crate::builder::PolyhedronBuilder;
use crate::error::InvalidGeometry;
use crate::geometry::GeometryBuffer;

/// Alternating corners of the cube `[-1, 1]^3`.
pub const TETRAHEDRON_VERTICES: [f32; 12] = [
    1.0, 1.0, 1.0, //
    1.0, -1.0, -1.0, //
    -1.0, 1.0, -1.0, //
    -1.0, -1.0, 1.0,
];

pub const TETRAHEDRON_FACES: [u32; 12] = [
    0, 1, 2, //
    0, 3, 1, //
    1, 3, 2, //
    2, 3, 0,
];

/// Four-sided die spanning a cube of edge `size`.
pub fn tetrahedron(size: f32) -> Result<GeometryBuffer, InvalidGeometry> {
    PolyhedronBuilder::new(size / 2.0, &TETRAHEDRON_VERTICES)
        .indices(&TETRAHEDRON_FACES)
        .build()
}
