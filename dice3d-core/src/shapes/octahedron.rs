use crate::builder::PolyhedronBuilder;
use crate::error::InvalidGeometry;
use crate::geometry::GeometryBuffer;

pub const OCTAHEDRON_VERTICES: [f32; 18] = [
    1.0, 0.0, 0.0, // 0: right
    -1.0, 0.0, 0.0, // 1: left
    0.0, 1.0, 0.0, // 2: top
    0.0, -1.0, 0.0, // 3: bottom
    0.0, 0.0, 1.0, // 4: front
    0.0, 0.0, -1.0, // 5: back
];

pub const OCTAHEDRON_FACES: [u32; 24] = [
    0, 2, 4, //
    0, 4, 3, //
    0, 5, 2, //
    0, 3, 5, //
    1, 4, 2, //
    1, 3, 4, //
    1, 2, 5, //
    1, 5, 3,
];

/// Eight-sided die with its corners on the axes at `size / 1.5`.
pub fn octahedron(size: f32) -> Result<GeometryBuffer, InvalidGeometry> {
    PolyhedronBuilder::new(size / 1.5, &OCTAHEDRON_VERTICES)
        .indices(&OCTAHEDRON_FACES)
        .build()
}
