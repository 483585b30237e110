use crate::geometry::{cuboid, GeometryBuffer};

/// Six-sided die: a cube of edge `size`.
pub fn hexahedron(size: f32) -> GeometryBuffer {
    cuboid(size, size, size)
}
