//! The dice catalog: one constructor per solid plus the [`Dice`] family enum
use std::fmt;
use std::str::FromStr;

use crate::error::{InvalidGeometry, UnknownShape};
use crate::geometry::GeometryBuffer;

mod decahedron;
mod hexahedron;
mod icosahedron;
mod octahedron;
mod tetrahedron;

pub use decahedron::{decahedron, decahedron_faces, decahedron_vertices, ring_height};
pub use hexahedron::hexahedron;
pub use icosahedron::{
    icosahedron, legacy_icosahedron, ICOSAHEDRON_FACES, ICOSAHEDRON_VERTICES,
    LEGACY_ICOSAHEDRON_FACES,
};
pub use octahedron::{octahedron, OCTAHEDRON_FACES, OCTAHEDRON_VERTICES};
pub use tetrahedron::{tetrahedron, TETRAHEDRON_FACES, TETRAHEDRON_VERTICES};

/// A die shape, named by its number of faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dice {
    D4,
    D6,
    D8,
    D10,
    D20,
}

impl Dice {
    pub const ALL: [Dice; 5] = [Dice::D4, Dice::D6, Dice::D8, Dice::D10, Dice::D20];

    /// Number of faces a roll can land on.
    pub fn face_count(self) -> u32 {
        match self {
            Dice::D4 => 4,
            Dice::D6 => 6,
            Dice::D8 => 8,
            Dice::D10 => 10,
            Dice::D20 => 20,
        }
    }

    /// Name of the solid.
    pub fn name(self) -> &'static str {
        match self {
            Dice::D4 => "tetrahedron",
            Dice::D6 => "hexahedron",
            Dice::D8 => "octahedron",
            Dice::D10 => "decahedron",
            Dice::D20 => "icosahedron",
        }
    }

    pub fn geometry(self, size: f32) -> Result<GeometryBuffer, InvalidGeometry> {
        match self {
            Dice::D4 => tetrahedron(size),
            Dice::D6 => Ok(hexahedron(size)),
            Dice::D8 => octahedron(size),
            Dice::D10 => decahedron(size),
            Dice::D20 => icosahedron(size),
        }
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.face_count())
    }
}

impl FromStr for Dice {
    type Err = UnknownShape;

    /// Accepts `d20`, `20` or `icosahedron` (any case), and likewise for the others.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let number = wanted.strip_prefix('d').unwrap_or(&wanted);

        Dice::ALL
            .into_iter()
            .find(|dice| dice.name() == wanted || dice.face_count().to_string() == number)
            .ok_or_else(|| UnknownShape(s.to_string()))
    }
}
