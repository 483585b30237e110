//! Dice3D Core Library - polyhedral dice meshes
//!
//! Every die is a constant vertex table and face table, scaled and expanded
//! into a flat-shaded [`GeometryBuffer`] by [`PolyhedronBuilder`]. Buffers can
//! be checked with [`analysis::analyze`] and exchanged as STL.

pub mod analysis;
pub mod builder;
pub mod error;
pub mod geometry;
pub mod shapes;
pub mod stl;

// Re-export commonly used types
pub use analysis::{analyze, SolidReport};
pub use builder::{build_polyhedron, PolyhedronBuilder};
pub use error::{InvalidGeometry, StlError, UnknownShape};
pub use geometry::{cuboid, GeometryBuffer, Triangle, Vertex};
pub use shapes::Dice;
