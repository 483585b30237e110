//! Error types for geometry construction and STL exchange

/// Raised when vertex and face tables do not describe a triangle mesh.
///
/// These are programmer errors in constant tables, so construction fails
/// without producing a partial buffer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidGeometry {
    #[error("vertex table has {len} coordinates, which is not a multiple of 3")]
    VertexTableLength { len: usize },

    #[error("index table has {len} entries, which is not a multiple of 3")]
    IndexTableLength { len: usize },

    #[error("face index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    #[error("{vertex_count} unindexed vertices do not form whole triangles")]
    IncompleteTriangle { vertex_count: usize },
}

/// Errors produced while decoding STL data.
#[derive(thiserror::Error, Debug)]
pub enum StlError {
    #[error("file too small to be a valid STL ({len} bytes)")]
    TooShort { len: usize },

    #[error("unexpected end of file in facet {facet} of {expected}")]
    UnexpectedEof { facet: usize, expected: usize },

    #[error("{count} facets do not fit the 32-bit binary STL facet count")]
    TooManyFacets { count: usize },

    #[error("failed to parse ASCII STL: {0}")]
    Syntax(String),

    #[error(transparent)]
    Geometry(#[from] InvalidGeometry),
}

/// A dice name that does not match any known shape.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown dice shape `{0}`")]
pub struct UnknownShape(pub String);
