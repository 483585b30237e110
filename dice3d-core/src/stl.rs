//! STL export and import for geometry buffers (binary and ASCII)
use std::fmt::Write;

use nom::{
    bytes::complete::tag,
    character::complete::{multispace0, multispace1, not_line_ending},
    multi::many0,
    number::complete::float,
    sequence::preceded,
    IResult,
};

use crate::error::StlError;
use crate::geometry::GeometryBuffer;

const HEADER_LEN: usize = 80;
const FACET_LEN: usize = 50;

/// Write `buffer` as an ASCII STL solid called `name`.
pub fn to_ascii_stl(buffer: &GeometryBuffer, name: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "solid {}", name);
    for triangle in buffer.triangles() {
        let n = triangle.face_normal();
        let _ = writeln!(out, "  facet normal {} {} {}", n.x, n.y, n.z);
        let _ = writeln!(out, "    outer loop");
        for vertex in &triangle.vertices {
            let p = vertex.position;
            let _ = writeln!(out, "      vertex {} {} {}", p.x, p.y, p.z);
        }
        let _ = writeln!(out, "    endloop");
        let _ = writeln!(out, "  endfacet");
    }
    let _ = writeln!(out, "endsolid {}", name);
    out
}

fn facet_count(triangles: usize) -> Result<u32, StlError> {
    u32::try_from(triangles).map_err(|_| StlError::TooManyFacets { count: triangles })
}

/// Write `buffer` as a binary STL with an empty header.
pub fn to_binary_stl(buffer: &GeometryBuffer) -> Result<Vec<u8>, StlError> {
    let count = buffer.triangle_count();
    let stored_count = facet_count(count)?;
    let mut out = Vec::with_capacity(HEADER_LEN + 4 + count * FACET_LEN);

    out.extend_from_slice(&[0u8; HEADER_LEN]);
    out.extend_from_slice(&stored_count.to_le_bytes());

    for triangle in buffer.triangles() {
        let n = triangle.face_normal();
        for c in [n.x, n.y, n.z] {
            out.extend_from_slice(&c.to_le_bytes());
        }
        for vertex in &triangle.vertices {
            let p = vertex.position;
            for c in [p.x, p.y, p.z] {
                out.extend_from_slice(&c.to_le_bytes());
            }
        }
        // Attribute byte count
        out.extend_from_slice(&0u16.to_le_bytes());
    }

    Ok(out)
}

fn read_f32(data: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes([data[offset], data[offset + 1], data[offset + 2], data[offset + 3]])
}

/// Parse a binary STL file. Stored facet normals are ignored and rederived from winding.
pub fn parse_binary_stl(data: &[u8]) -> Result<GeometryBuffer, StlError> {
    if data.len() < HEADER_LEN + 4 {
        return Err(StlError::TooShort { len: data.len() });
    }

    // Skip 80-byte header
    let data = &data[HEADER_LEN..];

    // Read triangle count (4 bytes, little-endian)
    let triangle_count = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;

    let mut positions = Vec::with_capacity(triangle_count.min(data.len() / FACET_LEN) * 9);
    let mut offset = 4;

    for facet in 0..triangle_count {
        if offset + FACET_LEN > data.len() {
            return Err(StlError::UnexpectedEof {
                facet,
                expected: triangle_count,
            });
        }

        // Skip the stored normal, read 3 vertices, skip the attribute byte count
        offset += 12;
        for _ in 0..9 {
            positions.push(read_f32(data, offset));
            offset += 4;
        }
        offset += 2;
    }

    Ok(GeometryBuffer::from_positions(positions)?)
}

/// Parse an ASCII STL file. Stored facet normals are ignored and rederived from winding.
pub fn parse_ascii_stl(input: &str) -> Result<GeometryBuffer, StlError> {
    match parse_ascii_stl_impl(input) {
        Ok((_, positions)) => Ok(GeometryBuffer::from_positions(positions)?),
        Err(e) => Err(StlError::Syntax(format!("{:?}", e))),
    }
}

fn parse_ascii_stl_impl(input: &str) -> IResult<&str, Vec<f32>> {
    let (input, _) = preceded(multispace0, tag("solid"))(input)?;
    let (input, _) = not_line_ending(input)?; // Optional name
    let (input, facets) = many0(parse_facet)(input)?;
    let (input, _) = preceded(multispace0, tag("endsolid"))(input)?;

    Ok((input, facets.concat()))
}

fn parse_facet(input: &str) -> IResult<&str, [f32; 9]> {
    let (input, _) = preceded(multispace0, tag("facet"))(input)?;
    let (input, _) = preceded(multispace1, tag("normal"))(input)?;
    let (input, _normal) = parse_vector3(input)?;
    let (input, _) = preceded(multispace0, tag("outer"))(input)?;
    let (input, _) = preceded(multispace1, tag("loop"))(input)?;
    let (input, v1) = parse_vertex(input)?;
    let (input, v2) = parse_vertex(input)?;
    let (input, v3) = parse_vertex(input)?;
    let (input, _) = preceded(multispace0, tag("endloop"))(input)?;
    let (input, _) = preceded(multispace0, tag("endfacet"))(input)?;

    Ok((
        input,
        [v1[0], v1[1], v1[2], v2[0], v2[1], v2[2], v3[0], v3[1], v3[2]],
    ))
}

fn parse_vertex(input: &str) -> IResult<&str, [f32; 3]> {
    let (input, _) = preceded(multispace0, tag("vertex"))(input)?;
    parse_vector3(input)
}

fn parse_vector3(input: &str) -> IResult<&str, [f32; 3]> {
    let (input, _) = multispace0(input)?;
    let (input, x) = float(input)?;
    let (input, _) = multispace1(input)?;
    let (input, y) = float(input)?;
    let (input, _) = multispace1(input)?;
    let (input, z) = float(input)?;
    Ok((input, [x, y, z]))
}

/// True when the header's facet count accounts for exactly `data.len()` bytes.
fn has_binary_length(data: &[u8]) -> bool {
    if data.len() < HEADER_LEN + 4 {
        return false;
    }
    let count = &data[HEADER_LEN..HEADER_LEN + 4];
    let count = u32::from_le_bytes([count[0], count[1], count[2], count[3]]) as u64;
    (HEADER_LEN + 4) as u64 + count * FACET_LEN as u64 == data.len() as u64
}

/// Detect and parse STL file (binary or ASCII)
pub fn parse_stl(data: &[u8]) -> Result<GeometryBuffer, StlError> {
    if data.len() <= 5 || &data[0..5] != b"solid" {
        return parse_binary_stl(data);
    }

    // Binary headers may also start with "solid"; only a size that matches
    // the stored facet count overrides a failed ASCII parse
    let ascii = std::str::from_utf8(data)
        .map_err(|e| StlError::Syntax(e.to_string()))
        .and_then(parse_ascii_stl);
    match ascii {
        Ok(buffer) => Ok(buffer),
        Err(_) if has_binary_length(data) => parse_binary_stl(data),
        Err(e) => Err(e),
    }
}
