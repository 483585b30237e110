//! Dice3D Web - hands dice geometry to a JavaScript rendering library
//!
//! The rendering side wraps `positions()` and `normals()` into its own
//! buffer-geometry type, for example
//!
//! ```js
//! const dice = new DiceGeometry("d20", 1.0);
//! geometry.setAttribute("position", new BufferAttribute(dice.positions(), 3));
//! geometry.setAttribute("normal", new BufferAttribute(dice.normals(), 3));
//! ```
use dice3d_core::{build_polyhedron, Dice, GeometryBuffer};
use wasm_bindgen::prelude::*;

/// Flat-shaded triangle soup for one die
#[wasm_bindgen]
pub struct DiceGeometry {
    buffer: GeometryBuffer,
}

#[wasm_bindgen]
impl DiceGeometry {
    /// Build a catalog shape by name (`d4`, `d6`, `d8`, `d10`, `d20` or the solid's name).
    #[wasm_bindgen(constructor)]
    pub fn new(shape: &str, size: f32) -> Result<DiceGeometry, JsValue> {
        catalog_geometry(shape, size)
            .map(|buffer| DiceGeometry { buffer })
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Build from custom tables; `indices` may be omitted for an already expanded soup.
    #[wasm_bindgen(js_name = fromTables)]
    pub fn from_tables(
        size: f32,
        vertices: Vec<f32>,
        indices: Option<Vec<u32>>,
    ) -> Result<DiceGeometry, JsValue> {
        table_geometry(size, &vertices, indices.as_deref())
            .map(|buffer| DiceGeometry { buffer })
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Position triples, returned to JS as a `Float32Array`.
    pub fn positions(&self) -> Vec<f32> {
        self.buffer.positions().to_vec()
    }

    /// One normal triple per position triple, returned as a `Float32Array`.
    pub fn normals(&self) -> Vec<f32> {
        self.buffer.normals().to_vec()
    }

    #[wasm_bindgen(js_name = vertexCount)]
    pub fn vertex_count(&self) -> usize {
        self.buffer.vertex_count()
    }

    #[wasm_bindgen(js_name = triangleCount)]
    pub fn triangle_count(&self) -> usize {
        self.buffer.triangle_count()
    }
}

fn catalog_geometry(shape: &str, size: f32) -> Result<GeometryBuffer, String> {
    let dice: Dice = shape.parse().map_err(|e: dice3d_core::UnknownShape| e.to_string())?;
    let buffer = dice.geometry(size).map_err(|e| e.to_string())?;
    log::debug!("{} geometry: {} triangles", dice, buffer.triangle_count());
    Ok(buffer)
}

fn table_geometry(size: f32, vertices: &[f32], indices: Option<&[u32]>) -> Result<GeometryBuffer, String> {
    build_polyhedron(size, vertices, indices).map_err(|e| e.to_string())
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    #[cfg(target_family = "wasm")]
    console_log::init_with_level(log::Level::Info).map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(())
}
