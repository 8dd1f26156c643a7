//! Map rendering
//!
//! `shapes` turns the grid into plain outlines, fills and labels; `canvas`
//! paints them on a 2D canvas context in the browser.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use shapes::{TileLabel, TileShape, map_shapes, tile_shape};
