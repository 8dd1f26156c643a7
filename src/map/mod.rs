//! Map model
//!
//! The grid owns every tile; edits go through it so the owner and soldier
//! values stay consistent with the terrain. Snapshots are the persisted form.

pub mod grid;
pub mod snapshot;

pub use grid::{HexGrid, Player, Terrain, Tile};
pub use snapshot::{MapError, MapSnapshot, UNSET};
