//! Hexmap Editor - a hexagonal tile map editor for the browser
//!
//! Core modules:
//! - `hex`: Pixel ↔ cell geometry for the offset-column hex layout
//! - `map`: Tile grid and its serialized snapshot
//! - `editor`: Input handling over the grid
//! - `renderer`: Tile shapes and the 2D canvas backend
//! - `persistence`: Save/restore of the map in LocalStorage
//! - `settings`: Editor configuration

pub mod editor;
pub mod hex;
pub mod map;
pub mod persistence;
pub mod renderer;
pub mod settings;

pub use editor::{Editor, EditorInput};
pub use hex::{HexCell, HexLayout};
pub use map::{HexGrid, MapError, MapSnapshot};
pub use settings::EditorConfig;

/// Editor configuration constants
pub mod consts {
    /// Number of terrain types, including empty
    pub const TERRAIN_COUNT: usize = 4;
    /// Number of players a tile can belong to
    pub const PLAYER_COUNT: usize = 4;
    /// Largest soldier count a tile can hold
    pub const MAX_SOLDIERS: u8 = 9;

    /// Grid defaults
    pub const DEFAULT_RADIUS: f32 = 30.0;
    pub const DEFAULT_COLS: usize = 10;
    pub const DEFAULT_ROWS: usize = 10;

    /// Smallest hex radius that still fits a label
    pub const MIN_RADIUS: f32 = 4.0;
    /// Upper bound on either grid dimension
    pub const MAX_GRID_DIM: usize = 64;
}
