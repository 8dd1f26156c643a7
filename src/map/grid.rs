//! Tile grid and the edits a user can make to it

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SOLDIERS, PLAYER_COUNT, TERRAIN_COUNT};
use crate::hex::HexCell;

/// Terrain type of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Terrain {
    /// No land; owner and soldiers are unset
    #[default]
    Empty,
    Sand,
    Grass,
    Rock,
}

impl Terrain {
    pub const ALL: [Terrain; TERRAIN_COUNT] =
        [Terrain::Empty, Terrain::Sand, Terrain::Grass, Terrain::Rock];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Next terrain in the cycle, wrapping back to `Empty`
    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % TERRAIN_COUNT]
    }

    pub fn is_empty(self) -> bool {
        self == Terrain::Empty
    }
}

/// Player index (0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Player(u8);

impl Player {
    pub const FIRST: Player = Player(0);

    pub fn from_index(index: u8) -> Option<Self> {
        ((index as usize) < PLAYER_COUNT).then_some(Player(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Next player, wrapping around
    pub fn next(self) -> Self {
        Player((self.0 + 1) % PLAYER_COUNT as u8)
    }
}

/// A single map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tile {
    pub terrain: Terrain,
    /// Owning player, only set on non-empty terrain
    pub owner: Option<Player>,
    /// Soldier count (1..=9), only set on non-empty terrain
    pub soldiers: Option<u8>,
}

impl Tile {
    /// Advance the terrain, keeping owner and soldiers consistent with it
    pub fn cycle_terrain(&mut self) {
        let before = self.terrain;
        self.terrain = before.next();

        if self.terrain.is_empty() {
            self.owner = None;
            self.soldiers = None;
        } else if before.is_empty() {
            self.owner = Some(Player::FIRST);
            self.soldiers = Some(1);
        }
    }

    /// Hand the tile to the next player. Empty tiles have no owner.
    pub fn cycle_owner(&mut self) -> bool {
        if self.terrain.is_empty() {
            return false;
        }
        self.owner = Some(self.owner.map_or(Player::FIRST, Player::next));
        true
    }

    /// Set the soldier count. Ignored on empty tiles and outside 1..=9.
    pub fn set_soldiers(&mut self, count: u8) -> bool {
        if self.terrain.is_empty() || !(1..=MAX_SOLDIERS).contains(&count) {
            return false;
        }
        self.soldiers = Some(count);
        true
    }
}

/// A `cols × rows` map of tiles, stored column-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexGrid {
    cols: usize,
    rows: usize,
    /// `tiles[col][row]`
    tiles: Vec<Vec<Tile>>,
}

impl HexGrid {
    /// Create a grid where every tile is empty
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            tiles: vec![vec![Tile::default(); rows]; cols],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Change the dimensions. Tiles that stay in range keep their values;
    /// new tiles start empty.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.tiles.resize_with(cols, Vec::new);
        for column in &mut self.tiles {
            column.resize(rows, Tile::default());
        }
        self.cols = cols;
        self.rows = rows;
    }

    /// Check that a cell addresses a tile of this grid
    pub fn contains(&self, cell: HexCell) -> bool {
        cell.column >= 0
            && cell.row >= 0
            && (cell.column as usize) < self.cols
            && (cell.row as usize) < self.rows
    }

    pub fn tile(&self, col: usize, row: usize) -> Option<&Tile> {
        self.tiles.get(col)?.get(row)
    }

    pub fn tile_mut(&mut self, col: usize, row: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(col)?.get_mut(row)
    }

    /// Tile at a hex cell, if inside the grid
    pub fn tile_at(&self, cell: HexCell) -> Option<&Tile> {
        if !self.contains(cell) {
            return None;
        }
        self.tile(cell.column as usize, cell.row as usize)
    }

    fn tile_at_mut(&mut self, cell: HexCell) -> Option<&mut Tile> {
        if !self.contains(cell) {
            return None;
        }
        self.tile_mut(cell.column as usize, cell.row as usize)
    }

    /// Advance the terrain at `cell`. Returns false outside the grid.
    pub fn cycle_terrain(&mut self, cell: HexCell) -> bool {
        match self.tile_at_mut(cell) {
            Some(tile) => {
                tile.cycle_terrain();
                true
            }
            None => false,
        }
    }

    /// Advance the owner at `cell`. Returns false when nothing changed.
    pub fn cycle_owner(&mut self, cell: HexCell) -> bool {
        self.tile_at_mut(cell)
            .is_some_and(|tile| tile.cycle_owner())
    }

    /// Set soldiers at `cell`. Returns false when nothing changed.
    pub fn set_soldiers(&mut self, cell: HexCell, count: u8) -> bool {
        self.tile_at_mut(cell)
            .is_some_and(|tile| tile.set_soldiers(count))
    }

    /// All tiles with their cells, column by column
    pub fn tiles(&self) -> impl Iterator<Item = (HexCell, &Tile)> {
        self.tiles.iter().enumerate().flat_map(|(col, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(row, tile)| (HexCell::new(col as i32, row as i32), tile))
        })
    }

    /// Number of non-empty tiles
    pub fn land_count(&self) -> usize {
        self.tiles().filter(|(_, t)| !t.terrain.is_empty()).count()
    }
}
