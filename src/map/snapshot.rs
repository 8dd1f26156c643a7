//! Serialized map record
//!
//! Three row-major arrays indexed `[row][column]`:
//! - `p`: owning player, -1 for none
//! - `t`: terrain index 0..3
//! - `s`: soldier count, -1 for none

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::grid::{HexGrid, Player, Terrain, Tile};
use crate::consts::MAX_SOLDIERS;

/// Sentinel for an unset owner or soldier count
pub const UNSET: i32 = -1;

/// Plain-data form of a [`HexGrid`], as stored and exported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSnapshot {
    pub p: Vec<Vec<i32>>,
    pub t: Vec<Vec<i32>>,
    pub s: Vec<Vec<i32>>,
}

/// Why a snapshot could not be turned back into a grid
#[derive(Debug)]
pub enum MapError {
    Json(serde_json::Error),
    /// No rows, or a first row with no columns
    Empty,
    RowCount {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    RowLength {
        field: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },
    InvalidValue {
        field: &'static str,
        row: usize,
        col: usize,
        value: i32,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Json(err) => write!(f, "malformed map json: {err}"),
            MapError::Empty => write!(f, "map has no tiles"),
            MapError::RowCount {
                field,
                expected,
                found,
            } => write!(f, "'{field}' has {found} rows, expected {expected}"),
            MapError::RowLength {
                field,
                row,
                expected,
                found,
            } => write!(
                f,
                "'{field}' row {row} has {found} columns, expected {expected}"
            ),
            MapError::InvalidValue {
                field,
                row,
                col,
                value,
            } => write!(f, "'{field}' value {value} at row {row}, column {col} is out of range"),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for MapError {
    fn from(err: serde_json::Error) -> Self {
        MapError::Json(err)
    }
}

impl MapSnapshot {
    /// Capture a grid, transposing columns into rows
    pub fn from_grid(grid: &HexGrid) -> Self {
        let mut p = vec![vec![UNSET; grid.cols()]; grid.rows()];
        let mut t = vec![vec![0; grid.cols()]; grid.rows()];
        let mut s = vec![vec![UNSET; grid.cols()]; grid.rows()];

        for (cell, tile) in grid.tiles() {
            let (row, col) = (cell.row as usize, cell.column as usize);
            p[row][col] = tile.owner.map_or(UNSET, |o| o.index() as i32);
            t[row][col] = tile.terrain.index() as i32;
            s[row][col] = tile.soldiers.map_or(UNSET, i32::from);
        }

        Self { p, t, s }
    }

    /// Parse a snapshot from JSON text (compact or export layout)
    pub fn from_json(text: &str) -> Result<Self, MapError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn rows(&self) -> usize {
        self.t.len()
    }

    pub fn cols(&self) -> usize {
        self.t.first().map_or(0, Vec::len)
    }

    /// Rebuild the grid. Dimensions come from the terrain array; the other
    /// two arrays must match it. Owner and soldiers on empty tiles are
    /// dropped.
    pub fn into_grid(self) -> Result<HexGrid, MapError> {
        let rows = self.rows();
        let cols = self.cols();
        if rows == 0 || cols == 0 {
            return Err(MapError::Empty);
        }

        for (field, data) in [("p", &self.p), ("t", &self.t), ("s", &self.s)] {
            check_shape(field, data, rows, cols)?;
        }

        let mut grid = HexGrid::new(cols, rows);
        for row in 0..rows {
            for col in 0..cols {
                let tile = decode_tile(&self, row, col)?;
                if let Some(slot) = grid.tile_mut(col, row) {
                    *slot = tile;
                }
            }
        }

        Ok(grid)
    }

    /// JSON text for the export box, with each key on its own line
    pub fn to_export_text(&self) -> String {
        let p = Value::from(self.p.clone());
        let t = Value::from(self.t.clone());
        let s = Value::from(self.s.clone());
        format!("{{\n\"p\":\n{p}\n,\"t\":\n{t}\n,\"s\":\n{s}\n}}")
    }
}

fn check_shape(
    field: &'static str,
    data: &[Vec<i32>],
    rows: usize,
    cols: usize,
) -> Result<(), MapError> {
    if data.len() != rows {
        return Err(MapError::RowCount {
            field,
            expected: rows,
            found: data.len(),
        });
    }
    for (row, values) in data.iter().enumerate() {
        if values.len() != cols {
            return Err(MapError::RowLength {
                field,
                row,
                expected: cols,
                found: values.len(),
            });
        }
    }
    Ok(())
}

fn decode_tile(snapshot: &MapSnapshot, row: usize, col: usize) -> Result<Tile, MapError> {
    let invalid = |field, value| MapError::InvalidValue {
        field,
        row,
        col,
        value,
    };

    let t = snapshot.t[row][col];
    let terrain = u8::try_from(t)
        .ok()
        .and_then(Terrain::from_index)
        .ok_or_else(|| invalid("t", t))?;

    let p = snapshot.p[row][col];
    let owner = match p {
        UNSET => None,
        _ => Some(
            u8::try_from(p)
                .ok()
                .and_then(Player::from_index)
                .ok_or_else(|| invalid("p", p))?,
        ),
    };

    let s = snapshot.s[row][col];
    let soldiers = match s {
        UNSET => None,
        _ => Some(
            u8::try_from(s)
                .ok()
                .filter(|n| (1..=MAX_SOLDIERS).contains(n))
                .ok_or_else(|| invalid("s", s))?,
        ),
    };

    if terrain.is_empty() {
        return Ok(Tile::default());
    }

    Ok(Tile {
        terrain,
        owner,
        soldiers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::HexCell;
    use proptest::prelude::*;

    fn sample_grid() -> HexGrid {
        let mut grid = HexGrid::new(2, 1);
        grid.cycle_terrain(HexCell::new(1, 0));
        grid.set_soldiers(HexCell::new(1, 0), 3);
        grid
    }

    #[test]
    fn test_snapshot_is_row_major() {
        let mut grid = HexGrid::new(3, 2);
        grid.cycle_terrain(HexCell::new(2, 1));
        grid.cycle_terrain(HexCell::new(2, 1));

        let snap = MapSnapshot::from_grid(&grid);
        assert_eq!(snap.rows(), 2);
        assert_eq!(snap.cols(), 3);
        assert_eq!(snap.t, vec![vec![0, 0, 0], vec![0, 0, 2]]);
        assert_eq!(snap.p, vec![vec![-1, -1, -1], vec![-1, -1, 0]]);
        assert_eq!(snap.s, vec![vec![-1, -1, -1], vec![-1, -1, 1]]);
    }

    #[test]
    fn test_export_text_layout() {
        let text = MapSnapshot::from_grid(&sample_grid()).to_export_text();
        assert_eq!(
            text,
            "{\n\"p\":\n[[-1,0]]\n,\"t\":\n[[0,1]]\n,\"s\":\n[[-1,3]]\n}"
        );
    }

    #[test]
    fn test_export_text_parses_back() {
        let grid = sample_grid();
        let text = MapSnapshot::from_grid(&grid).to_export_text();
        let restored = MapSnapshot::from_json(&text).unwrap().into_grid().unwrap();
        assert_eq!(restored, grid);
    }

    #[test]
    fn test_compact_json_accepted() {
        let json = r#"{"p":[[1,-1]],"t":[[3,0]],"s":[[9,-1]]}"#;
        let grid = MapSnapshot::from_json(json).unwrap().into_grid().unwrap();
        let tile = grid.tile(0, 0).unwrap();
        assert_eq!(tile.terrain, Terrain::Rock);
        assert_eq!(tile.owner, Player::from_index(1));
        assert_eq!(tile.soldiers, Some(9));
    }

    #[test]
    fn test_empty_tiles_drop_owner_and_soldiers() {
        let json = r#"{"p":[[2]],"t":[[0]],"s":[[4]]}"#;
        let grid = MapSnapshot::from_json(json).unwrap().into_grid().unwrap();
        assert_eq!(grid.tile(0, 0), Some(&Tile::default()));
    }

    #[test]
    fn test_rejects_empty_map() {
        let json = r#"{"p":[],"t":[],"s":[]}"#;
        let err = MapSnapshot::from_json(json).unwrap().into_grid().unwrap_err();
        assert!(matches!(err, MapError::Empty));
    }

    #[test]
    fn test_rejects_mismatched_arrays() {
        let json = r#"{"p":[[-1,-1]],"t":[[0,0]],"s":[[-1]]}"#;
        let err = MapSnapshot::from_json(json).unwrap().into_grid().unwrap_err();
        assert!(matches!(err, MapError::RowLength { field: "s", row: 0, .. }));

        let json = r#"{"p":[[-1]],"t":[[0],[0]],"s":[[-1],[-1]]}"#;
        let err = MapSnapshot::from_json(json).unwrap().into_grid().unwrap_err();
        assert!(matches!(err, MapError::RowCount { field: "p", expected: 2, found: 1 }));
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let cases = [
            (r#"{"p":[[-1]],"t":[[4]],"s":[[-1]]}"#, "t"),
            (r#"{"p":[[4]],"t":[[1]],"s":[[1]]}"#, "p"),
            (r#"{"p":[[0]],"t":[[1]],"s":[[10]]}"#, "s"),
            (r#"{"p":[[0]],"t":[[1]],"s":[[0]]}"#, "s"),
        ];
        for (json, expected) in cases {
            let err = MapSnapshot::from_json(json).unwrap().into_grid().unwrap_err();
            match err {
                MapError::InvalidValue { field, .. } => assert_eq!(field, expected),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_malformed_json() {
        let err = MapSnapshot::from_json("{\"p\":").unwrap_err();
        assert!(matches!(err, MapError::Json(_)));
        assert!(err.to_string().starts_with("malformed map json"));
    }

    fn arb_tile() -> impl Strategy<Value = Tile> {
        (0u8..4, 0u8..4, 1u8..10).prop_map(|(t, p, s)| {
            let terrain = Terrain::from_index(t).unwrap_or_default();
            if terrain.is_empty() {
                Tile::default()
            } else {
                Tile {
                    terrain,
                    owner: Player::from_index(p),
                    soldiers: Some(s),
                }
            }
        })
    }

    fn arb_grid() -> impl Strategy<Value = HexGrid> {
        (1usize..8, 1usize..8).prop_flat_map(|(cols, rows)| {
            proptest::collection::vec(arb_tile(), cols * rows).prop_map(move |tiles| {
                let mut grid = HexGrid::new(cols, rows);
                for (i, tile) in tiles.into_iter().enumerate() {
                    if let Some(slot) = grid.tile_mut(i % cols, i / cols) {
                        *slot = tile;
                    }
                }
                grid
            })
        })
    }

    proptest! {
        #[test]
        fn prop_serialize_round_trip(grid in arb_grid()) {
            let snapshot = MapSnapshot::from_grid(&grid);
            let text = snapshot.to_export_text();
            let restored = MapSnapshot::from_json(&text).unwrap().into_grid().unwrap();
            prop_assert_eq!(MapSnapshot::from_grid(&restored), snapshot);
            prop_assert_eq!(restored, grid);
        }
    }
}
