//! Map editor state
//!
//! Owns the grid and its layout and turns input events into tile edits.
//! Platform code feeds events in and redraws when `handle` reports a change.

pub mod input;

pub use input::{EditorInput, soldier_key};

use glam::Vec2;

use crate::hex::{HexCell, HexLayout};
use crate::map::{HexGrid, MapError, MapSnapshot};
use crate::settings::EditorConfig;

/// The editor: one grid, one layout, and the pointer position keys apply to
#[derive(Debug, Clone)]
pub struct Editor {
    grid: HexGrid,
    layout: HexLayout,
    last_pointer: Vec2,
}

impl Editor {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            grid: HexGrid::new(config.cols, config.rows),
            layout: HexLayout::new(config.radius),
            last_pointer: Vec2::ZERO,
        }
    }

    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    pub fn layout(&self) -> &HexLayout {
        &self.layout
    }

    /// Cell under a canvas position (may be outside the grid)
    pub fn selected_cell(&self, point: Vec2) -> HexCell {
        self.layout.cell_at(point)
    }

    /// Cell under the last pointer position
    pub fn hovered_cell(&self) -> HexCell {
        self.selected_cell(self.last_pointer)
    }

    /// Apply one input event. Returns true when the map changed.
    pub fn handle(&mut self, input: &EditorInput) -> bool {
        match input {
            EditorInput::PointerMove(pos) => {
                self.last_pointer = *pos;
                false
            }
            EditorInput::PrimaryClick(pos) => {
                let cell = self.selected_cell(*pos);
                self.grid.cycle_terrain(cell)
            }
            EditorInput::SecondaryClick(pos) => {
                let cell = self.selected_cell(*pos);
                self.grid.cycle_owner(cell)
            }
            EditorInput::Key(key) => match soldier_key(key) {
                Some(count) => {
                    let cell = self.hovered_cell();
                    self.grid.set_soldiers(cell, count)
                }
                None => false,
            },
        }
    }

    /// Canvas size needed to show the whole grid
    pub fn surface_size(&self) -> Vec2 {
        self.layout
            .surface_size(self.grid.cols(), self.grid.rows())
    }

    /// Change grid dimensions, keeping tiles that remain in range
    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.grid.resize(cols, rows);
        log::debug!("Grid resized to {}x{}", cols, rows);
    }

    pub fn snapshot(&self) -> MapSnapshot {
        MapSnapshot::from_grid(&self.grid)
    }

    /// Text shown in the export box and written to storage
    pub fn export_text(&self) -> String {
        self.snapshot().to_export_text()
    }

    /// Replace the grid with a decoded map. On error the current grid stays.
    pub fn load_snapshot(&mut self, text: &str) -> Result<(), MapError> {
        let grid = MapSnapshot::from_json(text)?.into_grid()?;
        log::info!(
            "Loaded {}x{} map ({} land tiles)",
            grid.cols(),
            grid.rows(),
            grid.land_count()
        );
        self.grid = grid;
        Ok(())
    }
}
