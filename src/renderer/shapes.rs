//! Shape generation for map tiles

use glam::Vec2;

use crate::hex::{HexCell, HexLayout};
use crate::map::{HexGrid, Player, Terrain, Tile};

/// Outline stroke colour
pub const STROKE_COLOR: &str = "#000";

/// Label colour when a land tile has no owner
const UNOWNED_LABEL_COLOR: &str = "#000";

/// Fill colour for a terrain type
pub fn terrain_color(terrain: Terrain) -> &'static str {
    match terrain {
        Terrain::Empty => "#03a9f4",
        Terrain::Sand => "#FFF176",
        Terrain::Grass => "#9ccc65",
        Terrain::Rock => "#e0e0e0",
    }
}

/// Label colour for a player
pub fn player_color(player: Player) -> &'static str {
    match player.index() {
        0 => "darkblue",
        1 => "darkgreen",
        2 => "darkred",
        _ => "darkorange",
    }
}

/// Soldier count drawn inside a tile
#[derive(Debug, Clone, PartialEq)]
pub struct TileLabel {
    pub text: String,
    pub color: &'static str,
    /// CSS font shorthand
    pub font: String,
    /// Text baseline start
    pub position: Vec2,
}

/// Everything needed to draw one tile
#[derive(Debug, Clone, PartialEq)]
pub struct TileShape {
    pub cell: HexCell,
    pub corners: [Vec2; 6],
    pub fill: &'static str,
    pub label: Option<TileLabel>,
}

/// Build the shape for a tile at `cell`
pub fn tile_shape(layout: &HexLayout, cell: HexCell, tile: &Tile) -> TileShape {
    TileShape {
        cell,
        corners: layout.corners(cell),
        fill: terrain_color(tile.terrain),
        label: tile_label(layout, cell, tile),
    }
}

fn tile_label(layout: &HexLayout, cell: HexCell, tile: &Tile) -> Option<TileLabel> {
    if tile.terrain.is_empty() {
        return None;
    }
    let soldiers = tile.soldiers?;

    let height = layout.height();
    let margin = height * 0.13;
    let origin = layout.cell_origin(cell);

    Some(TileLabel {
        text: soldiers.to_string(),
        color: tile.owner.map_or(UNOWNED_LABEL_COLOR, player_color),
        font: format!("bold {}px Arial", height.round() as u32),
        position: origin + Vec2::new(layout.width() / 4.0, height - margin),
    })
}

/// Shapes for the whole grid, column by column
pub fn map_shapes(layout: &HexLayout, grid: &HexGrid) -> Vec<TileShape> {
    let mut shapes = Vec::with_capacity(grid.cols() * grid.rows());
    for (cell, tile) in grid.tiles() {
        shapes.push(tile_shape(layout, cell, tile));
    }
    shapes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tile_has_no_label() {
        let layout = HexLayout::new(10.0);
        let shape = tile_shape(&layout, HexCell::new(0, 0), &Tile::default());
        assert_eq!(shape.fill, "#03a9f4");
        assert!(shape.label.is_none());
    }

    #[test]
    fn test_land_tile_label() {
        let layout = HexLayout::new(10.0);
        let mut tile = Tile::default();
        tile.cycle_terrain();
        tile.set_soldiers(4);
        tile.cycle_owner();

        let cell = HexCell::new(1, 0);
        let shape = tile_shape(&layout, cell, &tile);
        assert_eq!(shape.fill, "#FFF176");

        let label = shape.label.unwrap();
        assert_eq!(label.text, "4");
        assert_eq!(label.color, "darkgreen");
        assert_eq!(label.font, "bold 17px Arial");

        let origin = layout.cell_origin(cell);
        assert!((label.position.x - (origin.x + 5.0)).abs() < 1e-4);
        assert!((label.position.y - (origin.y + layout.height() * 0.87)).abs() < 1e-3);
    }

    #[test]
    fn test_unowned_land_label_is_black() {
        let layout = HexLayout::new(10.0);
        let tile = Tile {
            terrain: Terrain::Rock,
            owner: None,
            soldiers: Some(2),
        };
        let label = tile_shape(&layout, HexCell::new(0, 0), &tile).label.unwrap();
        assert_eq!(label.color, "#000");
    }

    #[test]
    fn test_map_shapes_cover_grid() {
        let layout = HexLayout::new(10.0);
        let grid = HexGrid::new(3, 2);
        let shapes = map_shapes(&layout, &grid);
        assert_eq!(shapes.len(), 6);
        assert_eq!(shapes[0].cell, HexCell::new(0, 0));
        assert_eq!(shapes[1].cell, HexCell::new(0, 1));
        assert_eq!(shapes[0].corners, layout.corners(HexCell::new(0, 0)));
    }
}
