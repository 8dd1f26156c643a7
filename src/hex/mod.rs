//! Hexagon coordinate geometry
//!
//! Flat-top hexagons in an offset-column layout: odd columns sit half a hex
//! lower than even ones. Everything here is pure arithmetic with no platform
//! dependencies, so it is tested natively.

pub mod layout;
pub mod triangle;

pub use layout::{HexCell, HexLayout};
pub use triangle::{point_in_triangle, sign};
