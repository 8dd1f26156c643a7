//! Input events the editor reacts to

use glam::Vec2;

use crate::consts::MAX_SOLDIERS;

/// A pointer or keyboard event, with positions in canvas pixels
#[derive(Debug, Clone, PartialEq)]
pub enum EditorInput {
    /// Pointer moved; remembered as the keyboard target
    PointerMove(Vec2),
    /// Primary (left) button: cycle terrain
    PrimaryClick(Vec2),
    /// Secondary (right) button: cycle owner
    SecondaryClick(Vec2),
    /// Key pressed over the last pointer position
    Key(String),
}

/// Soldier count typed by a key, if it is a single digit 1..=9
pub fn soldier_key(key: &str) -> Option<u8> {
    let mut chars = key.chars();
    let digit = chars.next()?.to_digit(10)? as u8;
    if chars.next().is_some() {
        return None;
    }
    (1..=MAX_SOLDIERS).contains(&digit).then_some(digit)
}
