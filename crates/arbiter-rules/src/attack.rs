//! Square-attack detection over attack geometry alone.
//!
//! Attackers are never asked whether moving would expose their own king, so
//! check detection does not recurse into move validation.

use arbiter_core::{Color, Position, Square};

use crate::movement;

/// Iterate over the squares of `by` pieces attacking `target`.
pub fn attackers(position: &Position, target: Square, by: Color) -> impl Iterator<Item = Square> + '_ {
    position
        .pieces()
        .filter(move |&(from, piece)| {
            piece.color() == by && movement::attacks(piece, from, target, position)
        })
        .map(|(from, _)| from)
}

/// Return `true` if any piece of `by` attacks `target`.
pub fn is_attacked(position: &Position, target: Square, by: Color) -> bool {
    attackers(position, target, by).next().is_some()
}
