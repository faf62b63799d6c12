//! Blokus search crate - one-ply mobility search for move selection.

mod mobility;

pub use mobility::{BestMoves, MoveSelector};
