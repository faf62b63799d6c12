//! Blokus core crate - fundamental types for the polyomino placement game.

mod board;
mod catalog;
mod moves;
mod piece;
mod player;
mod rng;
mod shape;
mod state;

pub use board::{clamp_board_size, Board, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use catalog::{ShapeCatalog, BLOB_ATTEMPTS, FIXED_SHAPE_COUNT};
pub use moves::Placement;
pub use piece::{Piece, PiecePool, PoolPolicy, PoolSlot};
pub use player::Player;
pub use rng::{hash_seed, SeededRng};
pub use shape::{Shape, ShapeCells};
pub use state::GameState;
