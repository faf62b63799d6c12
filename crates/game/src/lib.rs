//! blokus-game - the game controller and its configuration.
//!
//! Commands validate, apply and record placements, hand the turn over and
//! queue AI turns; observations project the state for a renderer.

mod config;
mod controller;
mod error;
mod record;
mod view;

#[cfg(feature = "random-seed")]
pub use config::random_seed;
pub use config::GameConfig;
pub use controller::{AiOutcome, GameController, GameStatus, ScheduledAiTurn, Selection};
pub use error::{ConfigError, GameError};
pub use record::{MoveHistory, MoveRecord};
pub use view::{
    highlight_cells, GameView, HistoryEntryView, PieceView, PoolView, WORST_MOVES_SHOWN,
};

pub use blokus_analysis::{GameReview, LabelTally, MoveQuality, ReviewEntry};
pub use blokus_core::{Placement, Player, PoolPolicy, Shape};
pub use blokus_eval::{EvalBar, Mobility};
