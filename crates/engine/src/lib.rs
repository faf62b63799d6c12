//! blokus-engine - placement legality, apply/undo and legal move enumeration.
//!
//! Enumeration is anchor-driven and optionally parallel (`rayon` feature),
//! with an exhaustive reference scan kept alongside for verification.

pub mod anchors;
pub mod apply;
pub mod movegen;
pub mod validator;

pub use anchors::anchor_cells;
pub use apply::{apply_placement, unapply_placement, UndoInfo};
pub use movegen::{
    count_legal_moves, count_legal_moves_exhaustive, enumerate_legal_moves,
    enumerate_legal_moves_exhaustive,
};
pub use validator::{check_cells, check_placement, is_legal, Violation};
