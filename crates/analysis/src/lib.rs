//! Blokus analysis crate - move quality labels and game review.

mod classifier;
mod review;

pub use classifier::{classify, classify_move, MobilityDeltas, MoveCounts, MoveQuality};
pub use review::{GameReview, LabelTally, ReviewEntry};
