use blokus_core::{Placement, Player};
use serde::{Deserialize, Serialize};

use crate::classifier::MoveQuality;

/// One reviewed move, in history order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewEntry {
    /// 1-based move number
    pub number: usize,
    pub player: Player,
    pub placement: Placement,
    pub quality: MoveQuality,
    /// cyan-relative position eval after the move
    pub eval: f64,
}

impl std::fmt::Display for ReviewEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}. {} placed piece {} at ({},{}) - {} (Eval: {:.3})",
            self.number,
            self.player,
            self.placement.piece_index,
            self.placement.row,
            self.placement.col,
            self.quality,
            self.eval
        )
    }
}

/// How often each label was earned, best to worst.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelTally {
    pub counts: [u32; 7],
}

impl LabelTally {
    pub fn record(&mut self, quality: MoveQuality) {
        self.counts[quality.rank()] += 1;
    }

    pub fn count(&self, quality: MoveQuality) -> u32 {
        self.counts[quality.rank()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Percentage of moves labeled Good or better, 100 with no moves
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 100.0;
        }
        let sound: u32 = MoveQuality::ALL
            .iter()
            .filter(|q| q.is_sound())
            .map(|&q| self.count(q))
            .sum();
        100.0 * sound as f64 / total as f64
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameReview {
    pub entries: Vec<ReviewEntry>,
    /// indexed by [`Player::index`]
    pub tallies: [LabelTally; 2],
}

impl GameReview {
    pub fn from_entries(entries: Vec<ReviewEntry>) -> Self {
        let mut tallies = [LabelTally::default(); 2];
        for entry in &entries {
            tallies[entry.player.index()].record(entry.quality);
        }
        Self { entries, tallies }
    }

    pub fn tally(&self, player: Player) -> &LabelTally {
        &self.tallies[player.index()]
    }

    /// Worst-labeled moves of `player`, earliest first among equals
    pub fn worst_moves(&self, player: Player, limit: usize) -> Vec<&ReviewEntry> {
        let mut moves: Vec<&ReviewEntry> =
            self.entries.iter().filter(|e| e.player == player).collect();
        moves.sort_by_key(|e| (std::cmp::Reverse(e.quality.rank()), e.number));
        moves.truncate(limit);
        moves
    }

    /// Move log lines, one per entry
    pub fn log_lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}
