//! Move history - one frozen record per committed placement.

use blokus_analysis::{GameReview, MobilityDeltas, MoveCounts, MoveQuality, ReviewEntry};
use blokus_core::{Placement, Player, Shape};
use blokus_engine::UndoInfo;
use blokus_eval::Mobility;
use serde::{Deserialize, Serialize};

/// A committed placement with the mobility numbers around it.
/// Ratios, deltas, eval and label are computed once at commit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: Player,
    pub placement: Placement,
    /// exact shape placed, after any rotation or flip
    pub shape: Shape,
    /// this was the mover's first placement of the game
    pub first_placement: bool,
    /// the pool slot was marked used (consumable pools only)
    pub consumed: bool,
    pub counts: MoveCounts,
    pub deltas: MobilityDeltas,
    /// cyan-relative eval after the move, in [-1, 1]
    pub eval: f64,
    pub quality: MoveQuality,
}

impl MoveRecord {
    pub(crate) fn from_undo(
        undo: UndoInfo,
        history_index: usize,
        before: Mobility,
        after: Mobility,
    ) -> Self {
        let (you_before, opp_before) = before.perspective(undo.player);
        let (you_after, opp_after) = after.perspective(undo.player);
        let counts = MoveCounts {
            you_before,
            opp_before,
            you_after,
            opp_after,
        };
        let deltas = MobilityDeltas::from_counts(&counts);
        Self {
            player: undo.player,
            placement: undo.placement,
            shape: undo.shape,
            first_placement: undo.was_first,
            consumed: undo.consumed,
            counts,
            deltas,
            eval: after.position_eval(),
            quality: blokus_analysis::classify_move(history_index, &deltas),
        }
    }

    /// Both sides' legal move counts after this move
    pub fn mobility_after(&self) -> Mobility {
        Mobility::from_perspective(self.player, self.counts.you_after, self.counts.opp_after)
    }

    pub fn mobility_before(&self) -> Mobility {
        Mobility::from_perspective(self.player, self.counts.you_before, self.counts.opp_before)
    }

    pub(crate) fn undo_info(&self) -> UndoInfo {
        UndoInfo {
            player: self.player,
            placement: self.placement,
            shape: self.shape.clone(),
            was_first: self.first_placement,
            consumed: self.consumed,
        }
    }

    /// Review line for this record as move `number` (1-based)
    pub fn review_entry(&self, number: usize) -> ReviewEntry {
        ReviewEntry {
            number,
            player: self.player,
            placement: self.placement,
            quality: self.quality,
            eval: self.eval,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter()
    }

    pub(crate) fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    pub(crate) fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    /// Counts for the next move: the last record's after-counts when one
    /// exists, since nothing has changed on the board since then
    pub fn carried_mobility(&self) -> Option<Mobility> {
        self.last().map(MoveRecord::mobility_after)
    }

    pub fn review(&self) -> GameReview {
        GameReview::from_entries(
            self.records
                .iter()
                .enumerate()
                .map(|(i, record)| record.review_entry(i + 1))
                .collect(),
        )
    }

    pub fn log_lines(&self) -> Vec<String> {
        self.review().log_lines()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undo(player: Player, was_first: bool) -> UndoInfo {
        UndoInfo {
            player,
            placement: Placement::new(2, 3, 4),
            shape: Shape::single(),
            was_first,
            consumed: false,
        }
    }

    #[test]
    fn test_counts_are_mover_relative() {
        // red moved: cyan 10 -> 6, red 10 -> 14
        let record = MoveRecord::from_undo(
            undo(Player::Red, false),
            3,
            Mobility::new(10, 10),
            Mobility::new(6, 14),
        );
        assert_eq!(record.counts.you_before, 10);
        assert_eq!(record.counts.you_after, 14);
        assert_eq!(record.counts.opp_after, 6);
        assert!((record.deltas.delta_you - 0.2).abs() < 1e-12);
        assert_eq!(record.quality, MoveQuality::Good);
        assert_eq!(record.mobility_after(), Mobility::new(6, 14));
        assert_eq!(record.mobility_before(), Mobility::new(10, 10));
        // cyan-relative eval: cyan share 0.3
        assert!((record.eval - -0.4).abs() < 1e-12);
    }

    #[test]
    fn test_first_record_is_good() {
        let record = MoveRecord::from_undo(
            undo(Player::Cyan, true),
            0,
            Mobility::new(40, 40),
            Mobility::new(0, 40),
        );
        assert_eq!(record.quality, MoveQuality::Good);
        assert!(record.first_placement);
    }

    #[test]
    fn test_history_review_numbers_from_one() {
        let mut history = MoveHistory::new();
        assert_eq!(history.carried_mobility(), None);
        history.push(MoveRecord::from_undo(
            undo(Player::Cyan, true),
            0,
            Mobility::new(4, 4),
            Mobility::new(3, 4),
        ));
        assert_eq!(history.carried_mobility(), Some(Mobility::new(3, 4)));
        let lines = history.log_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("1. cyan placed piece 2 at (3,4) - Good (Eval: "));
        assert_eq!(history.review().tally(Player::Cyan).total(), 1);
    }

    #[test]
    fn test_undo_info_round_trip() {
        let info = undo(Player::Red, true);
        let record = MoveRecord::from_undo(info.clone(), 0, Mobility::new(1, 1), Mobility::new(1, 1));
        assert_eq!(record.undo_info(), info);
    }
}
