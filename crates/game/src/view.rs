//! Read-only snapshots of a game for rendering. Nothing here feeds back into play.

use blokus_analysis::LabelTally;
use blokus_core::{Placement, Player, Shape};
use blokus_eval::{EvalBar, Mobility};
use serde::Serialize;

use crate::controller::{GameController, GameStatus, ScheduledAiTurn, Selection};
use crate::record::MoveRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieceView {
    pub index: usize,
    pub shape: Shape,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoolView {
    pub player: Player,
    pub pieces: Vec<PieceView>,
}

/// Worst moves listed per side in a snapshot
pub const WORST_MOVES_SHOWN: usize = 3;

/// One history entry with its log line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntryView {
    pub number: usize,
    pub text: String,
    pub record: MoveRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameView {
    pub board_size: usize,
    /// cell owners, row-major
    pub board: Vec<Vec<Option<Player>>>,
    pub status: GameStatus,
    pub turn: Player,
    pub pools: Vec<PoolView>,
    pub mobility: Mobility,
    pub eval_bar: EvalBar,
    pub history: Vec<HistoryEntryView>,
    /// label tallies, cyan then red
    pub tallies: [LabelTally; 2],
    /// percent of Good-or-better moves, cyan then red
    pub accuracy: [f64; 2],
    /// move numbers of each side's worst-labeled moves, cyan then red
    pub worst_moves: [Vec<usize>; 2],
    pub selection: Option<Selection>,
    pub pending_ai_turn: Option<ScheduledAiTurn>,
    pub seed: u32,
}

impl PoolView {
    pub fn of(controller: &GameController, player: Player) -> Self {
        let pieces = controller
            .state()
            .pool(player)
            .slots()
            .iter()
            .enumerate()
            .map(|(index, slot)| PieceView {
                index,
                shape: slot.piece.shape.clone(),
                available: slot.available,
            })
            .collect();
        Self { player, pieces }
    }
}

impl GameView {
    /// Full snapshot. Counts both sides' mobility, so not free on large boards.
    pub fn capture(controller: &GameController) -> Self {
        let state = controller.state();
        let mobility = controller.mobility();
        let review = controller.review();
        let history = controller
            .history()
            .iter()
            .zip(&review.entries)
            .map(|(record, entry)| HistoryEntryView {
                number: entry.number,
                text: entry.to_string(),
                record: record.clone(),
            })
            .collect();
        let worst = |player: Player| -> Vec<usize> {
            review
                .worst_moves(player, WORST_MOVES_SHOWN)
                .into_iter()
                .map(|entry| entry.number)
                .collect()
        };

        Self {
            board_size: state.board.size(),
            board: state.board.rows().map(<[Option<Player>]>::to_vec).collect(),
            status: controller.status(),
            turn: controller.turn(),
            pools: Player::ALL
                .iter()
                .map(|&player| PoolView::of(controller, player))
                .collect(),
            mobility,
            eval_bar: mobility.eval_bar(),
            history,
            accuracy: review.tallies.map(|tally| tally.accuracy()),
            worst_moves: [worst(Player::Cyan), worst(Player::Red)],
            tallies: review.tallies,
            selection: controller.selection(),
            pending_ai_turn: controller.pending_ai_turn(),
            seed: controller.seed(),
        }
    }
}

/// Distinct origin cells of `candidates`, for highlighting on the board
pub fn highlight_cells(candidates: &[Placement]) -> Vec<(usize, usize)> {
    let mut cells: Vec<(usize, usize)> = candidates.iter().map(|mv| (mv.row, mv.col)).collect();
    cells.sort_unstable();
    cells.dedup();
    cells
}
