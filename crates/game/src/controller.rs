//! The game state machine.
//!
//! The controller owns the board, both pools, the history and the seeded
//! generator. UI adapters drive it through commands and read it through
//! observations; nothing else holds on to its state.
//!
//! An AI turn is never run from inside another command. A committed move that
//! leaves the AI to play queues a [`ScheduledAiTurn`]; the adapter waits the
//! advisory delay and calls [`GameController::run_ai_turn`]. Until then every
//! other command is rejected with [`GameError::AiTurnPending`].

use blokus_analysis::GameReview;
use blokus_core::{GameState, Placement, Player, SeededRng, Shape, ShapeCatalog};
use blokus_engine::{apply_placement, is_legal, unapply_placement};
use blokus_eval::{EvalBar, Mobility};
use blokus_search::MoveSelector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::record::{MoveHistory, MoveRecord};
use crate::view::GameView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GameStatus {
    CyanToMove,
    RedToMove,
    GameOver { winner: Player },
}

impl GameStatus {
    pub fn to_move(player: Player) -> Self {
        match player {
            Player::Cyan => Self::CyanToMove,
            Player::Red => Self::RedToMove,
        }
    }

    /// None once the game is over
    pub fn active_player(self) -> Option<Player> {
        match self {
            Self::CyanToMove => Some(Player::Cyan),
            Self::RedToMove => Some(Player::Red),
            Self::GameOver { .. } => None,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Self::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn is_over(self) -> bool {
        matches!(self, Self::GameOver { .. })
    }
}

/// An AI move waiting to be run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledAiTurn {
    pub player: Player,
    pub delay_ms: u32,
}

/// The pool slot staged for rotation and flipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub player: Player,
    pub index: usize,
}

/// Result of running a scheduled AI turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiOutcome {
    Placed(Placement),
    /// the AI had no legal move, the other side won
    Resigned { winner: Player },
}

#[derive(Debug, Clone)]
pub struct GameController {
    config: GameConfig,
    seed: u32,
    rng: SeededRng,
    catalog_len: usize,
    state: GameState,
    history: MoveHistory,
    selection: Option<Selection>,
    status: GameStatus,
    pending_ai: Option<ScheduledAiTurn>,
    selector: MoveSelector,
}

impl GameController {
    /// New game, drawing a random seed when the config has no seed text
    #[cfg(feature = "random-seed")]
    pub fn new(config: GameConfig) -> Self {
        let seed = config.resolve_seed(crate::config::random_seed);
        Self::with_seed(config, seed)
    }

    /// New game from an already resolved numeric seed. The catalog is drawn
    /// first, the AI's tie-breaks continue on the same stream.
    pub fn with_seed(config: GameConfig, seed: u32) -> Self {
        let config = config.clamped();
        let mut rng = SeededRng::new(seed);
        let catalog = ShapeCatalog::generate(&mut rng);
        let state = GameState::new(config.board_size, catalog.shapes(), config.pool_policy);
        info!(
            board_size = config.board_size,
            seed,
            pieces = catalog.len(),
            "new game"
        );

        let mut controller = Self {
            seed,
            rng,
            catalog_len: catalog.len(),
            state,
            history: MoveHistory::new(),
            selection: None,
            status: GameStatus::CyanToMove,
            pending_ai: None,
            selector: MoveSelector::new(),
            config,
        };
        controller.schedule_ai_if_due();
        controller
    }

    /// Start over from the same config and seed, so the catalog repeats
    pub fn restart(&mut self) {
        *self = Self::with_seed(self.config.clone(), self.seed);
    }

    // ---- commands ----

    /// Place piece `piece_index` of the side to move with its top-left at (row, col)
    pub fn submit_placement(
        &mut self,
        row: usize,
        col: usize,
        piece_index: usize,
    ) -> Result<&MoveRecord, GameError> {
        let player = self.human_player()?;
        self.commit(player, Placement::new(piece_index, row, col))
    }

    /// Take back the most recent move, whoever made it. Never schedules the AI.
    pub fn undo(&mut self) -> Result<MoveRecord, GameError> {
        self.accepting_player()?;
        let record = self.history.pop().ok_or(GameError::NothingToUndo)?;

        unapply_placement(&mut self.state, &record.undo_info());
        self.state.turn = record.player;
        self.status = GameStatus::to_move(record.player);
        self.selection = None;
        debug!(player = %record.player, placement = %record.placement, "undo");
        Ok(record)
    }

    pub fn select_piece(&mut self, player: Player, index: usize) -> Result<(), GameError> {
        let active = self.human_player()?;
        if player != active {
            return Err(GameError::NotYourTurn { player });
        }
        self.check_slot(player, index)?;
        self.selection = Some(Selection { player, index });
        debug!(%player, index, "piece selected");
        Ok(())
    }

    /// Rotate the selected piece 90 degrees clockwise in its pool
    pub fn rotate_selected(&mut self) -> Result<&Shape, GameError> {
        self.transform_selected(Shape::rotate_cw, "rotated")
    }

    /// Mirror the selected piece left-right in its pool
    pub fn flip_selected(&mut self) -> Result<&Shape, GameError> {
        self.transform_selected(Shape::flip_horizontal, "flipped")
    }

    /// Queue the AI to move for the side to move, used to resume after an undo
    pub fn request_ai_turn(&mut self) -> Result<ScheduledAiTurn, GameError> {
        let player = self.accepting_player()?;
        let turn = ScheduledAiTurn {
            player,
            delay_ms: self.config.ai_delay_ms,
        };
        self.pending_ai = Some(turn);
        debug!(%player, "ai turn requested");
        Ok(turn)
    }

    /// Run the queued AI turn to completion
    pub fn run_ai_turn(&mut self) -> Result<AiOutcome, GameError> {
        let turn = self.pending_ai.take().ok_or(GameError::NoPendingAiTurn)?;
        let player = turn.player;

        let Some(choice) = self.selector.select_move(&self.state, player, &mut self.rng) else {
            let winner = player.opponent();
            self.finish(winner);
            return Ok(AiOutcome::Resigned { winner });
        };

        match self.commit(player, choice).map(|_| ()) {
            Ok(()) => Ok(AiOutcome::Placed(choice)),
            Err(err) => {
                self.pending_ai = Some(turn);
                Err(err)
            }
        }
    }

    // ---- observations ----

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog_len
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn turn(&self) -> Player {
        self.state.turn
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        let selection = self.selection?;
        self.state
            .pool(selection.player)
            .slot(selection.index)
            .map(|slot| &slot.piece.shape)
    }

    pub fn pending_ai_turn(&self) -> Option<ScheduledAiTurn> {
        self.pending_ai
    }

    pub fn mobility(&self) -> Mobility {
        Mobility::measure(&self.state)
    }

    pub fn eval_bar(&self) -> EvalBar {
        self.mobility().eval_bar()
    }

    /// Every tied-best placement for the side to move, no randomness drawn
    pub fn best_candidates(&self) -> Vec<Placement> {
        match self.status.active_player() {
            Some(player) => self.selector.find_best_moves(&self.state, player).moves,
            None => Vec::new(),
        }
    }

    pub fn review(&self) -> GameReview {
        self.history.review()
    }

    pub fn view(&self) -> GameView {
        GameView::capture(self)
    }

    // ---- internals ----

    /// Side to move, if commands are accepted right now
    fn accepting_player(&self) -> Result<Player, GameError> {
        if let GameStatus::GameOver { winner } = self.status {
            return Err(GameError::GameOver { winner });
        }
        if let Some(turn) = self.pending_ai {
            return Err(GameError::AiTurnPending {
                player: turn.player,
            });
        }
        Ok(self.state.turn)
    }

    /// Side to move, unless the AI controls it
    fn human_player(&self) -> Result<Player, GameError> {
        let player = self.accepting_player()?;
        if self.config.ai_player == Some(player) {
            return Err(GameError::NotYourTurn { player });
        }
        Ok(player)
    }

    fn check_slot(&self, player: Player, index: usize) -> Result<(), GameError> {
        let pool = self.state.pool(player);
        match pool.slot(index) {
            None => Err(GameError::PieceIndexOutOfRange {
                player,
                index,
                len: pool.len(),
            }),
            Some(slot) if !slot.available => Err(GameError::PieceUnavailable { player, index }),
            Some(_) => Ok(()),
        }
    }

    fn transform_selected(
        &mut self,
        transform: fn(&Shape) -> Shape,
        what: &'static str,
    ) -> Result<&Shape, GameError> {
        self.human_player()?;
        let selection = self.selection.ok_or(GameError::NoSelection)?;
        let pool = self.state.pool_mut(selection.player);
        let shape = pool
            .slot(selection.index)
            .map(|slot| transform(&slot.piece.shape))
            .ok_or(GameError::NoSelection)?;
        pool.replace_shape(selection.index, shape);
        debug!(player = %selection.player, index = selection.index, "piece {}", what);
        self.selected_shape().ok_or(GameError::NoSelection)
    }

    /// Validate, apply, record, then hand the turn over
    fn commit(&mut self, player: Player, placement: Placement) -> Result<&MoveRecord, GameError> {
        self.check_slot(player, placement.piece_index)?;
        let pool = self.state.pool(player);
        let legal = pool
            .available_shape(placement.piece_index)
            .is_some_and(|shape| {
                is_legal(
                    &self.state.board,
                    shape,
                    placement.row,
                    placement.col,
                    player,
                    self.state.has_played(player),
                )
            });
        if !legal {
            return Err(GameError::InvalidPlacement {
                player,
                piece_index: placement.piece_index,
                row: placement.row,
                col: placement.col,
            });
        }

        let before = self
            .history
            .carried_mobility()
            .unwrap_or_else(|| Mobility::measure(&self.state));
        let undo = apply_placement(&mut self.state, player, placement).ok_or(
            GameError::PieceUnavailable {
                player,
                index: placement.piece_index,
            },
        )?;
        let after = Mobility::measure(&self.state);
        let index = self.history.len();
        let record = MoveRecord::from_undo(undo, index, before, after);
        debug!(
            %player,
            %placement,
            label = %record.quality,
            eval = record.eval,
            "placement committed"
        );
        self.history.push(record);

        let next = player.opponent();
        self.state.turn = next;
        self.selection = None;
        if after.of(next) == 0 {
            self.finish(player);
        } else {
            self.status = GameStatus::to_move(next);
            self.schedule_ai_if_due();
        }

        Ok(&self.history.records()[index])
    }

    fn finish(&mut self, winner: Player) {
        self.status = GameStatus::GameOver { winner };
        self.pending_ai = None;
        self.selection = None;
        info!(
            %winner,
            loser = %winner.opponent(),
            moves = self.history.len(),
            "game over, no legal moves left"
        );
    }

    fn schedule_ai_if_due(&mut self) {
        let Some(player) = self.status.active_player() else {
            return;
        };
        if self.config.ai_player == Some(player) {
            let turn = ScheduledAiTurn {
                player,
                delay_ms: self.config.ai_delay_ms,
            };
            debug!(%player, delay_ms = turn.delay_ms, "ai turn scheduled");
            self.pending_ai = Some(turn);
        }
    }
}
