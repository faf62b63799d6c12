//! blokus-wasm - WebAssembly entry points and bindings for browser execution.
//!
//! The page owns rendering and input. It drives [`JsGame`] through commands
//! and reads JSON-shaped views back; a scheduled AI turn is run by the page
//! after waiting `pending_ai_delay()` milliseconds.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use blokus_game::{
    highlight_cells, AiOutcome, GameConfig, GameController, GameStatus, MoveRecord, Placement,
    Player, PoolPolicy, PoolView, WORST_MOVES_SHOWN,
};

#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[derive(Serialize, Deserialize)]
pub struct JsPlacement {
    pub piece_index: usize,
    pub row: usize,
    pub col: usize,
}

impl From<Placement> for JsPlacement {
    fn from(mv: Placement) -> Self {
        Self {
            piece_index: mv.piece_index,
            row: mv.row,
            col: mv.col,
        }
    }
}

/// One history entry as the move log shows it
#[derive(Serialize, Deserialize)]
pub struct JsMoveRecord {
    pub player: String,
    pub piece_index: usize,
    pub row: usize,
    pub col: usize,
    pub label: String,
    pub eval: f64,
    pub you_legal_before: usize,
    pub opp_legal_before: usize,
    pub you_legal_after: usize,
    pub opp_legal_after: usize,
    pub ratio_before: f64,
    pub ratio_after: f64,
    pub delta_you: f64,
    pub delta_opp: f64,
}

impl From<&MoveRecord> for JsMoveRecord {
    fn from(r: &MoveRecord) -> Self {
        Self {
            player: r.player.name().to_string(),
            piece_index: r.placement.piece_index,
            row: r.placement.row,
            col: r.placement.col,
            label: r.quality.label().to_string(),
            eval: r.eval,
            you_legal_before: r.counts.you_before,
            opp_legal_before: r.counts.opp_before,
            you_legal_after: r.counts.you_after,
            opp_legal_after: r.counts.opp_after,
            ratio_before: r.deltas.ratio_before,
            ratio_after: r.deltas.ratio_after,
            delta_you: r.deltas.delta_you,
            delta_opp: r.deltas.delta_opp,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct JsAiResult {
    /// None when the AI had no move and resigned
    pub placement: Option<JsPlacement>,
    pub winner: Option<String>,
}

#[wasm_bindgen]
pub struct JsGame {
    inner: GameController,
}

#[wasm_bindgen]
impl JsGame {
    /// `seed` blank or missing draws from `Math.random`. `ai_player` is
    /// "cyan", "red" or "none".
    #[wasm_bindgen(constructor)]
    pub fn new(
        board_size: usize,
        seed: Option<String>,
        ai_player: Option<String>,
    ) -> Result<JsGame, JsError> {
        let ai_player = match ai_player.as_deref() {
            None | Some("red") => Some(Player::Red),
            Some("cyan") => Some(Player::Cyan),
            Some("none") => None,
            Some(other) => return Err(JsError::new(&format!("unknown side: {other}"))),
        };
        let config = GameConfig {
            board_size,
            seed,
            ai_player,
            ..GameConfig::default()
        };
        Ok(Self::from_config(config))
    }

    /// Start from a TOML config string
    pub fn from_toml(text: &str) -> Result<JsGame, JsError> {
        Ok(Self::from_config(GameConfig::from_toml_str(text)?))
    }

    /// Switch pool policy. Starts the game over on the same seed.
    pub fn set_consumable_pools(&mut self, consumable: bool) {
        let policy = if consumable {
            PoolPolicy::Consumable
        } else {
            PoolPolicy::Reusable
        };
        let config = self.inner.config().clone().with_pool_policy(policy);
        self.inner = GameController::with_seed(config, self.inner.seed());
    }

    pub fn restart(&mut self) {
        self.inner.restart();
    }

    // ---- commands ----

    pub fn submit_placement(
        &mut self,
        row: usize,
        col: usize,
        piece_index: usize,
    ) -> Result<JsValue, JsError> {
        let record = JsMoveRecord::from(self.inner.submit_placement(row, col, piece_index)?);
        Ok(serde_wasm_bindgen::to_value(&record)?)
    }

    pub fn undo(&mut self) -> Result<JsValue, JsError> {
        let record = self.inner.undo()?;
        Ok(serde_wasm_bindgen::to_value(&JsMoveRecord::from(&record))?)
    }

    pub fn select_piece(&mut self, player: &str, index: usize) -> Result<(), JsError> {
        self.inner.select_piece(parse_player(player)?, index)?;
        Ok(())
    }

    /// Rotated shape as rows of booleans
    pub fn rotate_selected(&mut self) -> Result<JsValue, JsError> {
        let shape = self.inner.rotate_selected()?;
        Ok(serde_wasm_bindgen::to_value(shape)?)
    }

    pub fn flip_selected(&mut self) -> Result<JsValue, JsError> {
        let shape = self.inner.flip_selected()?;
        Ok(serde_wasm_bindgen::to_value(shape)?)
    }

    /// Queue the AI for the side to move, returns the delay to wait
    pub fn request_ai_turn(&mut self) -> Result<u32, JsError> {
        Ok(self.inner.request_ai_turn()?.delay_ms)
    }

    pub fn run_ai_turn(&mut self) -> Result<JsValue, JsError> {
        let result = match self.inner.run_ai_turn()? {
            AiOutcome::Placed(mv) => JsAiResult {
                placement: Some(mv.into()),
                winner: self.inner.status().winner().map(|p| p.name().to_string()),
            },
            AiOutcome::Resigned { winner } => JsAiResult {
                placement: None,
                winner: Some(winner.name().to_string()),
            },
        };
        Ok(serde_wasm_bindgen::to_value(&result)?)
    }

    // ---- observations ----

    /// Milliseconds to wait before `run_ai_turn`, undefined when nothing is queued
    pub fn pending_ai_delay(&self) -> Option<u32> {
        self.inner.pending_ai_turn().map(|turn| turn.delay_ms)
    }

    pub fn seed(&self) -> u32 {
        self.inner.seed()
    }

    pub fn board_size(&self) -> usize {
        self.inner.state().board.size()
    }

    /// "cyan", "red" or "over"
    pub fn status(&self) -> String {
        match self.inner.status() {
            GameStatus::CyanToMove => Player::Cyan.name().to_string(),
            GameStatus::RedToMove => Player::Red.name().to_string(),
            GameStatus::GameOver { .. } => "over".to_string(),
        }
    }

    pub fn winner(&self) -> Option<String> {
        self.inner.status().winner().map(|p| p.name().to_string())
    }

    /// Cell owners row-major: 0 empty, 1 cyan, 2 red
    pub fn cells(&self) -> Vec<u8> {
        self.inner
            .state()
            .board
            .rows()
            .flat_map(|row| row.iter())
            .map(|cell| match cell {
                None => 0,
                Some(Player::Cyan) => 1,
                Some(Player::Red) => 2,
            })
            .collect()
    }

    /// [cyan percent, red percent]
    pub fn eval_bar(&self) -> Vec<f64> {
        let bar = self.inner.eval_bar();
        vec![bar.cyan_percent, bar.red_percent]
    }

    /// Percent of Good-or-better moves for one side, 100 before it has moved
    pub fn accuracy(&self, player: &str) -> Result<f64, JsError> {
        let player = parse_player(player)?;
        Ok(self.inner.review().tally(player).accuracy())
    }

    /// Move numbers of one side's worst-labeled moves, worst first
    pub fn worst_moves(&self, player: &str) -> Result<Vec<u32>, JsError> {
        let player = parse_player(player)?;
        Ok(self
            .inner
            .review()
            .worst_moves(player, WORST_MOVES_SHOWN)
            .into_iter()
            .map(|entry| entry.number as u32)
            .collect())
    }

    pub fn move_log(&self) -> Vec<String> {
        self.inner.history().log_lines()
    }

    pub fn history(&self) -> JsValue {
        let records: Vec<JsMoveRecord> =
            self.inner.history().iter().map(JsMoveRecord::from).collect();
        serde_wasm_bindgen::to_value(&records).unwrap_or_else(|_| JsValue::NULL)
    }

    /// Available shapes of one side as `{ index, shape, available }` entries
    pub fn pool(&self, player: &str) -> Result<JsValue, JsError> {
        let view = PoolView::of(&self.inner, parse_player(player)?);
        Ok(serde_wasm_bindgen::to_value(&view.pieces)?)
    }

    pub fn selected_shape(&self) -> JsValue {
        self.inner
            .selected_shape()
            .and_then(|shape| serde_wasm_bindgen::to_value(shape).ok())
            .unwrap_or(JsValue::NULL)
    }

    pub fn best_candidates(&self) -> JsValue {
        let moves: Vec<JsPlacement> = self
            .inner
            .best_candidates()
            .into_iter()
            .map(JsPlacement::from)
            .collect();
        serde_wasm_bindgen::to_value(&moves).unwrap_or_else(|_| JsValue::NULL)
    }

    /// Best candidate origins flattened as [row, col, row, col, ...]
    pub fn highlight_cells(&self) -> Vec<u32> {
        highlight_cells(&self.inner.best_candidates())
            .into_iter()
            .flat_map(|(r, c)| [r as u32, c as u32])
            .collect()
    }

    /// Full snapshot for a redraw
    pub fn view(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.view()).unwrap_or_else(|_| JsValue::NULL)
    }
}

impl JsGame {
    fn from_config(config: GameConfig) -> Self {
        let seed = config.resolve_seed(random_seed);
        Self {
            inner: GameController::with_seed(config, seed),
        }
    }
}

/// Uniform seed in `[0, 1e9)` from the page's generator
fn random_seed() -> u32 {
    (js_sys::Math::random() * GameConfig::RANDOM_SEED_BOUND as f64).floor() as u32
}

fn parse_player(name: &str) -> Result<Player, JsError> {
    match name {
        "cyan" => Ok(Player::Cyan),
        "red" => Ok(Player::Red),
        other => Err(JsError::new(&format!("unknown player: {other}"))),
    }
}
