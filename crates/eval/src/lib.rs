//! Blokus eval crate - mobility balance between the two players.
//!
//! The one canonical metric is a player's share of the combined mobility,
//! `x / (x + y)`, with an even split when neither side can move.

use blokus_core::{GameState, Player};
use blokus_engine::count_legal_moves;
use serde::{Deserialize, Serialize};

/// `x / (x + y)`, 0.5 when both are zero
#[inline]
pub fn share(x: usize, y: usize) -> f64 {
    let total = x + y;
    if total == 0 {
        0.5
    } else {
        x as f64 / total as f64
    }
}

/// Legal move counts for both players in one position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mobility {
    pub cyan: usize,
    pub red: usize,
}

impl Mobility {
    pub fn new(cyan: usize, red: usize) -> Self {
        Self { cyan, red }
    }

    /// Count both sides on the current board
    pub fn measure(state: &GameState) -> Self {
        Self {
            cyan: count_legal_moves(state, Player::Cyan),
            red: count_legal_moves(state, Player::Red),
        }
    }

    /// Build from a mover-relative (you, opp) pair
    pub fn from_perspective(player: Player, you: usize, opp: usize) -> Self {
        match player {
            Player::Cyan => Self::new(you, opp),
            Player::Red => Self::new(opp, you),
        }
    }

    #[inline]
    pub fn of(&self, player: Player) -> usize {
        match player {
            Player::Cyan => self.cyan,
            Player::Red => self.red,
        }
    }

    /// (player's count, opponent's count)
    #[inline]
    pub fn perspective(&self, player: Player) -> (usize, usize) {
        (self.of(player), self.of(player.opponent()))
    }

    pub fn share(&self, player: Player) -> f64 {
        let (you, opp) = self.perspective(player);
        share(you, opp)
    }

    /// Percentages for the evaluation bar, 50/50 when both are zero
    pub fn eval_bar(&self) -> EvalBar {
        let cyan_percent = self.share(Player::Cyan) * 100.0;
        EvalBar {
            cyan_percent,
            red_percent: 100.0 - cyan_percent,
        }
    }

    /// Cyan-relative eval in [-1, 1], 0 is balanced
    pub fn position_eval(&self) -> f64 {
        (self.share(Player::Cyan) - 0.5) * 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvalBar {
    pub cyan_percent: f64,
    pub red_percent: f64,
}
