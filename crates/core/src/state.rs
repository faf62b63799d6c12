//! Game state representation.

use serde::{Deserialize, Serialize};

use crate::{Board, PiecePool, Player, PoolPolicy, Shape};

/// Board, both pools, the per-player "has moved" flags and whose turn it is.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub pools: [PiecePool; 2],
    pub has_played: [bool; 2],
    pub turn: Player,
}

impl GameState {
    /// Fresh game: empty board, both pools built from the same catalog, cyan first
    pub fn new(board_size: usize, catalog: &[Shape], policy: PoolPolicy) -> Self {
        Self {
            board: Board::new(board_size),
            pools: [
                PiecePool::new(Player::Cyan, catalog, policy),
                PiecePool::new(Player::Red, catalog, policy),
            ],
            has_played: [false; 2],
            turn: Player::Cyan,
        }
    }

    #[inline]
    pub fn pool(&self, player: Player) -> &PiecePool {
        &self.pools[player.index()]
    }

    #[inline]
    pub fn pool_mut(&mut self, player: Player) -> &mut PiecePool {
        &mut self.pools[player.index()]
    }

    #[inline]
    pub fn has_played(&self, player: Player) -> bool {
        self.has_played[player.index()]
    }

    #[inline]
    pub fn set_has_played(&mut self, player: Player, value: bool) {
        self.has_played[player.index()] = value;
    }
}
