//! Pieces and per-player pools.
//!
//! Pools are index-stable: a slot never moves, consuming a piece only flips
//! its availability so recorded piece indices stay valid for undo.

use serde::{Deserialize, Serialize};

use crate::{Player, Shape};

/// Whether a placed piece leaves its owner's pool.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolPolicy {
    /// Pieces stay available after placement
    #[default]
    Reusable,
    /// A placed piece is unavailable until its move is undone
    Consumable,
}

#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub shape: Shape,
    pub owner: Player,
}

#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct PoolSlot {
    pub piece: Piece,
    pub available: bool,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PiecePool {
    owner: Player,
    policy: PoolPolicy,
    slots: Vec<PoolSlot>,
}

impl PiecePool {
    pub fn new(owner: Player, shapes: &[Shape], policy: PoolPolicy) -> Self {
        let slots = shapes
            .iter()
            .map(|shape| PoolSlot {
                piece: Piece {
                    shape: shape.clone(),
                    owner,
                },
                available: true,
            })
            .collect();
        Self {
            owner,
            policy,
            slots,
        }
    }

    #[inline]
    pub fn owner(&self) -> Player {
        self.owner
    }

    #[inline]
    pub fn policy(&self) -> PoolPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[PoolSlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&PoolSlot> {
        self.slots.get(index)
    }

    /// Shape at `index` if the slot exists and can be played
    pub fn available_shape(&self, index: usize) -> Option<&Shape> {
        self.slots
            .get(index)
            .filter(|slot| slot.available)
            .map(|slot| &slot.piece.shape)
    }

    /// Playable (index, shape) pairs in index order
    pub fn iter_available(&self) -> impl Iterator<Item = (usize, &Shape)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.available)
            .map(|(i, slot)| (i, &slot.piece.shape))
    }

    pub fn available_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.available).count()
    }

    /// Mark a slot as played. Returns true if the slot was actually consumed,
    /// which only happens under [`PoolPolicy::Consumable`].
    pub fn consume(&mut self, index: usize) -> bool {
        if self.policy == PoolPolicy::Reusable {
            return false;
        }
        match self.slots.get_mut(index) {
            Some(slot) if slot.available => {
                slot.available = false;
                true
            }
            _ => false,
        }
    }

    /// Make a consumed slot playable again
    pub fn restore(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.available = true;
        }
    }

    /// Swap in a transformed shape, e.g. after a rotation.
    /// Returns false when the slot does not exist.
    pub fn replace_shape(&mut self, index: usize, shape: Shape) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                slot.piece.shape = shape;
                true
            }
            None => false,
        }
    }
}
