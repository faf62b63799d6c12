use blokus_core::{GameState, Placement, Player, Shape};

/// Everything needed to take a placement back off the board.
/// The shape is the one actually placed, after any rotation or flip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndoInfo {
    pub player: Player,
    pub placement: Placement,
    pub shape: Shape,
    /// the player had not moved before this placement
    pub was_first: bool,
    /// the pool slot was consumed by this placement
    pub consumed: bool,
}

/// Apply a placement in place, returns undo info for reversal.
/// The caller validates first; only a missing or unavailable pool slot is refused.
pub fn apply_placement(
    state: &mut GameState,
    player: Player,
    placement: Placement,
) -> Option<UndoInfo> {
    let shape = state
        .pool(player)
        .available_shape(placement.piece_index)?
        .clone();

    state
        .board
        .place(&shape, placement.row, placement.col, player);
    let was_first = !state.has_played(player);
    state.set_has_played(player, true);
    let consumed = state.pool_mut(player).consume(placement.piece_index);

    Some(UndoInfo {
        player,
        placement,
        shape,
        was_first,
        consumed,
    })
}

/// Undo a placement - clears exactly the cells it covered and restores
/// the "has moved" flag and pool slot to their pre-move values
pub fn unapply_placement(state: &mut GameState, undo: &UndoInfo) {
    state
        .board
        .clear(&undo.shape, undo.placement.row, undo.placement.col);
    if undo.was_first {
        state.set_has_played(undo.player, false);
    }
    if undo.consumed {
        state.pool_mut(undo.player).restore(undo.placement.piece_index);
    }
}
