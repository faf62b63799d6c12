//! placement legality - bounds, overlap, corner rule, diagonal-only contact
//! pure predicates, never touch the board

use blokus_core::{Board, Player, Shape};

pub(crate) const ORTHOGONAL: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONAL: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// First rule a rejected placement broke, in checking order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Violation {
    OutOfBounds,
    Overlap,
    /// first placement covers none of the four corners
    MissingCorner,
    /// shares an edge with one of the player's own cells
    EdgeContact,
    /// touches none of the player's own cells corner-to-corner
    NoCornerContact,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Violation::OutOfBounds => "piece leaves the board",
            Violation::Overlap => "cell already occupied",
            Violation::MissingCorner => "first piece must cover a board corner",
            Violation::EdgeContact => "piece touches its own color along an edge",
            Violation::NoCornerContact => "piece must touch its own color at a corner",
        };
        f.write_str(msg)
    }
}

/// Is `shape` at (row, col) a legal move for `player`?
#[inline]
pub fn is_legal(
    board: &Board,
    shape: &Shape,
    row: usize,
    col: usize,
    player: Player,
    has_played: bool,
) -> bool {
    check_cells(board, &shape.occupied(), row, col, player, has_played).is_ok()
}

/// Same as [`is_legal`] but reports which rule failed
pub fn check_placement(
    board: &Board,
    shape: &Shape,
    row: usize,
    col: usize,
    player: Player,
    has_played: bool,
) -> Result<(), Violation> {
    check_cells(board, &shape.occupied(), row, col, player, has_played)
}

/// Legality over precomputed occupied offsets - the enumerator's hot path.
/// Short-circuits on the first broken rule.
#[inline]
pub fn check_cells(
    board: &Board,
    cells: &[(usize, usize)],
    row: usize,
    col: usize,
    player: Player,
    has_played: bool,
) -> Result<(), Violation> {
    let size = board.size();

    for &(r, c) in cells {
        if row.saturating_add(r) >= size || col.saturating_add(c) >= size {
            return Err(Violation::OutOfBounds);
        }
    }

    for &(r, c) in cells {
        if !board.is_empty_at(row + r, col + c) {
            return Err(Violation::Overlap);
        }
    }

    if !has_played {
        return if cells.iter().any(|&(r, c)| board.is_corner(row + r, col + c)) {
            Ok(())
        } else {
            Err(Violation::MissingCorner)
        };
    }

    let mut touches_diagonal = false;
    for &(r, c) in cells {
        let br = (row + r) as isize;
        let bc = (col + c) as isize;
        if ORTHOGONAL
            .iter()
            .any(|&(dr, dc)| board.owner_at(br + dr, bc + dc) == Some(player))
        {
            return Err(Violation::EdgeContact);
        }
        if !touches_diagonal {
            touches_diagonal = DIAGONAL
                .iter()
                .any(|&(dr, dc)| board.owner_at(br + dr, bc + dc) == Some(player));
        }
    }

    if touches_diagonal {
        Ok(())
    } else {
        Err(Violation::NoCornerContact)
    }
}
