//! anchor cells - the only board cells a legal placement can hinge on
//! every legal move covers at least one anchor, so candidate origins are
//! anchor minus an occupied offset instead of the whole board

use blokus_core::{Board, Player};
use rustc_hash::FxHashSet;

use crate::validator::{DIAGONAL, ORTHOGONAL};

/// Cells one of `player`'s next placements must cover.
///
/// Before the first move these are the empty corners. Afterwards they are the
/// empty cells touching an own cell diagonally and no own cell along an edge.
pub fn anchor_cells(board: &Board, player: Player, has_played: bool) -> Vec<(usize, usize)> {
    if !has_played {
        return board
            .corners()
            .into_iter()
            .filter(|&(r, c)| board.is_empty_at(r, c))
            .collect();
    }

    let size = board.size();
    let mut seen: FxHashSet<(usize, usize)> = FxHashSet::default();
    let mut anchors = Vec::new();

    for row in 0..size {
        for col in 0..size {
            if board.get(row, col) != Some(player) {
                continue;
            }
            for (dr, dc) in DIAGONAL {
                let nr = row as isize + dr;
                let nc = col as isize + dc;
                if nr < 0 || nc < 0 || nr as usize >= size || nc as usize >= size {
                    continue;
                }
                let cell = (nr as usize, nc as usize);
                if !board.is_empty_at(cell.0, cell.1) || seen.contains(&cell) {
                    continue;
                }
                let edge_touch = ORTHOGONAL
                    .iter()
                    .any(|&(er, ec)| board.owner_at(nr + er, nc + ec) == Some(player));
                if !edge_touch {
                    seen.insert(cell);
                    anchors.push(cell);
                }
            }
        }
    }

    anchors.sort_unstable();
    anchors
}
