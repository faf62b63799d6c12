//! legal move enumeration - anchor-driven candidate origins, exact validator
//! results match the exhaustive pieces x rows x cols scan move for move

use blokus_core::{Board, GameState, Placement, Player, Shape};
use rustc_hash::FxHashSet;
use tracing::trace;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::anchors::anchor_cells;
use crate::validator::check_cells;

/// Number of legal (piece, row, col) triples for `player`
pub fn count_legal_moves(state: &GameState, player: Player) -> usize {
    let has_played = state.has_played(player);
    let anchors = anchor_cells(&state.board, player, has_played);
    if anchors.is_empty() {
        return 0;
    }

    let pieces: Vec<(usize, &Shape)> = state.pool(player).iter_available().collect();
    let count = sum_over_pieces(&pieces, |shape| {
        legal_origins(&state.board, &anchors, shape, player, has_played).len()
    });

    trace!(%player, anchors = anchors.len(), count, "counted legal moves");
    count
}

/// Every legal placement, ordered by piece index, then row, then column
pub fn enumerate_legal_moves(state: &GameState, player: Player) -> Vec<Placement> {
    let has_played = state.has_played(player);
    let anchors = anchor_cells(&state.board, player, has_played);
    if anchors.is_empty() {
        return Vec::new();
    }

    let mut moves = Vec::new();
    for (index, shape) in state.pool(player).iter_available() {
        for (row, col) in legal_origins(&state.board, &anchors, shape, player, has_played) {
            moves.push(Placement::new(index, row, col));
        }
    }
    moves
}

/// Reference enumeration: test every available piece at every board cell
pub fn enumerate_legal_moves_exhaustive(state: &GameState, player: Player) -> Vec<Placement> {
    let size = state.board.size();
    let has_played = state.has_played(player);
    let mut moves = Vec::new();
    for (index, shape) in state.pool(player).iter_available() {
        let cells = shape.occupied();
        for row in 0..size {
            for col in 0..size {
                if check_cells(&state.board, &cells, row, col, player, has_played).is_ok() {
                    moves.push(Placement::new(index, row, col));
                }
            }
        }
    }
    moves
}

pub fn count_legal_moves_exhaustive(state: &GameState, player: Player) -> usize {
    enumerate_legal_moves_exhaustive(state, player).len()
}

/// Legal origins of one shape, sorted by (row, col).
/// Candidates are anchor minus each occupied offset, deduplicated before validation.
fn legal_origins(
    board: &Board,
    anchors: &[(usize, usize)],
    shape: &Shape,
    player: Player,
    has_played: bool,
) -> Vec<(usize, usize)> {
    let cells = shape.occupied();
    let mut seen: FxHashSet<(usize, usize)> = FxHashSet::default();
    let mut origins = Vec::new();

    for &(ar, ac) in anchors {
        for &(r, c) in &cells {
            if ar < r || ac < c {
                continue;
            }
            let origin = (ar - r, ac - c);
            if seen.insert(origin)
                && check_cells(board, &cells, origin.0, origin.1, player, has_played).is_ok()
            {
                origins.push(origin);
            }
        }
    }

    origins.sort_unstable();
    origins
}

#[cfg(feature = "rayon")]
fn sum_over_pieces<F>(pieces: &[(usize, &Shape)], count: F) -> usize
where
    F: Fn(&Shape) -> usize + Sync,
{
    pieces.par_iter().map(|&(_, shape)| count(shape)).sum()
}

#[cfg(not(feature = "rayon"))]
fn sum_over_pieces<F>(pieces: &[(usize, &Shape)], count: F) -> usize
where
    F: Fn(&Shape) -> usize,
{
    sum_over_pieces_sequential(pieces, count)
}

#[cfg_attr(feature = "rayon", allow(dead_code))]
fn sum_over_pieces_sequential<F>(pieces: &[(usize, &Shape)], count: F) -> usize
where
    F: Fn(&Shape) -> usize,
{
    pieces.iter().map(|&(_, shape)| count(shape)).sum()
}
