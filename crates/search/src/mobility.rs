//! greedy one-ply search - maximize own mobility after the move
//! opponent mobility is never looked at, ties broken by the seeded rng

use blokus_core::{GameState, Placement, Player, SeededRng};
use blokus_engine::{apply_placement, count_legal_moves, enumerate_legal_moves, unapply_placement};
use tracing::{debug, info};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Every candidate reaching the best resulting mobility, in enumeration order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct BestMoves {
    pub moves: Vec<Placement>,
    /// own mobility after any of `moves`
    pub mobility: usize,
    /// legal candidates searched
    pub searched: usize,
}

impl BestMoves {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MoveSelector;

impl MoveSelector {
    pub fn new() -> Self {
        Self
    }

    /// Score every legal move by the mover's own legal-move count afterwards
    /// and keep all moves tied for the maximum. The count uses the mover's
    /// has-played flag from before the move.
    pub fn find_best_moves(&self, state: &GameState, player: Player) -> BestMoves {
        let candidates = enumerate_legal_moves(state, player);
        if candidates.is_empty() {
            debug!(%player, "no legal candidates");
            return BestMoves::default();
        }

        let scores = score_candidates(state, player, &candidates);

        let mut best = BestMoves {
            searched: candidates.len(),
            ..BestMoves::default()
        };
        let mut best_score: Option<usize> = None;
        for (&mv, score) in candidates.iter().zip(scores) {
            let Some(score) = score else { continue };
            match best_score {
                Some(current) if score < current => {}
                Some(current) if score == current => best.moves.push(mv),
                _ => {
                    best_score = Some(score);
                    best.moves.clear();
                    best.moves.push(mv);
                }
            }
        }
        best.mobility = best_score.unwrap_or(0);
        best
    }

    /// Pick uniformly among the tied best moves with `floor(rng() * ties)`.
    /// None means the player cannot move at all.
    pub fn select_move(
        &self,
        state: &GameState,
        player: Player,
        rng: &mut SeededRng,
    ) -> Option<Placement> {
        let best = self.find_best_moves(state, player);
        if best.is_empty() {
            return None;
        }
        let choice = best.moves[rng.below(best.moves.len())];
        info!(
            %player,
            searched = best.searched,
            mobility = best.mobility,
            ties = best.moves.len(),
            chosen = %choice,
            "ai move selected"
        );
        Some(choice)
    }
}

/// Own mobility after one hypothetical move, undone with a targeted revert.
/// Only the cells are painted: a first move is still scored under the corner rule.
fn score_move(local: &mut GameState, player: Player, mv: Placement) -> Option<usize> {
    let undo = apply_placement(local, player, mv)?;
    if undo.was_first {
        local.set_has_played(player, false);
    }
    let mobility = count_legal_moves(local, player);
    unapply_placement(local, &undo);
    Some(mobility)
}

/// One state copy per worker, reused across that worker's candidates
#[cfg(feature = "rayon")]
fn score_candidates(
    state: &GameState,
    player: Player,
    candidates: &[Placement],
) -> Vec<Option<usize>> {
    candidates
        .par_iter()
        .map_init(|| state.clone(), |local, &mv| score_move(local, player, mv))
        .collect()
}

#[cfg(not(feature = "rayon"))]
fn score_candidates(
    state: &GameState,
    player: Player,
    candidates: &[Placement],
) -> Vec<Option<usize>> {
    score_candidates_sequential(state, player, candidates)
}

/// Single state copy, candidates scored in order
#[cfg_attr(feature = "rayon", allow(dead_code))]
fn score_candidates_sequential(
    state: &GameState,
    player: Player,
    candidates: &[Placement],
) -> Vec<Option<usize>> {
    let mut local = state.clone();
    candidates
        .iter()
        .map(|&mv| score_move(&mut local, player, mv))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use blokus_core::{PoolPolicy, Shape, ShapeCatalog};

    fn shape(lines: &[&str]) -> Shape {
        Shape::from_pattern(lines).expect("valid pattern")
    }

    #[test]
    fn test_no_moves_returns_none() {
        let mut state = GameState::new(5, &[Shape::single()], PoolPolicy::Reusable);
        state.board.place(&Shape::single(), 0, 0, Player::Cyan);
        state.set_has_played(Player::Cyan, true);
        state.board.set(1, 1, Some(Player::Red));

        let selector = MoveSelector::new();
        assert!(selector.find_best_moves(&state, Player::Cyan).is_empty());
        let mut rng = SeededRng::new(1);
        assert_eq!(selector.select_move(&state, Player::Cyan, &mut rng), None);
        // nothing drawn when there is nothing to choose from
        assert_eq!(rng, SeededRng::new(1));
    }

    #[test]
    fn test_best_matches_brute_force_maximum() {
        let catalog = vec![Shape::single(), shape(&["##"]), shape(&["#.", "##"])];
        let mut state = GameState::new(6, &catalog, PoolPolicy::Reusable);
        state.board.place(&catalog[2], 0, 0, Player::Cyan);
        state.set_has_played(Player::Cyan, true);
        let best = MoveSelector::new().find_best_moves(&state, Player::Cyan);

        let mut max = 0;
        for mv in enumerate_legal_moves(&state, Player::Cyan) {
            let mut local = state.clone();
            apply_placement(&mut local, Player::Cyan, mv).expect("available");
            max = max.max(count_legal_moves(&local, Player::Cyan));
        }
        assert_eq!(best.mobility, max);
        assert_eq!(best.searched, enumerate_legal_moves(&state, Player::Cyan).len());
        for mv in &best.moves {
            let mut local = state.clone();
            apply_placement(&mut local, Player::Cyan, *mv).expect("available");
            assert_eq!(count_legal_moves(&local, Player::Cyan), max);
        }
    }

    #[test]
    fn test_symmetric_opening_ties_all_corners() {
        // a lone single leaves the three other corners from every corner
        let state = GameState::new(5, &[Shape::single()], PoolPolicy::Reusable);
        let best = MoveSelector::new().find_best_moves(&state, Player::Red);
        assert_eq!(best.moves.len(), 4);
        assert_eq!(best.mobility, 3);
    }

    #[test]
    fn test_first_move_scored_under_corner_rule() {
        // after a first move the count still asks for a corner, not a diagonal contact
        let catalog = vec![Shape::single(), shape(&["##"])];
        let state = GameState::new(6, &catalog, PoolPolicy::Reusable);
        let best = MoveSelector::new().find_best_moves(&state, Player::Cyan);

        let mut painted = state.clone();
        painted.board.place(&Shape::single(), 0, 0, Player::Cyan);
        let corner_rule = count_legal_moves(&painted, Player::Cyan);
        painted.set_has_played(Player::Cyan, true);
        let diagonal_rule = count_legal_moves(&painted, Player::Cyan);
        assert_ne!(corner_rule, diagonal_rule);

        // three free corners, one single and one domino origin at each
        assert_eq!((corner_rule, diagonal_rule), (6, 2));
        assert_eq!(best.mobility, corner_rule);
        // every opening leaves three corners, so all eight tie
        assert_eq!(best.moves.len(), 8);
        assert!(best.moves.contains(&Placement::new(0, 0, 0)));
    }

    #[test]
    fn test_second_move_scored_under_diagonal_rule() {
        let catalog = vec![Shape::single()];
        let mut state = GameState::new(5, &catalog, PoolPolicy::Reusable);
        state.board.place(&catalog[0], 0, 0, Player::Cyan);
        state.set_has_played(Player::Cyan, true);
        let best = MoveSelector::new().find_best_moves(&state, Player::Cyan);
        // (1,1) is the only move and opens three new diagonals
        assert_eq!(best.moves, vec![Placement::new(0, 1, 1)]);
        assert_eq!(best.mobility, 3);
    }

    #[test]
    fn test_selection_is_deterministic_for_seed() {
        let mut rng = SeededRng::new(99);
        let catalog = ShapeCatalog::generate(&mut rng);
        let state = GameState::new(7, catalog.shapes(), PoolPolicy::Reusable);
        let selector = MoveSelector::new();

        let mut a = rng.clone();
        let mut b = rng.clone();
        let first = selector.select_move(&state, Player::Red, &mut a);
        let second = selector.select_move(&state, Player::Red, &mut b);
        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_and_sequential_scores_agree() {
        let mut rng = SeededRng::new(7);
        let catalog = ShapeCatalog::generate(&mut rng);
        let mut state = GameState::new(8, catalog.shapes(), PoolPolicy::Reusable);
        state.board.place(&catalog.shapes()[18], 0, 0, Player::Cyan);
        state.set_has_played(Player::Cyan, true);

        for player in Player::ALL {
            let candidates = enumerate_legal_moves(&state, player);
            assert!(!candidates.is_empty());
            assert_eq!(
                score_candidates(&state, player, &candidates),
                score_candidates_sequential(&state, player, &candidates)
            );
        }
    }

    #[test]
    fn test_search_leaves_state_untouched() {
        let catalog = vec![Shape::single(), shape(&["###"])];
        let state = GameState::new(6, &catalog, PoolPolicy::Consumable);
        let before = state.clone();
        MoveSelector::new().find_best_moves(&state, Player::Cyan);
        assert_eq!(state, before);
    }
}
