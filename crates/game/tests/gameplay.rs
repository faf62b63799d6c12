use blokus_engine::{count_legal_moves, enumerate_legal_moves};
use blokus_game::{
    AiOutcome, GameConfig, GameController, GameError, GameStatus, MoveRecord, Player, PoolPolicy,
};

fn controller(size: usize, seed: &str, ai_player: Option<Player>) -> GameController {
    let config = GameConfig::seeded(size, seed)
        .with_ai_player(ai_player)
        .with_ai_delay_ms(0);
    let seed = config.resolve_seed(|| 0);
    GameController::with_seed(config, seed)
}

/// Human plays the first legal move in enumeration order, the AI answers.
/// Returns the history and every AI choice.
fn scripted_game(size: usize, seed: &str, max_turns: usize) -> (Vec<MoveRecord>, Vec<AiOutcome>) {
    let mut game = controller(size, seed, Some(Player::Red));
    let mut ai_moves = Vec::new();

    for _ in 0..max_turns {
        if game.status().is_over() {
            break;
        }
        if game.pending_ai_turn().is_some() {
            ai_moves.push(game.run_ai_turn().expect("scheduled turn runs"));
            continue;
        }
        let player = game.turn();
        let Some(mv) = enumerate_legal_moves(game.state(), player).first().copied() else {
            break;
        };
        game.submit_placement(mv.row, mv.col, mv.piece_index)
            .expect("enumerated move is legal");
    }

    (game.history().records().to_vec(), ai_moves)
}

mod determinism {
    use super::*;

    #[test]
    fn test_same_seed_same_game() {
        let (history_a, ai_a) = scripted_game(9, "seed-42", 12);
        let (history_b, ai_b) = scripted_game(9, "seed-42", 12);
        assert!(!ai_a.is_empty());
        assert_eq!(ai_a, ai_b);
        assert_eq!(history_a, history_b);
    }

    #[test]
    fn test_same_seed_same_catalog() {
        let a = controller(12, "blokus", None);
        let b = controller(12, "blokus", None);
        assert_eq!(a.catalog_len(), b.catalog_len());
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_restart_replays_identically() {
        let mut game = controller(9, "replay", Some(Player::Red));
        game.submit_placement(0, 0, 0).unwrap();
        let first = game.run_ai_turn().unwrap();

        game.restart();
        game.submit_placement(0, 0, 0).unwrap();
        assert_eq!(game.run_ai_turn().unwrap(), first);
    }
}

mod terminal {
    use super::*;

    #[test]
    fn test_game_ends_when_side_to_move_is_stuck() {
        let mut game = controller(5, "end", None);
        for _ in 0..100 {
            if game.status().is_over() {
                break;
            }
            let player = game.turn();
            let mv = enumerate_legal_moves(game.state(), player)[0];
            game.submit_placement(mv.row, mv.col, mv.piece_index).unwrap();
        }

        let GameStatus::GameOver { winner } = game.status() else {
            panic!("a 5x5 game must end");
        };
        let loser = winner.opponent();
        assert_eq!(game.turn(), loser);
        assert_eq!(count_legal_moves(game.state(), loser), 0);
        assert_eq!(game.history().last().unwrap().player, winner);
        assert_eq!(
            game.submit_placement(0, 0, 0).unwrap_err(),
            GameError::GameOver { winner }
        );
    }

    #[test]
    fn test_consumable_game_also_ends() {
        let config = GameConfig::seeded(6, "consume")
            .with_ai_player(Some(Player::Red))
            .with_ai_delay_ms(0)
            .with_pool_policy(PoolPolicy::Consumable);
        let seed = config.resolve_seed(|| 0);
        let mut game = GameController::with_seed(config, seed);

        for _ in 0..200 {
            if game.status().is_over() {
                break;
            }
            if game.pending_ai_turn().is_some() {
                game.run_ai_turn().unwrap();
                continue;
            }
            let mv = enumerate_legal_moves(game.state(), game.turn())[0];
            game.submit_placement(mv.row, mv.col, mv.piece_index).unwrap();
        }
        assert!(game.status().is_over());
    }
}

mod undo {
    use super::*;

    #[test]
    fn test_undo_everything_returns_to_start() {
        let mut game = controller(7, "undo", None);
        let start = game.state().clone();
        for _ in 0..6 {
            let mv = enumerate_legal_moves(game.state(), game.turn())[0];
            game.submit_placement(mv.row, mv.col, mv.piece_index).unwrap();
        }
        while !game.history().is_empty() {
            game.undo().unwrap();
        }
        assert_eq!(game.state(), &start);
        assert_eq!(game.status(), GameStatus::CyanToMove);
        assert_eq!(game.undo().unwrap_err(), GameError::NothingToUndo);
        assert_eq!(game.state(), &start);
    }
}

mod corner_rule {
    use super::*;

    #[test]
    fn test_single_legal_only_on_corners() {
        let cases = [
            (0, 0, true),
            (0, 4, true),
            (4, 0, true),
            (4, 4, true),
            (0, 1, false),
            (2, 2, false),
        ];
        for (row, col, legal) in cases {
            let mut game = controller(5, "corner", None);
            assert_eq!(
                game.submit_placement(row, col, 0).is_ok(),
                legal,
                "single at ({row},{col})"
            );
        }
    }
}

mod config {
    use super::*;

    #[test]
    fn test_board_size_clamped_by_controller() {
        let mut config = GameConfig::seeded(5, "x");
        config.board_size = 2;
        let small = GameController::with_seed(config.clone(), 1);
        assert_eq!(small.state().board.size(), 5);

        config.board_size = 4000;
        let large = GameController::with_seed(config, 1);
        assert_eq!(large.state().board.size(), 1000);
    }

    #[test]
    fn test_from_toml_into_game() {
        let config = GameConfig::from_toml_str(
            r#"
            board_size = 8
            seed = "toml"
            ai_player = "none"
            "#,
        )
        .unwrap();
        let seed = config.resolve_seed(|| 0);
        let game = GameController::with_seed(config, seed);
        assert_eq!(game.state().board.size(), 8);
        assert_eq!(game.pending_ai_turn(), None);
        assert_eq!(game.config().ai_player, None);
    }
}
