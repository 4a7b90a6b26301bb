//! Agent behavior validation
//!
//! The standard tic-tac-toe results: the search agent never loses, two
//! search agents always draw, and the heuristic prefers winning over
//! blocking.

use noughts::{
    Agent, BoardState, GameOutcome, GameRunner, HeuristicAgent, MinimaxAgent, Player, RandomAgent,
};

mod minimax_never_loses {
    use super::*;

    fn assert_no_loss(opponent: &mut dyn Agent, seed_label: &str) {
        // Minimax as the opening player
        let mut minimax = MinimaxAgent::new("Minimax".to_string());
        let game = GameRunner::new()
            .run(&mut minimax, opponent)
            .expect("game should complete");
        assert_ne!(
            game.outcome,
            GameOutcome::Win(Player::O),
            "minimax lost as X ({seed_label})"
        );

        // Minimax as the second player
        let mut minimax = MinimaxAgent::new("Minimax".to_string());
        let game = GameRunner::new()
            .run(opponent, &mut minimax)
            .expect("game should complete");
        assert_ne!(
            game.outcome,
            GameOutcome::Win(Player::X),
            "minimax lost as O ({seed_label})"
        );
    }

    #[test]
    fn test_against_random_opponents() {
        for seed in 0..30 {
            let mut opponent = RandomAgent::with_seed("Random".to_string(), seed);
            assert_no_loss(&mut opponent, &format!("random seed {seed}"));
        }
    }

    #[test]
    fn test_against_heuristic_opponents() {
        for seed in 0..30 {
            let mut opponent = HeuristicAgent::with_seed("Heuristic".to_string(), seed);
            assert_no_loss(&mut opponent, &format!("heuristic seed {seed}"));
        }
    }

    #[test]
    fn test_self_play_always_draws() {
        for first_player in [Player::X, Player::O] {
            let mut a = MinimaxAgent::new("A".to_string());
            let mut b = MinimaxAgent::new("B".to_string());

            let game = GameRunner::new()
                .with_first_player(first_player)
                .run(&mut a, &mut b)
                .unwrap();
            assert_eq!(
                game.outcome,
                GameOutcome::Draw,
                "perfect play from both sides must draw ({first_player:?} opening)"
            );
        }
    }
}

mod heuristic_priorities {
    use super::*;

    #[test]
    fn test_win_now_beats_block_now() {
        // x x .
        // o o .
        // . . .   x to move: index 2 wins even though 5 blocks
        let board = BoardState::from_string("XX.OO...._X").unwrap();

        for seed in 0..10 {
            let mut agent = HeuristicAgent::with_seed("Heuristic".to_string(), seed);
            assert_eq!(
                agent.select_move(&board).unwrap(),
                2,
                "win-now must take priority over block-now"
            );
        }
    }

    #[test]
    fn test_one_move_from_winning_always_wins() {
        // Diagonal threat: X on 0 and 4, win at 8
        let board = BoardState::from_string("X.O.XO..._X").unwrap();

        for seed in 0..10 {
            let mut agent = HeuristicAgent::with_seed("Heuristic".to_string(), seed);
            assert_eq!(agent.select_move(&board).unwrap(), 8);
        }
    }

    #[test]
    fn test_blocks_when_no_win_available() {
        // O threatens the left column (0, 3); X has no immediate win and
        // must block at 6
        let board = BoardState::from_string("OX.O.X..._X").unwrap();

        let mut agent = HeuristicAgent::with_seed("Heuristic".to_string(), 0);
        assert_eq!(agent.select_move(&board).unwrap(), 6);
    }
}

mod opening_evaluation {
    use super::*;

    #[test]
    fn test_all_openings_evaluated_consistently() {
        let board = BoardState::new();
        let mut agent = MinimaxAgent::new("Minimax".to_string());

        let values = agent.evaluate_moves(&board);
        assert_eq!(values.len(), 9);

        // With terminal values confined to {-1, 0, 1}, every opening is a
        // draw under optimal defense; center, corners, and edges must all
        // agree.
        let first = values[0].1;
        for (pos, value) in &values {
            assert_eq!(*value, first, "opening {pos} valued inconsistently");
        }

        let chosen = agent.select_move(&board).unwrap();
        assert!(
            values.iter().any(|(pos, _)| *pos == chosen),
            "selected opening must be one of the evaluated cells"
        );
    }
}
