//! 对局流程测试

use nrow_ai::{
    Difficulty, EngineConfig, EngineError, Game, GameConfig, GameMode, GameResult, Piece,
};

fn session(config: GameConfig, mode: GameMode, difficulty: Difficulty, seed: u64) -> Game {
    Game::with_settings(config, mode, difficulty, &EngineConfig::default(), Some(seed))
}

#[test]
fn test_human_vs_ai_alternates() {
    let mut game = session(GameConfig::small(), GameMode::HumanVsAi, Difficulty::Hard, 7);
    game.set_first_turn(Piece::Player).unwrap();

    game.play_human(0, 0).unwrap();
    assert!(game.awaiting_ai());
    let reply = game.play_ai().unwrap();
    // 角被占后，完整搜索只能走中心才能保住和棋
    assert_eq!((reply.row, reply.col), (1, 1));
    assert_eq!(game.turn(), Piece::Player);
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_hard_ai_never_loses_3x3() {
    // 人类一方用简单 AI 代替，Hard 不应输棋
    for seed in 0..4 {
        let mut game = session(GameConfig::small(), GameMode::HumanVsAi, Difficulty::Hard, seed);
        let mut opponent = nrow_ai::AIEngine::reactive(Some(seed));
        while !game.is_over() {
            if game.awaiting_ai() {
                game.play_ai().unwrap();
            } else {
                let mv = opponent.choose_move(game.board(), game.turn()).unwrap().mv;
                game.play_human(mv.row, mv.col).unwrap();
            }
        }
        assert_ne!(game.outcome(), GameResult::PlayerWin, "seed {}", seed);
    }
}

#[test]
fn test_ai_vs_ai_large_board_finishes() {
    let mut game = session(GameConfig::large(), GameMode::AiVsAi, Difficulty::Easy, 3);
    let moves = game.run_ai_turns().unwrap();
    assert!(game.is_over());
    assert_eq!(moves.len(), game.history().len());
    assert!(game.play_ai().is_err());
}

#[test]
fn test_out_of_turn_and_game_over_errors() {
    let mut game = session(GameConfig::small(), GameMode::HumanVsHuman, Difficulty::Easy, 1);
    assert!(matches!(game.play_ai(), Err(EngineError::OutOfTurn(_))));

    for (r, c) in [(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)] {
        game.play_human(r, c).unwrap();
    }
    assert_eq!(game.outcome(), GameResult::PlayerWin);
    assert!(matches!(game.play_human(0, 1), Err(EngineError::GameOver(_))));
    assert!(matches!(game.hint(), Err(EngineError::GameOver(_))));

    game.restart();
    assert!(!game.is_over());
    assert_eq!(game.board().piece_count(), 0);
}

#[test]
fn test_draw_detected() {
    let mut game = session(GameConfig::small(), GameMode::HumanVsHuman, Difficulty::Easy, 1);
    // X O X / X O O / O X X
    let moves = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ];
    for (i, (r, c)) in moves.iter().enumerate() {
        let result = game.play_human(*r, *c).unwrap();
        if i + 1 < moves.len() {
            assert_eq!(result, GameResult::Ongoing, "after move {}", i + 1);
        }
    }
    assert_eq!(game.outcome(), GameResult::Draw);
}
