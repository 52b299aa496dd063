//! 引擎性质测试
//!
//! 覆盖公开接口：胜负判定与落子顺序无关、Alpha-Beta 与全宽 Minimax 分数一致、
//! 搜索后棋盘不变，以及几个具体局面。

use nrow_ai::ai::eval::evaluate;
use nrow_ai::ai::ordering::order_moves;
use nrow_ai::ai::search::{search, WIN_SCORE};
use nrow_ai::test_positions::{BLOCK_POSITIONS, FINAL_1, LARGE_1, WIN_POSITIONS};
use nrow_ai::{
    apply_move, check_outcome, choose_ai_move, has_win, is_terminal, legal_moves, new_board,
    AIEngine, Board, Difficulty, EngineConfig, EngineError, GameResult, Move, Piece,
    TierSettings,
};

/// 不剪枝的 Minimax，计分方式与引擎相同
fn brute_force(board: &Board, piece: Piece, depth: u32, maximizing: bool) -> i64 {
    let opp = piece.opposite();
    if has_win(board, piece) {
        return WIN_SCORE + depth as i64;
    }
    if has_win(board, opp) {
        return -WIN_SCORE - depth as i64;
    }
    let moves = legal_moves(board);
    if moves.is_empty() {
        return 0;
    }
    if depth == 0 {
        return evaluate(board, piece);
    }

    let mover = if maximizing { piece } else { opp };
    let scores = moves.iter().map(|mv| {
        let mut child = board.clone();
        apply_move(&mut child, mv.row, mv.col, mover).unwrap();
        brute_force(&child, piece, depth - 1, !maximizing)
    });
    if maximizing {
        scores.max().unwrap()
    } else {
        scores.min().unwrap()
    }
}

fn generous_settings() -> EngineConfig {
    let tier = |depth, large_board_depth| TierSettings {
        depth,
        large_board_depth,
        time_limit_secs: 120.0,
    };
    EngineConfig {
        medium: tier(2, 2),
        hard: tier(9, 3),
    }
}

#[test]
fn test_has_win_independent_of_move_order() {
    let placements = [
        (Move::new(0, 0), Piece::Player),
        (Move::new(1, 1), Piece::Ai),
        (Move::new(0, 1), Piece::Player),
        (Move::new(2, 2), Piece::Ai),
        (Move::new(0, 2), Piece::Player),
        (Move::new(2, 0), Piece::Ai),
    ];

    let mut forward = new_board(3, 3).unwrap();
    for (mv, piece) in placements {
        apply_move(&mut forward, mv.row, mv.col, piece).unwrap();
    }
    let mut backward = new_board(3, 3).unwrap();
    for (mv, piece) in placements.iter().rev() {
        apply_move(&mut backward, mv.row, mv.col, *piece).unwrap();
    }

    assert_eq!(forward, backward);
    for piece in [Piece::Player, Piece::Ai] {
        assert_eq!(has_win(&forward, piece), has_win(&backward, piece));
    }
    assert!(has_win(&forward, Piece::Player));
    assert!(!has_win(&forward, Piece::Ai));
}

#[test]
fn test_alpha_beta_matches_brute_force_3x3() {
    let boards = ["3/3/3", "X2/3/3", "X2/1O1/3", "X1O/1X1/3", "XO1/1X1/2O", "OX1/1X1/3"];
    for notation in boards {
        let board = Board::from_notation(notation).unwrap();
        for piece in [Piece::Player, Piece::Ai] {
            for depth in [1, 2, 3, 9] {
                let mut work = board.clone();
                let pruned = search(&mut work, piece, depth, None);
                let full = brute_force(&board, piece, depth, true);
                assert_eq!(
                    pruned.score, full,
                    "{} piece={} depth={}",
                    notation, piece, depth
                );
            }
        }
    }
}

#[test]
fn test_alpha_beta_matches_brute_force_4x4() {
    let board = Board::from_notation("4/1XO1/2X1/O3 3").unwrap();
    for piece in [Piece::Player, Piece::Ai] {
        for depth in [1, 2, 3] {
            let mut work = board.clone();
            let pruned = search(&mut work, piece, depth, None);
            assert_eq!(pruned.score, brute_force(&board, piece, depth, true));
        }
    }
}

#[test]
fn test_board_restored_after_search() {
    for notation in ["3/3/3", "X1O/1X1/O2", LARGE_1] {
        let board = Board::from_notation(notation).unwrap();
        for piece in [Piece::Player, Piece::Ai] {
            let mut work = board.clone();
            let result = search(&mut work, piece, 3, None);
            assert_eq!(work, board, "{} changed by search", notation);
            assert!(result.nodes > 0);

            // 走出最佳走法再撤销，棋盘回到搜索前
            if let Some(mv) = result.best_move {
                apply_move(&mut work, mv.row, mv.col, piece).unwrap();
                assert_eq!(work.clear(mv), Some(piece));
                assert_eq!(work, board);
            }
        }
    }
}

#[test]
fn test_terminal_board_rejects_ai_move() {
    let board = Board::from_notation(FINAL_1).unwrap();
    assert!(is_terminal(&board));
    for difficulty in Difficulty::ALL {
        assert_eq!(
            choose_ai_move(&board, Piece::Player, difficulty),
            Err(EngineError::NoLegalMove)
        );
    }
}

#[test]
fn test_deep_tier_draws_empty_3x3() {
    let board = new_board(3, 3).unwrap();
    for piece in [Piece::Player, Piece::Ai] {
        let mut engine = AIEngine::from_difficulty(Difficulty::Hard, &generous_settings(), Some(1));
        let sm = engine.choose_move(&board, piece).unwrap();
        assert_eq!(sm.score, 0);
    }
}

#[test]
fn test_immediate_win_scenario() {
    let board = Board::from_grid(&[vec![1, 1, 0], vec![2, 2, 0], vec![0, 0, 0]], 3).unwrap();
    for difficulty in Difficulty::ALL {
        assert_eq!(
            choose_ai_move(&board, Piece::Player, difficulty),
            Ok(Move::new(0, 2))
        );
    }
}

#[test]
fn test_immediate_block_scenario() {
    let board = Board::from_grid(&[vec![2, 2, 0], vec![1, 1, 0], vec![0, 0, 0]], 3).unwrap();
    // 玩家自己也能在 (1,2) 连成：赢棋优先于堵棋
    for difficulty in Difficulty::ALL {
        assert_eq!(
            choose_ai_move(&board, Piece::Player, difficulty),
            Ok(Move::new(1, 2))
        );
    }

    let board = Board::from_grid(&[vec![2, 2, 0], vec![1, 0, 0], vec![0, 1, 0]], 3).unwrap();
    for difficulty in Difficulty::ALL {
        assert_eq!(
            choose_ai_move(&board, Piece::Player, difficulty),
            Ok(Move::new(0, 2))
        );
    }
}

#[test]
fn test_empty_9x9_orders_center_only() {
    let board = new_board(9, 9).unwrap();
    assert_eq!(order_moves(&board), vec![Move::new(4, 4)]);
}

#[test]
fn test_row_of_four_on_9x9() {
    let board = Board::from_notation("9/9/9/9/2XXXX3/9/9/2O1O1O2/9 4").unwrap();
    assert!(has_win(&board, Piece::Player));
    assert!(!has_win(&board, Piece::Ai));
    assert_eq!(check_outcome(&board), GameResult::PlayerWin);
}

#[test]
fn test_named_positions_resolved_by_every_tier() {
    for notation in WIN_POSITIONS.iter().chain(BLOCK_POSITIONS.iter()) {
        let board = Board::from_notation(notation).unwrap();
        let piece = board.side_to_move();
        let expected = choose_ai_move(&board, piece, Difficulty::Easy).unwrap();
        for difficulty in [Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(
                choose_ai_move(&board, piece, difficulty),
                Ok(expected),
                "{} at {}",
                notation,
                difficulty
            );
        }
    }
}
