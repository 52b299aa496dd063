//! 规则 AI（最低难度，不搜索）

use super::tactics::forced_move;
use super::{AIConfig, AIStrategy, ScoredMove};
use crate::board::Board;
use crate::rules::{is_legal, legal_moves};
use crate::types::{Difficulty, Piece};
use log::debug;
use rand::prelude::*;

/// 规则 AI - 赢棋、堵棋、中心、随机角、随机
///
/// 棋盘有空格时一定返回走法，是整条回退链的兜底。
pub struct ReactiveAI {
    rng: StdRng,
}

impl ReactiveAI {
    pub fn new(config: &AIConfig) -> Self {
        let rng = match config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        ReactiveAI { rng }
    }
}

impl AIStrategy for ReactiveAI {
    fn difficulty(&self) -> Difficulty {
        Difficulty::Easy
    }

    fn select_move(&mut self, board: &Board, piece: Piece) -> Option<ScoredMove> {
        let moves = legal_moves(board);
        if moves.is_empty() {
            return None;
        }

        if let Some((mv, reason)) = forced_move(board, piece) {
            debug!("reactive: {} move at {}", reason, mv);
            return Some(ScoredMove { mv, score: 0 });
        }

        let config = board.config();
        let center = config.center();
        if is_legal(board, center) {
            return Some(ScoredMove { mv: center, score: 0 });
        }

        let corners: Vec<_> = config
            .corners()
            .into_iter()
            .filter(|&c| is_legal(board, c))
            .collect();
        let mv = match corners.choose(&mut self.rng) {
            Some(&corner) => corner,
            None => *moves.choose(&mut self.rng)?,
        };

        Some(ScoredMove { mv, score: 0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameConfig, Move};

    fn reactive(seed: u64) -> ReactiveAI {
        ReactiveAI::new(&AIConfig {
            seed: Some(seed),
            ..Default::default()
        })
    }

    #[test]
    fn test_takes_win_then_block() {
        let mut ai = reactive(1);
        let board = Board::from_notation("XX1/OO1/3").unwrap();
        assert_eq!(
            ai.select_best_move(&board, Piece::Player),
            Some(Move::new(0, 2))
        );

        let board = Board::from_notation("OO1/XX1/3").unwrap();
        assert_eq!(
            ai.select_best_move(&board, Piece::Player),
            Some(Move::new(1, 2))
        );
    }

    #[test]
    fn test_prefers_center_then_corner() {
        let mut ai = reactive(2);
        let empty = Board::new(GameConfig::small());
        assert_eq!(ai.select_best_move(&empty, Piece::Ai), Some(Move::new(1, 1)));

        let board = Board::from_notation("3/1X1/3").unwrap();
        let mv = ai.select_best_move(&board, Piece::Ai).unwrap();
        assert!(GameConfig::small().corners().contains(&mv));
    }

    #[test]
    fn test_random_edge_when_corners_taken() {
        let mut ai = reactive(3);
        // 4x4 三连：中心和四角都已占用，双方都没有一步连线
        let board = Board::from_notation("X2O/4/2O1/O2X 3").unwrap();
        let mv = ai.select_best_move(&board, Piece::Ai).unwrap();
        assert!(is_legal(&board, mv));
        assert_eq!(board.empty_count(), 11);
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = Board::from_notation("3/1X1/3").unwrap();
        let a = reactive(42).select_best_move(&board, Piece::Ai);
        let b = reactive(42).select_best_move(&board, Piece::Ai);
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut ai = reactive(4);
        let board = Board::from_notation("XOX/XOO/OXX").unwrap();
        assert_eq!(ai.select_move(&board, Piece::Ai), None);
    }
}
