//! Minimax AI 策略（Medium / Hard）

use super::search::search;
use super::tactics::forced_move;
use super::{AIConfig, AIStrategy, ScoredMove};
use crate::board::Board;
use crate::rules::is_legal;
use crate::types::{Difficulty, Piece};
use log::{debug, info};
use std::time::Duration;

/// Minimax AI - 使用 Alpha-Beta 剪枝，失败时交给更低一级难度
pub struct MinimaxAI {
    difficulty: Difficulty,
    config: AIConfig,
    time_limit: Option<Duration>,
    fallback: Box<dyn AIStrategy>,
}

impl MinimaxAI {
    pub fn new(config: &AIConfig, difficulty: Difficulty, fallback: Box<dyn AIStrategy>) -> Self {
        MinimaxAI {
            difficulty,
            config: config.clone(),
            time_limit: config
                .time_limit
                .filter(|t| t.is_finite() && *t >= 0.0)
                .map(Duration::from_secs_f64),
            fallback,
        }
    }

    /// 回退到下一级难度
    fn fall_back(&mut self, board: &Board, piece: Piece) -> Option<ScoredMove> {
        info!(
            "{} search produced no move, falling back to {}",
            self.difficulty,
            self.fallback.difficulty()
        );
        self.fallback.select_move(board, piece)
    }
}

impl AIStrategy for MinimaxAI {
    fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    fn select_move(&mut self, board: &Board, piece: Piece) -> Option<ScoredMove> {
        if let Some((mv, reason)) = forced_move(board, piece) {
            debug!("{}: {} move at {}", self.difficulty, reason, mv);
            return Some(ScoredMove { mv, score: 0 });
        }

        let depth = self.config.depth_for(board.config().profile());
        // 搜索在副本上进行，调用方的棋盘不会被修改
        let mut work = board.clone();
        let result = search(&mut work, piece, depth, self.time_limit);

        debug!(
            "{}: depth={} nodes={} score={} best={:?}",
            self.difficulty, depth, result.nodes, result.score, result.best_move
        );
        if result.timed_out {
            info!(
                "{}: time limit {:?} reached, using interim result",
                self.difficulty, self.time_limit
            );
        }

        match result.best_move {
            Some(mv) if is_legal(board, mv) => Some(ScoredMove {
                mv,
                score: result.score,
            }),
            _ => self.fall_back(board, piece),
        }
    }
}
