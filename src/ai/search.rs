//! Minimax 搜索（Alpha-Beta 剪枝）
//!
//! ## 核心特点
//! - 极大极小 + Alpha-Beta 剪枝，深度限制 + 软时间限制
//! - 共享一块可变棋盘，落子 / 撤销由 `Placed` 守卫成对完成
//! - 走法顺序来自 `ordering`，叶子分数来自 `eval`
//!
//! ## 分数约定
//! 始终从搜索方 `piece` 的视角计分：
//!
//! ```text
//! piece 已连成线   →  WIN_SCORE + 剩余深度
//! 对手已连成线     → -WIN_SCORE - 剩余深度
//! 棋盘已满         →  0
//! 深度用尽 / 超时  →  evaluate(board, piece)
//! ```
//!
//! 剩余深度越大说明胜负来得越早，所以更快的胜利、更慢的失败分数更高。
//!
//! ## 超时
//! 时间只在进入节点时检查（协作式），超时的节点直接返回静态评估，
//! 并在结果中标记 `timed_out`。

use super::eval::evaluate;
use super::ordering::order_moves;
use super::NODE_COUNT;
use crate::board::Board;
use crate::rules::{has_win, is_full};
use crate::types::{Move, Piece};
use log::debug;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::Ordering as AtomicOrdering;
use std::time::{Duration, Instant};

/// 胜负分（另加剩余深度）
pub const WIN_SCORE: i64 = 100_000_000;

/// Alpha-Beta 初始窗口
pub const INFINITY: i64 = i64::MAX / 2;

/// 搜索结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// 最佳走法，没有候选走法时为 None
    pub best_move: Option<Move>,
    /// 搜索方视角的分数
    pub score: i64,
    /// 搜索过程中是否触发了时间限制
    pub timed_out: bool,
    /// 访问的节点数
    pub nodes: u64,
}

impl SearchResult {
    /// 分数是否代表已证明的胜负
    pub fn is_proven_win(&self) -> bool {
        self.score >= WIN_SCORE
    }

    pub fn is_proven_loss(&self) -> bool {
        self.score <= -WIN_SCORE
    }
}

/// 临时落子：离开作用域时（包括剪枝 break）自动清空该格
struct Placed<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl<'a> Placed<'a> {
    fn new(board: &'a mut Board, mv: Move, piece: Piece) -> Self {
        board.place(mv, piece);
        Placed { board, mv }
    }
}

impl Deref for Placed<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placed<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placed<'_> {
    fn drop(&mut self) {
        self.board.clear(self.mv);
    }
}

/// 单次搜索的状态
pub struct Searcher {
    /// 搜索方（极大方）
    piece: Piece,
    start_time: Option<Instant>,
    time_limit: Option<Duration>,
    nodes: u64,
    timed_out: bool,
}

impl Searcher {
    /// 无时间限制的搜索
    pub fn new(piece: Piece) -> Self {
        Searcher {
            piece,
            start_time: None,
            time_limit: None,
            nodes: 0,
            timed_out: false,
        }
    }

    /// 设置开始时间和时间限制
    pub fn with_time_limit(mut self, start_time: Instant, time_limit: Duration) -> Self {
        self.start_time = Some(start_time);
        self.time_limit = Some(time_limit);
        self
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// 检查是否超时
    fn is_timeout(&self) -> bool {
        if let (Some(start), Some(limit)) = (self.start_time, self.time_limit) {
            start.elapsed() > limit
        } else {
            false
        }
    }

    /// Minimax 搜索
    ///
    /// `maximizing` 为 true 时由 `piece` 落子，否则由对手落子。
    /// 返回 (最佳走法, 分数)；棋盘在返回时与进入时完全相同。
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> (Option<Move>, i64) {
        self.nodes += 1;
        NODE_COUNT.fetch_add(1, AtomicOrdering::Relaxed);

        let piece = self.piece;
        let opp = piece.opposite();

        // 终局判断先于深度 / 时间判断
        if has_win(board, piece) {
            return (None, WIN_SCORE + depth as i64);
        }
        if has_win(board, opp) {
            return (None, -WIN_SCORE - depth as i64);
        }
        if is_full(board) {
            return (None, 0);
        }

        if self.is_timeout() {
            if !self.timed_out {
                debug!("search timed out after {} nodes, using static evaluation", self.nodes);
            }
            self.timed_out = true;
            return (None, evaluate(board, piece));
        }

        if depth == 0 {
            return (None, evaluate(board, piece));
        }

        let candidates = order_moves(board);
        if candidates.is_empty() {
            return (None, 0);
        }

        let mover = if maximizing { piece } else { opp };
        let mut best_move = None;
        let mut best_score = if maximizing { -INFINITY } else { INFINITY };

        for mv in candidates {
            let score = {
                let mut placed = Placed::new(board, mv, mover);
                self.minimax(&mut placed, depth - 1, alpha, beta, !maximizing).1
            };

            if maximizing {
                // 严格大于：分数相同时保留先出现的走法
                if best_move.is_none() || score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
            } else {
                if best_move.is_none() || score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        (best_move, best_score)
    }
}

/// 从根节点搜索（`piece` 先走）
pub fn search(
    board: &mut Board,
    piece: Piece,
    depth: u32,
    time_limit: Option<Duration>,
) -> SearchResult {
    let mut searcher = Searcher::new(piece);
    if let Some(limit) = time_limit {
        searcher = searcher.with_time_limit(Instant::now(), limit);
    }

    let (best_move, score) = searcher.minimax(board, depth, -INFINITY, INFINITY, true);

    SearchResult {
        best_move,
        score,
        timed_out: searcher.timed_out(),
        nodes: searcher.nodes(),
    }
}
