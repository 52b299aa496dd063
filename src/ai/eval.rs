//! 局面评估
//!
//! 从 `piece` 一方的视角给非终局局面打分，正值对 `piece` 有利。
//! 评估函数按 `BoardProfile` 选择：
//!
//! ```text
//! Small: 中心格 ±CENTER_WEIGHT
//! Large: Σ 窗口分（长度 = 连子数） + Σ 位置分（POSITION_BASE - 到中心的曼哈顿距离）
//! ```
//!
//! 窗口分：
//! - 窗口内双方都有子 → 0（死窗口）
//! - 只有一方有 n 子 → 按 n 查表，进攻方 / 防守方分别计分
//! - 同色棋子在窗口内连续时分数翻倍

use crate::board::Board;
use crate::rules::windows;
use crate::types::{BoardProfile, Piece};

/// 小棋盘中心格权重
pub const CENTER_WEIGHT: i64 = 5;

/// 位置分基数
pub const POSITION_BASE: i64 = 10;

/// 窗口连满（评估用的必胜哨兵）
pub const WINDOW_FULL: i64 = 10_000_000;

/// 窗口差一子
const WINDOW_THREAT: i64 = 100_000;

/// 单子窗口
const WINDOW_SINGLE: i64 = 10;

/// 普通 n 子窗口的上限
const WINDOW_RUN_CAP: i64 = WINDOW_THREAT / 10;

/// 评估局面
pub fn evaluate(board: &Board, piece: Piece) -> i64 {
    match board.config().profile() {
        BoardProfile::Small => evaluate_small(board, piece),
        BoardProfile::Large => evaluate_large(board, piece),
    }
}

/// 小棋盘：只看中心格
pub fn evaluate_small(board: &Board, piece: Piece) -> i64 {
    let center = board.config().center();
    match board.get(center.row, center.col) {
        Some(p) if p == piece => CENTER_WEIGHT,
        Some(_) => -CENTER_WEIGHT,
        None => 0,
    }
}

/// 大棋盘：窗口分 + 位置分
pub fn evaluate_large(board: &Board, piece: Piece) -> i64 {
    position_score(board, piece).saturating_add(window_total(board, piece))
}

/// 位置分：越靠近中心越高
pub fn position_score(board: &Board, piece: Piece) -> i64 {
    let center = board.config().center();
    board
        .occupied()
        .map(|(mv, p)| {
            let bonus = POSITION_BASE - mv.manhattan(center.row, center.col) as i64;
            if p == piece {
                bonus
            } else {
                -bonus
            }
        })
        .sum()
}

/// 所有窗口分之和（窗口长度 = 连子数）
pub fn window_total(board: &Board, piece: Piece) -> i64 {
    let len = board.win_length();
    let mut cells: Vec<Option<Piece>> = Vec::with_capacity(len);

    windows(board.rows(), board.cols(), len)
        .map(|w| {
            cells.clear();
            cells.extend(w.cells().map(|m| board.get(m.row, m.col)));
            window_score(&cells, piece)
        })
        .fold(0i64, i64::saturating_add)
}

/// n 子窗口的基础分
///
/// 窗口长 5 时：1/2/3/4/5 子 → 10 / 100 / 1000 / 100000 / 10000000，
/// 防守方（对手的子）在 2 到 len-1 子之间按 1.5 倍计。
/// 长窗口中 10^n 封顶为 `WINDOW_RUN_CAP`，保证低于差一子的分数。
fn run_weight(count: usize, len: usize, defending: bool) -> i64 {
    if count >= len {
        return WINDOW_FULL;
    }
    if count <= 1 {
        return WINDOW_SINGLE;
    }
    let base = if count + 1 == len {
        WINDOW_THREAT
    } else {
        10i64
            .saturating_pow(count as u32)
            .min(WINDOW_RUN_CAP)
    };
    if defending {
        base.saturating_mul(3) / 2
    } else {
        base
    }
}

/// 窗口内 `piece` 的子是否连续
fn is_contiguous(cells: &[Option<Piece>], piece: Piece) -> bool {
    let mut first = None;
    let mut last = 0;
    let mut count = 0;
    for (i, &c) in cells.iter().enumerate() {
        if c == Some(piece) {
            first.get_or_insert(i);
            last = i;
            count += 1;
        }
    }
    count > 1 && first.is_some_and(|f| last - f + 1 == count)
}

/// 单个窗口的分数
pub fn window_score(cells: &[Option<Piece>], piece: Piece) -> i64 {
    let opp = piece.opposite();
    let own = cells.iter().filter(|&&c| c == Some(piece)).count();
    let theirs = cells.iter().filter(|&&c| c == Some(opp)).count();

    // 死窗口
    if own > 0 && theirs > 0 {
        return 0;
    }

    let mut score = 0;
    if own > 0 {
        let mut base = run_weight(own, cells.len(), false);
        if is_contiguous(cells, piece) {
            base = base.saturating_mul(2);
        }
        score += base;
    }
    if theirs > 0 {
        let mut base = run_weight(theirs, cells.len(), true);
        if is_contiguous(cells, opp) {
            base = base.saturating_mul(2);
        }
        score -= base;
    }
    score
}
