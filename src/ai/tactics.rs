//! 即时战术：一步赢棋 / 一步堵棋，以及走法说明

use crate::board::Board;
use crate::rules::{is_legal, is_winning_move, legal_moves};
use crate::types::{Move, MoveReason, Piece};

/// 第一个能让 `piece` 立即获胜的走法（行优先）
pub fn immediate_win(board: &Board, piece: Piece) -> Option<Move> {
    legal_moves(board)
        .into_iter()
        .find(|&mv| is_winning_move(board, mv, piece))
}

/// 第一个能堵住对手立即获胜的走法（行优先）
pub fn immediate_block(board: &Board, piece: Piece) -> Option<Move> {
    immediate_win(board, piece.opposite())
}

/// 先找赢棋，再找堵棋
pub fn forced_move(board: &Board, piece: Piece) -> Option<(Move, MoveReason)> {
    if let Some(mv) = immediate_win(board, piece) {
        return Some((mv, MoveReason::Winning));
    }
    immediate_block(board, piece).map(|mv| (mv, MoveReason::Blocking))
}

/// 说明一步棋的类型（用于提示文字）
///
/// 优先级：赢棋 > 堵棋 > 中心 > 角 > 其他。
/// 中心指 `GameConfig::center` 那一格。已被占或越界的格子一律为其他。
pub fn explain_move(board: &Board, mv: Move, piece: Piece) -> MoveReason {
    if !is_legal(board, mv) {
        return MoveReason::Other;
    }
    if is_winning_move(board, mv, piece) {
        return MoveReason::Winning;
    }
    if is_winning_move(board, mv, piece.opposite()) {
        return MoveReason::Blocking;
    }

    let config = board.config();
    if mv == config.center() {
        return MoveReason::Center;
    }
    if config.corners().contains(&mv) {
        return MoveReason::Corner;
    }
    MoveReason::Other
}
