//! 走法排序
//!
//! 好的排序能让 Alpha-Beta 更早剪枝：
//! - 小棋盘：固定优先级（中心 → 四角 → 其余格子）
//! - 大棋盘：只考虑已有棋子周围一格的空格，按到中心的曼哈顿距离排序

use crate::board::Board;
use crate::rules::legal_moves;
use crate::types::{BoardProfile, GameConfig, Move};

/// 8 邻域偏移
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// 按棋盘类型生成排序后的候选走法
pub fn order_moves(board: &Board) -> Vec<Move> {
    match board.config().profile() {
        BoardProfile::Small => priority_moves(board),
        BoardProfile::Large => neighbor_moves(board),
    }
}

/// 小棋盘的固定优先级：中心、四角、其余格子（行优先）
///
/// 3x3 上即 (1,1) (0,0) (0,2) (2,0) (2,2) (0,1) (1,0) (1,2) (2,1)。
pub fn priority_order(config: &GameConfig) -> Vec<Move> {
    let center = config.center();
    let corners = config.corners();
    let mut order = Vec::with_capacity(config.cell_count());

    order.push(center);
    order.extend(corners.iter().copied().filter(|&c| c != center));
    for row in 0..config.rows() {
        for col in 0..config.cols() {
            let mv = Move::new(row, col);
            if mv != center && !corners.contains(&mv) {
                order.push(mv);
            }
        }
    }
    order
}

/// 固定优先级中仍为空的格子
pub fn priority_moves(board: &Board) -> Vec<Move> {
    priority_order(board.config())
        .into_iter()
        .filter(|m| board.is_empty_at(m.row, m.col))
        .collect()
}

/// 邻域剪枝
///
/// - 空棋盘：只返回中心
/// - 有棋子但没有空邻居：返回全部合法走法
/// - 否则：相邻空格按到中心距离升序（距离相同保持行优先）
pub fn neighbor_moves(board: &Board) -> Vec<Move> {
    let rows = board.rows() as isize;
    let cols = board.cols() as isize;
    let mut candidate = vec![false; board.config().cell_count()];
    let mut has_piece = false;

    for (mv, _) in board.occupied() {
        has_piece = true;
        for (dr, dc) in NEIGHBORS {
            let r = mv.row as isize + dr;
            let c = mv.col as isize + dc;
            if r < 0 || c < 0 || r >= rows || c >= cols {
                continue;
            }
            let (r, c) = (r as usize, c as usize);
            if board.is_empty_at(r, c) {
                candidate[r * board.cols() + c] = true;
            }
        }
    }

    if !has_piece {
        return vec![board.config().center()];
    }

    let cols = board.cols();
    let mut moves: Vec<Move> = candidate
        .iter()
        .enumerate()
        .filter(|(_, &flag)| flag)
        .map(|(i, _)| Move::new(i / cols, i % cols))
        .collect();

    if moves.is_empty() {
        return legal_moves(board);
    }

    let center = board.config().center();
    moves.sort_by_key(|m| m.manhattan(center.row, center.col));
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameConfig;

    #[test]
    fn test_small_priority_order() {
        let order = priority_order(&GameConfig::small());
        assert_eq!(
            order,
            vec![
                Move::new(1, 1),
                Move::new(0, 0),
                Move::new(0, 2),
                Move::new(2, 0),
                Move::new(2, 2),
                Move::new(0, 1),
                Move::new(1, 0),
                Move::new(1, 2),
                Move::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_small_filters_occupied() {
        let board = Board::from_notation("X2/1O1/3").unwrap();
        let moves = order_moves(&board);
        assert_eq!(moves.len(), 7);
        assert_eq!(moves[0], Move::new(0, 2));
        assert!(!moves.contains(&Move::new(1, 1)));
    }

    #[test]
    fn test_empty_large_board_returns_center() {
        let board = Board::new(GameConfig::large());
        assert_eq!(order_moves(&board), vec![Move::new(4, 4)]);
    }

    #[test]
    fn test_neighbors_sorted_by_center_distance() {
        let board = Board::from_notation("9/9/9/9/4X4/9/9/9/9").unwrap();
        let moves = order_moves(&board);
        assert_eq!(moves.len(), 8);
        // 距离 1 的四个正交邻居在前
        assert!(moves[..4].iter().all(|m| m.manhattan(4, 4) == 1));
        assert_eq!(moves[0], Move::new(3, 4));
    }

    #[test]
    fn test_corner_piece_neighbors() {
        let board = Board::from_notation("X8/9/9/9/9/9/9/9/9").unwrap();
        let moves = order_moves(&board);
        assert_eq!(moves, vec![Move::new(1, 1), Move::new(0, 1), Move::new(1, 0)]);
    }
}
