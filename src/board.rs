//! 棋盘
//!
//! 使用一维数组存储格子，尺寸与连子数由 `GameConfig` 决定，
//! 随棋盘一起传递，不存在全局的棋盘尺寸。

use crate::error::{EngineError, EngineResult};
use crate::notation;
use crate::types::{GameConfig, Move, Piece};
use std::fmt;

/// 棋盘（行优先存储）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// rows * cols 个格子，None 为空格
    cells: Vec<Option<Piece>>,
    config: GameConfig,
}

impl Board {
    /// 创建空棋盘
    pub fn new(config: GameConfig) -> Board {
        Board {
            cells: vec![None; config.cell_count()],
            config,
        }
    }

    /// 从数值网格创建（0 = 空，1 = 玩家，2 = AI）
    pub fn from_grid(grid: &[Vec<u8>], win_length: usize) -> EngineResult<Board> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, |r| r.len());
        let config = GameConfig::new(rows, cols, win_length)?;
        let mut board = Board::new(config);

        for (r, line) in grid.iter().enumerate() {
            if line.len() != cols {
                return Err(EngineError::InvalidConfig(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    line.len(),
                    cols
                )));
            }
            for (c, &code) in line.iter().enumerate() {
                let cell = match code {
                    0 => None,
                    1 => Some(Piece::Player),
                    2 => Some(Piece::Ai),
                    other => {
                        return Err(EngineError::InvalidConfig(format!(
                            "unknown cell value {} at ({}, {})",
                            other, r, c
                        )))
                    }
                };
                board.cells[r * cols + c] = cell;
            }
        }

        Ok(board)
    }

    /// 从记谱字符串创建
    pub fn from_notation(s: &str) -> EngineResult<Board> {
        notation::parse_board(s)
    }

    /// 转换为记谱字符串
    pub fn to_notation(&self) -> String {
        notation::board_to_notation(self)
    }

    /// 数值网格（0 = 空，1 = 玩家，2 = AI）
    pub fn to_grid(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.config.cols())
            .map(|row| row.iter().map(|c| c.map_or(0, |p| p.code())).collect())
            .collect()
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.config.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.config.cols()
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.config.win_length()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.config.cols() + col
    }

    /// 获取某格的棋子（越界返回 None）
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Piece> {
        if !self.config.contains(row, col) {
            return None;
        }
        self.cells[self.index(row, col)]
    }

    /// 格子在棋盘内且为空
    #[inline]
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.config.contains(row, col) && self.cells[self.index(row, col)].is_none()
    }

    /// 落子（检查合法性）
    pub fn apply_move(&mut self, row: usize, col: usize, piece: Piece) -> EngineResult<()> {
        if !self.config.contains(row, col) {
            return Err(EngineError::IllegalMove {
                row,
                col,
                reason: format!("outside the {}x{} board", self.rows(), self.cols()),
            });
        }
        let idx = self.index(row, col);
        if let Some(occupant) = self.cells[idx] {
            return Err(EngineError::IllegalMove {
                row,
                col,
                reason: format!("cell already taken by {}", occupant),
            });
        }
        self.cells[idx] = Some(piece);
        Ok(())
    }

    /// 落子（不检查，搜索内部使用，必须与 `clear` 成对调用）
    #[inline]
    pub(crate) fn place(&mut self, mv: Move, piece: Piece) {
        let idx = self.index(mv.row, mv.col);
        debug_assert!(self.cells[idx].is_none(), "place on occupied cell {}", mv);
        self.cells[idx] = Some(piece);
    }

    /// 清空某格，返回原来的棋子
    #[inline]
    pub fn clear(&mut self, mv: Move) -> Option<Piece> {
        if !self.config.contains(mv.row, mv.col) {
            return None;
        }
        let idx = self.index(mv.row, mv.col);
        self.cells[idx].take()
    }

    /// 所有已落子的格子（行优先）
    pub fn occupied(&self) -> impl Iterator<Item = (Move, Piece)> + '_ {
        let cols = self.config.cols();
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, c)| c.map(|p| (Move::new(i / cols, i % cols), p)))
    }

    /// 已落子数量
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// 空格数量
    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.piece_count()
    }

    /// 某一方的棋子数量
    pub fn count_of(&self, piece: Piece) -> usize {
        self.cells.iter().filter(|&&c| c == Some(piece)).count()
    }

    /// 按双方子数推断下一手（子数相同时玩家先走）
    pub fn side_to_move(&self) -> Piece {
        if self.count_of(Piece::Player) > self.count_of(Piece::Ai) {
            Piece::Ai
        } else {
            Piece::Player
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..self.cols() {
            write!(f, " {}", (b'a' + (c % 26) as u8) as char)?;
        }
        writeln!(f)?;
        for r in 0..self.rows() {
            write!(f, "{:>2}", r)?;
            for c in 0..self.cols() {
                let ch = self.get(r, c).map_or('.', |p| p.to_char());
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(GameConfig::large());
        assert_eq!(board.piece_count(), 0);
        assert_eq!(board.empty_count(), 81);
        assert_eq!(board.rows(), 9);
        assert_eq!(board.win_length(), 4);
    }

    #[test]
    fn test_apply_move_rejects_occupied_and_out_of_range() {
        let mut board = Board::new(GameConfig::small());
        board.apply_move(1, 1, Piece::Player).unwrap();

        let err = board.apply_move(1, 1, Piece::Ai).unwrap_err();
        assert!(matches!(err, EngineError::IllegalMove { row: 1, col: 1, .. }));

        let err = board.apply_move(3, 0, Piece::Ai).unwrap_err();
        assert!(matches!(err, EngineError::IllegalMove { row: 3, col: 0, .. }));

        assert_eq!(board.get(1, 1), Some(Piece::Player));
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn test_from_grid() {
        let board = Board::from_grid(&[vec![1, 1, 0], vec![2, 2, 0], vec![0, 0, 0]], 3).unwrap();
        assert_eq!(board.get(0, 0), Some(Piece::Player));
        assert_eq!(board.get(1, 1), Some(Piece::Ai));
        assert_eq!(board.get(2, 2), None);
        assert_eq!(board.to_grid()[1], vec![2, 2, 0]);

        assert!(Board::from_grid(&[vec![0, 3, 0], vec![0; 3], vec![0; 3]], 3).is_err());
        assert!(Board::from_grid(&[vec![0, 0], vec![0; 3], vec![0; 3]], 2).is_err());
    }

    #[test]
    fn test_place_and_clear_restore_board() {
        let mut board = Board::new(GameConfig::small());
        let before = board.clone();
        board.place(Move::new(0, 2), Piece::Ai);
        assert_ne!(board, before);
        assert_eq!(board.clear(Move::new(0, 2)), Some(Piece::Ai));
        assert_eq!(board, before);
    }

    #[test]
    fn test_side_to_move() {
        let mut board = Board::new(GameConfig::small());
        assert_eq!(board.side_to_move(), Piece::Player);
        board.apply_move(0, 0, Piece::Player).unwrap();
        assert_eq!(board.side_to_move(), Piece::Ai);
    }
}
