//! 规则：合法走法、胜负与和棋判定
//!
//! 全部是棋盘上的纯函数，连子数取自棋盘自带的 `GameConfig`。

use crate::board::Board;
use crate::types::{GameResult, Move, Piece};

/// 四个连线方向：横、竖、主对角、副对角
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// 一段长度为 `len` 的连续格子（窗口）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub row: usize,
    pub col: usize,
    pub direction: (isize, isize),
    pub len: usize,
}

impl Window {
    /// 窗口内的格子坐标
    pub fn cells(&self) -> impl Iterator<Item = Move> {
        let Window {
            row,
            col,
            direction: (dr, dc),
            len,
        } = *self;
        (0..len as isize).map(move |k| {
            Move::new(
                (row as isize + k * dr) as usize,
                (col as isize + k * dc) as usize,
            )
        })
    }
}

/// 枚举 rows x cols 棋盘上所有长度为 `len` 的窗口
pub fn windows(rows: usize, cols: usize, len: usize) -> impl Iterator<Item = Window> {
    DIRECTIONS.into_iter().flat_map(move |direction| {
        let (dr, dc) = direction;
        // 起点范围：窗口末端必须仍在棋盘内
        let row_span = match (len, dr) {
            (0, _) => 0,
            (_, 0) => rows,
            _ => (rows + 1).saturating_sub(len),
        };
        let (col_start, col_end) = match dc {
            0 => (0, cols),
            1 => (0, (cols + 1).saturating_sub(len)),
            _ => (len.saturating_sub(1), cols),
        };
        (0..row_span).flat_map(move |row| {
            (col_start..col_end).map(move |col| Window {
                row,
                col,
                direction,
                len,
            })
        })
    })
}

/// 所有空格（行优先）
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(board.empty_count());
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if board.is_empty_at(row, col) {
                moves.push(Move::new(row, col));
            }
        }
    }
    moves
}

/// 格子在棋盘内且为空
#[inline]
pub fn is_legal(board: &Board, mv: Move) -> bool {
    board.is_empty_at(mv.row, mv.col)
}

/// 任一方向上存在 `win_length` 个连续同色棋子
pub fn has_win_with_length(board: &Board, piece: Piece, win_length: usize) -> bool {
    if win_length == 0 {
        return false;
    }
    windows(board.rows(), board.cols(), win_length)
        .any(|w| w.cells().all(|m| board.get(m.row, m.col) == Some(piece)))
}

/// 按棋盘配置的连子数判断是否获胜
#[inline]
pub fn has_win(board: &Board, piece: Piece) -> bool {
    has_win_with_length(board, piece, board.win_length())
}

/// 没有空格
#[inline]
pub fn is_full(board: &Board) -> bool {
    board.empty_count() == 0
}

/// 任一方获胜或棋盘已满
pub fn is_terminal(board: &Board) -> bool {
    has_win(board, Piece::Player) || has_win(board, Piece::Ai) || is_full(board)
}

/// 当前局面结果
///
/// 双方同时成线的局面不会在正常对局中出现，此时先报告玩家获胜。
pub fn check_outcome(board: &Board) -> GameResult {
    if has_win(board, Piece::Player) {
        GameResult::PlayerWin
    } else if has_win(board, Piece::Ai) {
        GameResult::AiWin
    } else if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::Ongoing
    }
}

/// 从 (row, col) 沿方向数同色棋子（不含起点）
fn run_length(board: &Board, mv: Move, (dr, dc): (isize, isize), piece: Piece) -> usize {
    let mut count = 0;
    let mut r = mv.row as isize + dr;
    let mut c = mv.col as isize + dc;
    while r >= 0 && c >= 0 && board.get(r as usize, c as usize) == Some(piece) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// 在空格 `mv` 落下 `piece` 后是否形成连线（不修改棋盘）
pub fn is_winning_move(board: &Board, mv: Move, piece: Piece) -> bool {
    if !is_legal(board, mv) {
        return false;
    }
    let need = board.win_length();
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let forward = run_length(board, mv, (dr, dc), piece);
        let backward = run_length(board, mv, (-dr, -dc), piece);
        forward + backward + 1 >= need
    })
}

/// 所有能让 `piece` 立即获胜的空格（行优先）
pub fn winning_moves(board: &Board, piece: Piece) -> Vec<Move> {
    legal_moves(board)
        .into_iter()
        .filter(|&mv| is_winning_move(board, mv, piece))
        .collect()
}
