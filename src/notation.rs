//! 棋盘记谱解析和生成
//!
//! 格式: `<棋盘> [连子数]`
//!
//! 棋盘符号：
//! - 玩家：X
//! - AI：O
//! - 空格：数字（连续空格数，可多位）
//! - 行之间用 `/` 分隔，第一段是第 0 行
//!
//! 省略连子数时：最大边长不超过 4 的棋盘为 3，其余为 4（均不超过最短边）。

use crate::board::Board;
use crate::error::{EngineError, EngineResult};
use crate::types::{BoardProfile, GameConfig, Piece};

/// 省略连子数时的默认值
pub fn default_win_length(rows: usize, cols: usize) -> usize {
    let preferred = if rows.max(cols) <= BoardProfile::SMALL_MAX_SIDE {
        3
    } else {
        4
    };
    preferred.min(rows.min(cols))
}

/// 记谱允许的最大边长
pub const MAX_SIDE: usize = 64;

fn too_wide(row: usize) -> EngineError {
    EngineError::InvalidNotation(format!("row {} is wider than {} cells", row, MAX_SIDE))
}

/// 解析一行，返回格子列表
fn parse_row(row_str: &str, row: usize) -> EngineResult<Vec<Option<Piece>>> {
    let mut cells = Vec::new();
    let mut run = 0usize;

    let flush = |cells: &mut Vec<Option<Piece>>, run: usize| -> EngineResult<()> {
        if cells.len() + run > MAX_SIDE {
            return Err(too_wide(row));
        }
        cells.extend(std::iter::repeat(None).take(run));
        Ok(())
    };

    for ch in row_str.chars() {
        if let Some(d) = ch.to_digit(10) {
            run = run
                .checked_mul(10)
                .and_then(|r| r.checked_add(d as usize))
                .filter(|&r| r <= MAX_SIDE)
                .ok_or_else(|| too_wide(row))?;
            continue;
        }
        flush(&mut cells, run)?;
        run = 0;
        match Piece::from_char(ch) {
            Some(piece) => cells.push(Some(piece)),
            None => {
                return Err(EngineError::InvalidNotation(format!(
                    "invalid character '{}' in row {}",
                    ch, row
                )))
            }
        }
        if cells.len() > MAX_SIDE {
            return Err(too_wide(row));
        }
    }
    flush(&mut cells, run)?;

    Ok(cells)
}

/// 解析记谱字符串
pub fn parse_board(s: &str) -> EngineResult<Board> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.is_empty() || parts.len() > 2 {
        return Err(EngineError::InvalidNotation(format!(
            "expected '<board> [win_length]', got: {:?}",
            s
        )));
    }

    if parts[0].split('/').count() > MAX_SIDE {
        return Err(EngineError::InvalidNotation(format!(
            "more than {} rows",
            MAX_SIDE
        )));
    }

    let rows: Vec<Vec<Option<Piece>>> = parts[0]
        .split('/')
        .enumerate()
        .map(|(r, row_str)| parse_row(row_str, r))
        .collect::<EngineResult<_>>()?;

    let cols = rows[0].len();
    if let Some((r, bad)) = rows.iter().enumerate().find(|(_, row)| row.len() != cols) {
        return Err(EngineError::InvalidNotation(format!(
            "row {} has {} cells, expected {}",
            r,
            bad.len(),
            cols
        )));
    }

    let win_length = match parts.get(1) {
        Some(w) => w.parse::<usize>().map_err(|_| {
            EngineError::InvalidNotation(format!("invalid win length: {}", w))
        })?,
        None => default_win_length(rows.len(), cols),
    };

    let config = GameConfig::new(rows.len(), cols, win_length)?;
    let mut board = Board::new(config);
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if let Some(piece) = cell {
                board.apply_move(r, c, *piece)?;
            }
        }
    }

    Ok(board)
}

/// 生成记谱字符串（总是带连子数）
pub fn board_to_notation(board: &Board) -> String {
    let mut rows = Vec::with_capacity(board.rows());

    for r in 0..board.rows() {
        let mut row_str = String::new();
        let mut empty = 0;
        for c in 0..board.cols() {
            match board.get(r, c) {
                Some(piece) => {
                    if empty > 0 {
                        row_str.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row_str.push(piece.to_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            row_str.push_str(&empty.to_string());
        }
        rows.push(row_str);
    }

    format!("{} {}", rows.join("/"), board.win_length())
}
