//! 测试局面库
//!
//! 提供命名的棋盘记谱，方便测试、基准和调试
//!
//! 命名规范:
//! - EMPTY_*: 空棋盘
//! - WIN_n: 一步可赢
//! - BLOCK_n: 必须堵棋
//! - LARGE_n: 9x9 局面
//! - FINAL_n: 终局（胜负已分或和棋）
//!
//! X 为玩家，O 为 AI。

// =============================================================================
// 空棋盘 (EMPTY)
// =============================================================================

/// 3x3 三连
pub const EMPTY_3X3: &str = "3/3/3";

/// 9x9 四连
pub const EMPTY_9X9: &str = "9/9/9/9/9/9/9/9/9 4";

// =============================================================================
// 一步可赢 (WIN_1 ~ WIN_5)
// =============================================================================

/// X 在 (0,2) 横向连成
pub const WIN_1: &str = "XX1/OO1/3";

/// O 在 (2,2) 斜向连成
pub const WIN_2: &str = "O1X/XO1/X2";

/// X 在 (2,1) 纵向连成
pub const WIN_3: &str = "OX1/OX1/3";

/// 双方都能一步连成，先手方应当直接赢
pub const WIN_4: &str = "XX1/OO1/X1O";

/// 9x9 X 横向三子，两端都能连成四
pub const WIN_5: &str = "9/9/9/9/3XXX3/9/2O1O4/4O4/9 4";

// =============================================================================
// 必须堵棋 (BLOCK_1 ~ BLOCK_3)
// =============================================================================

/// X 走，必须堵 (1,2)
pub const BLOCK_1: &str = "OO1/XX1/3";

/// X 走，必须堵 (0,2)
pub const BLOCK_2: &str = "OO1/X2/1X1";

/// O 走，必须堵反斜线 (2,0)
pub const BLOCK_3: &str = "O1X/1X1/3";

// =============================================================================
// 9x9 局面 (LARGE_1 ~ LARGE_3)
// =============================================================================

/// 中局，双方各三子左右
pub const LARGE_1: &str = "9/9/9/3XO4/3XXO3/4O4/9/9/9 4";

/// 只有中心一子
pub const LARGE_2: &str = "9/9/9/9/4X4/9/9/9/9 4";

/// 角落单子
pub const LARGE_3: &str = "X8/9/9/9/9/9/9/9/9 4";

// =============================================================================
// 终局 (FINAL_1 ~ FINAL_4)
// =============================================================================

/// 满盘和棋
pub const FINAL_1: &str = "XOX/XOO/OXX";

/// X 已横向连成
pub const FINAL_2: &str = "XXX/OO1/3";

/// O 已斜向连成
pub const FINAL_3: &str = "OX1/XO1/X1O";

/// 9x9 X 横向四连
pub const FINAL_4: &str = "9/9/9/9/2XXXX3/9/9/9/9 4";

// =============================================================================
// 局面列表
// =============================================================================

/// 所有一步可赢局面
pub const WIN_POSITIONS: [&str; 5] = [WIN_1, WIN_2, WIN_3, WIN_4, WIN_5];

/// 所有堵棋局面
pub const BLOCK_POSITIONS: [&str; 3] = [BLOCK_1, BLOCK_2, BLOCK_3];

/// 所有 9x9 局面
pub const LARGE_POSITIONS: [&str; 3] = [LARGE_1, LARGE_2, LARGE_3];

/// 所有终局局面
pub const FINAL_POSITIONS: [&str; 4] = [FINAL_1, FINAL_2, FINAL_3, FINAL_4];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{check_outcome, is_terminal};
    use crate::types::GameResult;
    use crate::Board;

    fn all_positions() -> Vec<&'static str> {
        let mut all = vec![EMPTY_3X3, EMPTY_9X9];
        all.extend(WIN_POSITIONS);
        all.extend(BLOCK_POSITIONS);
        all.extend(LARGE_POSITIONS);
        all.extend(FINAL_POSITIONS);
        all
    }

    #[test]
    fn test_all_positions_valid() {
        for notation in all_positions() {
            let board = Board::from_notation(notation);
            assert!(board.is_ok(), "{} invalid: {:?}", notation, board.err());
        }
    }

    #[test]
    fn test_non_final_positions_ongoing() {
        let mut ongoing = vec![EMPTY_3X3, EMPTY_9X9];
        ongoing.extend(WIN_POSITIONS);
        ongoing.extend(BLOCK_POSITIONS);
        ongoing.extend(LARGE_POSITIONS);
        for notation in ongoing {
            let board = Board::from_notation(notation).unwrap();
            assert!(!is_terminal(&board), "{} should be ongoing", notation);
        }
    }

    #[test]
    fn test_final_positions() {
        let expected = [
            GameResult::Draw,
            GameResult::PlayerWin,
            GameResult::AiWin,
            GameResult::PlayerWin,
        ];
        for (notation, result) in FINAL_POSITIONS.iter().zip(expected) {
            let board = Board::from_notation(notation).unwrap();
            assert_eq!(check_outcome(&board), result, "{}", notation);
        }
    }
}
