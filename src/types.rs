//! 核心类型定义
//!
//! 定义 N 子连珠中所有基础数据类型

use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 棋子（对弈双方）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Piece {
    /// 人类玩家（X，数值 1）
    Player,
    /// AI（O，数值 2）
    Ai,
}

impl Piece {
    /// 获取对方棋子
    pub fn opposite(&self) -> Piece {
        match self {
            Piece::Player => Piece::Ai,
            Piece::Ai => Piece::Player,
        }
    }

    /// 从记谱字符解析
    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            'X' | 'x' | '1' => Some(Piece::Player),
            'O' | 'o' | '2' => Some(Piece::Ai),
            _ => None,
        }
    }

    /// 转换为记谱字符
    pub fn to_char(&self) -> char {
        match self {
            Piece::Player => 'X',
            Piece::Ai => 'O',
        }
    }

    /// 数值编码（空格为 0）
    pub fn code(&self) -> u8 {
        match self {
            Piece::Player => 1,
            Piece::Ai => 2,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::Player => write!(f, "Player"),
            Piece::Ai => write!(f, "AI"),
        }
    }
}

impl FromStr for Piece {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "x" | "1" | "player" => Ok(Piece::Player),
            "o" | "2" | "ai" => Ok(Piece::Ai),
            other => Err(format!("Unknown piece: {}. Available: x, o", other)),
        }
    }
}

/// 走法 (row, col)
///
/// 记谱格式与坐标一致：列用字母 (a, b, c ...)，行用从 0 开始的数字，
/// 例如 `c0` 表示 (0, 2)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// 到另一格的曼哈顿距离
    #[inline]
    pub fn manhattan(&self, row: usize, col: usize) -> usize {
        self.row.abs_diff(row) + self.col.abs_diff(col)
    }

    /// 从记谱坐标解析（如 "c0"）
    pub fn from_notation(s: &str) -> Option<Move> {
        let s = s.trim();
        let mut chars = s.chars();
        let col_char = chars.next()?;
        if !col_char.is_ascii_lowercase() {
            return None;
        }
        let col = (col_char as u8 - b'a') as usize;
        let row = chars.as_str().parse::<usize>().ok()?;
        Some(Move { row, col })
    }

    /// 转换为记谱坐标（如 "c0"）
    pub fn to_notation(&self) -> String {
        let col_char = (b'a' + (self.col % 26) as u8) as char;
        format!("{}{}", col_char, self.row)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

/// 棋盘配置：尺寸与连子数必须一起传递
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    rows: usize,
    cols: usize,
    win_length: usize,
}

impl GameConfig {
    /// 创建配置，要求 0 < win_length <= min(rows, cols)
    pub fn new(rows: usize, cols: usize, win_length: usize) -> EngineResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::InvalidConfig(format!(
                "board must have at least one cell, got {}x{}",
                rows, cols
            )));
        }
        if win_length == 0 || win_length > rows.min(cols) {
            return Err(EngineError::InvalidConfig(format!(
                "win length {} does not fit a {}x{} board",
                win_length, rows, cols
            )));
        }
        Ok(GameConfig {
            rows,
            cols,
            win_length,
        })
    }

    /// 3x3 棋盘，三连胜
    pub fn small() -> Self {
        GameConfig {
            rows: 3,
            cols: 3,
            win_length: 3,
        }
    }

    /// 9x9 棋盘，四连胜
    pub fn large() -> Self {
        GameConfig {
            rows: 9,
            cols: 9,
            win_length: 4,
        }
    }

    /// 按边长选择标准配置（3 或 9）
    pub fn for_size(size: usize) -> EngineResult<Self> {
        match size {
            3 => Ok(Self::small()),
            9 => Ok(Self::large()),
            _ => Err(EngineError::InvalidConfig(format!(
                "unsupported board size {}, expected 3 or 9",
                size
            ))),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// 中心格（偶数边长取偏下/偏右的那一格）
    #[inline]
    pub fn center(&self) -> Move {
        Move::new(self.rows / 2, self.cols / 2)
    }

    /// 四个角（小棋盘上可能重复，已去重）
    pub fn corners(&self) -> Vec<Move> {
        let mut corners = vec![
            Move::new(0, 0),
            Move::new(0, self.cols - 1),
            Move::new(self.rows - 1, 0),
            Move::new(self.rows - 1, self.cols - 1),
        ];
        corners.sort();
        corners.dedup();
        corners
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// 评估/排序策略
    pub fn profile(&self) -> BoardProfile {
        BoardProfile::for_config(self)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::small()
    }
}

impl fmt::Display for GameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} ({} in a row)", self.rows, self.cols, self.win_length)
    }
}

/// 棋盘类型，决定评估函数和走法排序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardProfile {
    /// 小棋盘：可完全搜索，固定优先级排序 + 中心评估
    Small,
    /// 大棋盘：邻域剪枝 + 窗口评估
    Large,
}

impl BoardProfile {
    /// 最大边长不超过该值的棋盘按小棋盘处理
    pub const SMALL_MAX_SIDE: usize = 4;

    pub fn for_config(config: &GameConfig) -> Self {
        if config.rows().max(config.cols()) <= Self::SMALL_MAX_SIDE {
            BoardProfile::Small
        } else {
            BoardProfile::Large
        }
    }
}

/// 游戏结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    Ongoing,
    PlayerWin,
    AiWin,
    Draw,
}

impl GameResult {
    /// 指定一方获胜的结果
    pub fn win_for(piece: Piece) -> Self {
        match piece {
            Piece::Player => GameResult::PlayerWin,
            Piece::Ai => GameResult::AiWin,
        }
    }

    pub fn winner(&self) -> Option<Piece> {
        match self {
            GameResult::PlayerWin => Some(Piece::Player),
            GameResult::AiWin => Some(Piece::Ai),
            GameResult::Ongoing | GameResult::Draw => None,
        }
    }

    pub fn is_over(&self) -> bool {
        *self != GameResult::Ongoing
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameResult::Ongoing => "ongoing",
            GameResult::PlayerWin => "player wins",
            GameResult::AiWin => "AI wins",
            GameResult::Draw => "draw",
        };
        write!(f, "{}", text)
    }
}

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 只用规则（赢棋 / 堵棋 / 中心 / 角 / 随机）
    Easy,
    /// 浅层 Alpha-Beta 搜索
    Medium,
    /// 深层 Alpha-Beta 搜索
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// 失败时回退的下一级难度
    pub fn weaker(&self) -> Option<Difficulty> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(Difficulty::Easy),
            Difficulty::Hard => Some(Difficulty::Medium),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "reactive" => Ok(Difficulty::Easy),
            "medium" | "bounded" => Ok(Difficulty::Medium),
            "hard" | "deep" => Ok(Difficulty::Hard),
            other => Err(format!(
                "Unknown difficulty: {}. Available: easy, medium, hard",
                other
            )),
        }
    }
}

/// 走法说明标签（用于提示文字）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveReason {
    Winning,
    Blocking,
    Center,
    Corner,
    Other,
}

impl fmt::Display for MoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            MoveReason::Winning => "winning",
            MoveReason::Blocking => "blocking",
            MoveReason::Center => "center",
            MoveReason::Corner => "corner",
            MoveReason::Other => "other",
        };
        write!(f, "{}", tag)
    }
}
