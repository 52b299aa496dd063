//! 引擎错误类型

use thiserror::Error;

/// 引擎对外暴露的错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// 落子位置越界或已被占用
    #[error("Illegal move at ({row}, {col}): {reason}")]
    IllegalMove {
        row: usize,
        col: usize,
        reason: String,
    },

    /// 在已满的棋盘上请求 AI 走法
    #[error("No legal move: the board is full")]
    NoLegalMove,

    /// 对局已结束
    #[error("Game is already over: {0}")]
    GameOver(String),

    /// 不是该方的回合（例如人类回合请求 AI 走棋）
    #[error("Out of turn: it is {0}'s move")]
    OutOfTurn(String),

    /// 棋盘尺寸与连子数不匹配
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// 棋盘记谱无法解析
    #[error("Invalid notation: {0}")]
    InvalidNotation(String),

    /// 引擎配置文件读取或解析失败
    #[error("Config error: {0}")]
    Config(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
