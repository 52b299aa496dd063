//! N-in-a-row AI Engine
//!
//! N 子棋（3x3 三连 / 9x9 四连）AI 引擎 - 支持棋盘记谱输入输出

pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod notation;
pub mod rules;
pub mod test_positions;
pub mod types;

pub use ai::{
    get_node_count, reset_node_count, AIConfig, AIEngine, AIStrategy, MinimaxAI, ReactiveAI,
    ScoredMove,
};
pub use board::Board;
pub use config::{EngineConfig, TierSettings};
pub use error::{EngineError, EngineResult};
pub use game::{Game, GameMode};
pub use notation::{board_to_notation, default_win_length, parse_board};
pub use rules::{has_win, is_full, is_legal, is_terminal, winning_moves};
pub use types::{BoardProfile, Difficulty, GameConfig, GameResult, Move, MoveReason, Piece};

/// 创建空棋盘，连子数按棋盘大小取默认值
pub fn new_board(rows: usize, cols: usize) -> EngineResult<Board> {
    let config = GameConfig::new(rows, cols, default_win_length(rows, cols))?;
    Ok(Board::new(config))
}

/// 在棋盘上落子；格子越界或已占用时返回 `IllegalMove`
pub fn apply_move(board: &mut Board, row: usize, col: usize, piece: Piece) -> EngineResult<()> {
    board.apply_move(row, col, piece)
}

/// 所有空格（行优先）
pub fn legal_moves(board: &Board) -> Vec<Move> {
    rules::legal_moves(board)
}

/// 当前对局结果
pub fn check_outcome(board: &Board) -> GameResult {
    rules::check_outcome(board)
}

/// 按难度为 `piece` 选择一步棋；棋盘已满时返回 `NoLegalMove`
pub fn choose_ai_move(board: &Board, piece: Piece, difficulty: Difficulty) -> EngineResult<Move> {
    ai::choose_ai_move(board, piece, difficulty)
}

/// 走法分类（赢棋 / 堵棋 / 中心 / 角 / 其他）
pub fn explain_move(board: &Board, mv: Move, piece: Piece) -> MoveReason {
    ai::tactics::explain_move(board, mv, piece)
}
