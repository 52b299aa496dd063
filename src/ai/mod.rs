//! AI 策略模块
//!
//! 三档难度，逐级回退：
//! - Easy   (`ReactiveAI`)：赢棋 → 堵棋 → 中心 → 随机角 → 随机
//! - Medium (`MinimaxAI`)：赢棋 / 堵棋，否则浅层搜索；失败回退到 Easy
//! - Hard   (`MinimaxAI`)：赢棋 / 堵棋，否则深层搜索；失败回退到 Medium

pub mod eval;
pub mod ordering;
pub mod search;
pub mod tactics;

mod minimax;
mod reactive;

pub use minimax::MinimaxAI;
pub use reactive::ReactiveAI;

use crate::board::Board;
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::rules::{is_legal, legal_moves};
use crate::types::{BoardProfile, Difficulty, Move, Piece};
use log::{info, warn};
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// 全局节点计数器
pub static NODE_COUNT: AtomicU64 = AtomicU64::new(0);

/// 重置节点计数器
pub fn reset_node_count() {
    NODE_COUNT.store(0, AtomicOrdering::Relaxed);
}

/// 获取当前节点计数
pub fn get_node_count() -> u64 {
    NODE_COUNT.load(AtomicOrdering::Relaxed)
}

/// AI 配置
#[derive(Debug, Clone)]
pub struct AIConfig {
    /// 小棋盘搜索深度
    pub depth: u32,
    /// 大棋盘搜索深度
    pub large_board_depth: u32,
    /// 时间限制（秒）
    pub time_limit: Option<f64>,
    /// 随机种子
    pub seed: Option<u64>,
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            depth: 2,
            large_board_depth: 2,
            time_limit: None,
            seed: None,
        }
    }
}

impl AIConfig {
    /// 按棋盘类型取搜索深度
    pub fn depth_for(&self, profile: BoardProfile) -> u32 {
        match profile {
            BoardProfile::Small => self.depth,
            BoardProfile::Large => self.large_board_depth,
        }
    }
}

/// 走法评分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    /// 搜索分数；规则直接给出的走法为 0
    pub score: i64,
}

/// AI 策略接口
pub trait AIStrategy {
    /// 该策略对应的难度
    fn difficulty(&self) -> Difficulty;

    /// 为 `piece` 选择走法（棋盘有空格时必须返回 Some，除非是可回退的搜索层）
    fn select_move(&mut self, board: &Board, piece: Piece) -> Option<ScoredMove>;

    /// 选择最佳走法
    fn select_best_move(&mut self, board: &Board, piece: Piece) -> Option<Move> {
        self.select_move(board, piece).map(|sm| sm.mv)
    }
}

/// 构建某一难度及其回退链
fn build_strategy(
    difficulty: Difficulty,
    settings: &EngineConfig,
    seed: Option<u64>,
) -> Box<dyn AIStrategy> {
    let config = settings.ai_config(difficulty, seed);
    match difficulty.weaker() {
        None => Box::new(ReactiveAI::new(&config)),
        Some(weaker) => Box::new(MinimaxAI::new(
            &config,
            difficulty,
            build_strategy(weaker, settings, seed),
        )),
    }
}

/// AI 引擎 - 统一的 AI 接口
pub struct AIEngine {
    strategy: Box<dyn AIStrategy>,
}

impl AIEngine {
    /// 按难度创建（含回退链）
    pub fn from_difficulty(
        difficulty: Difficulty,
        settings: &EngineConfig,
        seed: Option<u64>,
    ) -> Self {
        AIEngine {
            strategy: build_strategy(difficulty, settings, seed),
        }
    }

    /// 创建规则 AI
    pub fn reactive(seed: Option<u64>) -> Self {
        Self::from_difficulty(Difficulty::Easy, &EngineConfig::default(), seed)
    }

    /// 从难度名称创建
    pub fn from_strategy(
        name: &str,
        settings: &EngineConfig,
        seed: Option<u64>,
    ) -> Result<Self, String> {
        let difficulty: Difficulty = name.parse()?;
        Ok(Self::from_difficulty(difficulty, settings, seed))
    }

    pub fn difficulty(&self) -> Difficulty {
        self.strategy.difficulty()
    }

    /// 为 `piece` 选择走法
    ///
    /// 只有棋盘没有空格时返回 `NoLegalMove`。
    pub fn choose_move(&mut self, board: &Board, piece: Piece) -> EngineResult<ScoredMove> {
        let legal = legal_moves(board);
        let first = *legal.first().ok_or(EngineError::NoLegalMove)?;

        match self.strategy.select_move(board, piece) {
            Some(sm) if is_legal(board, sm.mv) => {
                info!(
                    "{} AI ({}) chose {} (score {})",
                    self.difficulty(),
                    piece,
                    sm.mv,
                    sm.score
                );
                Ok(sm)
            }
            other => {
                warn!(
                    "{} AI returned {:?}, playing first legal move {}",
                    self.difficulty(),
                    other.map(|sm| sm.mv),
                    first
                );
                Ok(ScoredMove { mv: first, score: 0 })
            }
        }
    }
}

/// 用默认配置为 `piece` 选择一步棋
pub fn choose_ai_move(board: &Board, piece: Piece, difficulty: Difficulty) -> EngineResult<Move> {
    AIEngine::from_difficulty(difficulty, &EngineConfig::default(), None)
        .choose_move(board, piece)
        .map(|sm| sm.mv)
}
