//! 对局
//!
//! 维护一盘棋的回合与结果，支持人机、双人、AI 对 AI 三种模式。
//! 不涉及任何显示或输入设备：调用方负责展示棋盘并在合适的时机调用
//! `play_human` / `play_ai`。

use crate::ai::tactics::explain_move;
use crate::ai::AIEngine;
use crate::board::Board;
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::rules::{has_win, is_full};
use crate::types::{Difficulty, GameConfig, GameResult, Move, MoveReason, Piece};
use log::info;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 对局模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// 人类执 X，AI 执 O
    HumanVsAi,
    HumanVsHuman,
    AiVsAi,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameMode::HumanVsAi => "human-vs-ai",
            GameMode::HumanVsHuman => "human-vs-human",
            GameMode::AiVsAi => "ai-vs-ai",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "human-vs-ai" | "hva" => Ok(GameMode::HumanVsAi),
            "human-vs-human" | "hvh" => Ok(GameMode::HumanVsHuman),
            "ai-vs-ai" | "ava" => Ok(GameMode::AiVsAi),
            other => Err(format!(
                "Unknown mode: {}. Available: human-vs-ai, human-vs-human, ai-vs-ai",
                other
            )),
        }
    }
}

/// 一盘棋
pub struct Game {
    board: Board,
    mode: GameMode,
    difficulty: Difficulty,
    turn: Piece,
    result: GameResult,
    history: Vec<(Move, Piece)>,
    engine: AIEngine,
    rng: StdRng,
}

impl Game {
    /// 使用默认引擎配置创建对局
    pub fn new(config: GameConfig, mode: GameMode, difficulty: Difficulty) -> Self {
        Self::with_settings(config, mode, difficulty, &EngineConfig::default(), None)
    }

    /// 指定引擎配置和随机种子创建对局
    pub fn with_settings(
        config: GameConfig,
        mode: GameMode,
        difficulty: Difficulty,
        settings: &EngineConfig,
        seed: Option<u64>,
    ) -> Self {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let turn = Self::first_turn(mode, &mut rng);
        info!("new {} game ({}, {}), {} moves first", config, mode, difficulty, turn);

        Game {
            board: Board::new(config),
            mode,
            difficulty,
            turn,
            result: GameResult::Ongoing,
            history: Vec::new(),
            engine: AIEngine::from_difficulty(difficulty, settings, seed),
            rng,
        }
    }

    /// 双人模式 X 先走，其余模式随机先手
    fn first_turn(mode: GameMode, rng: &mut StdRng) -> Piece {
        match mode {
            GameMode::HumanVsHuman => Piece::Player,
            _ => {
                if rng.gen_bool(0.5) {
                    Piece::Player
                } else {
                    Piece::Ai
                }
            }
        }
    }

    /// 指定先手（覆盖随机先手，只能在开局时调用）
    pub fn set_first_turn(&mut self, piece: Piece) -> EngineResult<()> {
        if !self.history.is_empty() {
            return Err(EngineError::OutOfTurn(format!(
                "{} (first move already played)",
                self.turn
            )));
        }
        self.turn = piece;
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// 当前该走的一方
    pub fn turn(&self) -> Piece {
        self.turn
    }

    pub fn outcome(&self) -> GameResult {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result.is_over()
    }

    /// 已走的棋（按顺序）
    pub fn history(&self) -> &[(Move, Piece)] {
        &self.history
    }

    /// 当前回合是否由人类落子
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::HumanVsHuman => true,
            GameMode::HumanVsAi => self.turn == Piece::Player,
            GameMode::AiVsAi => false,
        }
    }

    /// 对局未结束且轮到 AI
    pub fn awaiting_ai(&self) -> bool {
        !self.is_over() && !self.is_human_turn()
    }

    fn ensure_ongoing(&self) -> EngineResult<()> {
        if self.is_over() {
            return Err(EngineError::GameOver(self.result.to_string()));
        }
        Ok(())
    }

    /// 人类落子
    pub fn play_human(&mut self, row: usize, col: usize) -> EngineResult<GameResult> {
        self.ensure_ongoing()?;
        if !self.is_human_turn() {
            return Err(EngineError::OutOfTurn(format!("{} (AI)", self.turn)));
        }
        self.board.apply_move(row, col, self.turn)?;
        Ok(self.after_move(Move::new(row, col)))
    }

    /// AI 落子，返回所走的棋
    pub fn play_ai(&mut self) -> EngineResult<Move> {
        self.ensure_ongoing()?;
        if self.is_human_turn() {
            return Err(EngineError::OutOfTurn(format!("{} (human)", self.turn)));
        }

        let piece = self.turn;
        // choose_move 只返回合法走法
        let mv = self.engine.choose_move(&self.board, piece)?.mv;
        self.board.apply_move(mv.row, mv.col, piece)?;
        self.after_move(mv);
        Ok(mv)
    }

    /// 为当前一方给出提示
    pub fn hint(&mut self) -> EngineResult<(Move, MoveReason)> {
        self.ensure_ongoing()?;
        let mv = self.engine.choose_move(&self.board, self.turn)?.mv;
        Ok((mv, explain_move(&self.board, mv, self.turn)))
    }

    /// 落子后判定胜负并交换回合
    fn after_move(&mut self, mv: Move) -> GameResult {
        self.history.push((mv, self.turn));

        if has_win(&self.board, self.turn) {
            self.result = GameResult::win_for(self.turn);
        } else if is_full(&self.board) {
            self.result = GameResult::Draw;
        } else {
            self.turn = self.turn.opposite();
        }

        if self.result.is_over() {
            info!("game over after {} moves: {}", self.history.len(), self.result);
        }
        self.result
    }

    /// 重新开始（同样的模式、难度和棋盘尺寸）
    pub fn restart(&mut self) {
        self.board = Board::new(*self.board.config());
        self.result = GameResult::Ongoing;
        self.history.clear();
        self.turn = Self::first_turn(self.mode, &mut self.rng);
    }

    /// 自动走完 AI 回合，直到对局结束或轮到人类
    pub fn run_ai_turns(&mut self) -> EngineResult<Vec<Move>> {
        let mut played = Vec::new();
        while self.awaiting_ai() {
            played.push(self.play_ai()?);
        }
        Ok(played)
    }
}
