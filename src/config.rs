//! 引擎配置
//!
//! 各难度的搜索深度和时间限制，可以从 TOML 文件读取：
//!
//! ```toml
//! [medium]
//! depth = 2
//! large_board_depth = 2
//! time_limit_secs = 3.0
//!
//! [hard]
//! depth = 9
//! large_board_depth = 3
//! time_limit_secs = 5.0
//! ```
//!
//! 缺少的段落使用默认值。

use crate::ai::AIConfig;
use crate::error::{EngineError, EngineResult};
use crate::types::Difficulty;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 单个搜索难度的参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierSettings {
    /// 小棋盘搜索深度
    pub depth: u32,
    /// 大棋盘搜索深度
    pub large_board_depth: u32,
    /// 时间限制（秒）
    pub time_limit_secs: f64,
}

/// 引擎配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub medium: TierSettings,
    pub hard: TierSettings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            medium: TierSettings {
                depth: 2,
                large_board_depth: 2,
                time_limit_secs: 3.0,
            },
            // 3x3 深度 9 可以搜完整棵树
            hard: TierSettings {
                depth: 9,
                large_board_depth: 3,
                time_limit_secs: 5.0,
            },
        }
    }
}

impl EngineConfig {
    /// 从 TOML 文件读取
    pub fn from_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| EngineError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// 从 TOML 字符串解析
    pub fn from_toml_str(content: &str) -> EngineResult<Self> {
        let config: EngineConfig =
            toml::from_str(content).map_err(|e| EngineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> EngineResult<()> {
        for (name, tier) in [("medium", &self.medium), ("hard", &self.hard)] {
            if !tier.time_limit_secs.is_finite() || tier.time_limit_secs <= 0.0 {
                return Err(EngineError::Config(format!(
                    "{}.time_limit_secs must be positive, got {}",
                    name, tier.time_limit_secs
                )));
            }
        }
        Ok(())
    }

    /// 某一难度的 AI 配置
    pub fn ai_config(&self, difficulty: Difficulty, seed: Option<u64>) -> AIConfig {
        let tier = match difficulty {
            Difficulty::Easy => {
                return AIConfig {
                    depth: 0,
                    large_board_depth: 0,
                    time_limit: None,
                    seed,
                }
            }
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        };
        AIConfig {
            depth: tier.depth,
            large_board_depth: tier.large_board_depth,
            time_limit: Some(tier.time_limit_secs),
            seed,
        }
    }
}
