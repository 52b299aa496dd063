//! AI 对战统计
//!
//! 用法:
//!   cargo run --release --example self_play -- --size 3 --x hard --o easy --games 20

use clap::Parser;
use nrow_ai::{AIEngine, Difficulty, EngineConfig, Game, GameConfig, GameMode, GameResult, Piece};

#[derive(Parser)]
#[command(about = "两个难度对战若干局并统计结果")]
struct Args {
    /// 棋盘边长 (3 或 9)
    #[arg(long, default_value = "3")]
    size: usize,

    /// X 方难度
    #[arg(long, default_value = "hard")]
    x: Difficulty,

    /// O 方难度
    #[arg(long, default_value = "easy")]
    o: Difficulty,

    /// 对局数
    #[arg(long, default_value = "10")]
    games: u64,

    /// 随机种子（每局递增）
    #[arg(long, default_value = "0")]
    seed: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = match GameConfig::for_size(args.size) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let settings = EngineConfig::default();

    let (mut x_wins, mut o_wins, mut draws) = (0u64, 0u64, 0u64);
    for i in 0..args.games {
        let seed = args.seed + i;
        // 对局只负责回合和胜负，双方走法由各自的引擎给出；
        // 对局自带的引擎不会被调用，用最便宜的 Easy
        let mut game = Game::with_settings(
            config,
            GameMode::HumanVsHuman,
            Difficulty::Easy,
            &settings,
            Some(seed),
        );
        let mut x_engine = AIEngine::from_difficulty(args.x, &settings, Some(seed));
        let mut o_engine = AIEngine::from_difficulty(args.o, &settings, Some(seed));

        while !game.is_over() {
            let engine = match game.turn() {
                Piece::Player => &mut x_engine,
                Piece::Ai => &mut o_engine,
            };
            let played = engine
                .choose_move(game.board(), game.turn())
                .and_then(|sm| game.play_human(sm.mv.row, sm.mv.col));
            if let Err(e) = played {
                eprintln!("Error in game {}: {}", i + 1, e);
                std::process::exit(1);
            }
        }

        match game.outcome() {
            GameResult::PlayerWin => x_wins += 1,
            GameResult::AiWin => o_wins += 1,
            _ => draws += 1,
        }
        println!(
            "game {:>3}: {} in {} moves",
            i + 1,
            game.outcome(),
            game.history().len()
        );
    }

    println!("═══════════════════════════════════");
    println!("X ({}) wins: {}", args.x, x_wins);
    println!("O ({}) wins: {}", args.o, o_wins);
    println!("draws:        {}", draws);
    println!("═══════════════════════════════════");
}
