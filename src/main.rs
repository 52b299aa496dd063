//! N-in-a-row AI CLI
//!
//! 命令行界面，用于测试 AI
//!
//! 支持两种模式：
//! 1. 单次命令模式：每次执行一个命令
//! 2. Server 模式：长驻进程，通过 stdin/stdout 通信

use clap::{Parser, Subcommand};
use nrow_ai::ai::eval::evaluate;
use nrow_ai::{
    check_outcome, explain_move, get_node_count, legal_moves, reset_node_count, AIEngine, Board,
    Difficulty, EngineConfig, Game, GameConfig, GameMode, Move, Piece,
};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "nrow-ai")]
#[command(about = "N-in-a-row (3x3 / 9x9) AI Engine", long_about = None)]
struct Cli {
    /// 引擎配置文件（TOML）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 获取合法走法
    Moves {
        /// 棋盘记谱
        #[arg(long)]
        board: String,
    },

    /// 选择最佳走法
    Best {
        /// 棋盘记谱
        #[arg(long)]
        board: String,

        /// 走棋方 (x / o)，默认按棋子数推断
        #[arg(long)]
        piece: Option<Piece>,

        /// 难度 (easy, medium, hard)
        #[arg(long, default_value = "hard")]
        difficulty: Difficulty,

        /// 随机种子
        #[arg(long)]
        seed: Option<u64>,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 判定胜负
    Outcome {
        /// 棋盘记谱
        #[arg(long)]
        board: String,
    },

    /// 评估局面分数
    Score {
        /// 棋盘记谱
        #[arg(long)]
        board: String,

        /// 评估视角 (x / o)，默认按棋子数推断
        #[arg(long)]
        piece: Option<Piece>,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// AI 自对弈
    Play {
        /// 棋盘边长 (3 或 9)
        #[arg(long, default_value = "3")]
        size: usize,

        /// 难度 (easy, medium, hard)
        #[arg(long, default_value = "hard")]
        difficulty: Difficulty,

        /// 随机种子
        #[arg(long)]
        seed: Option<u64>,
    },

    /// 启动 server 模式（stdin/stdout 通信）
    Server,
}

#[derive(Serialize, Deserialize)]
struct BestResult {
    #[serde(rename = "move")]
    mv: String,
    row: usize,
    col: usize,
    score: i64,
    reason: String,
}

// Server 模式的请求和响应结构
#[derive(Serialize, Deserialize)]
struct ServerRequest {
    cmd: String,
    #[serde(default)]
    board: String,
    #[serde(default)]
    piece: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(rename = "move", default)]
    mv: Option<String>,
}

#[derive(Serialize, Deserialize, Default)]
struct ServerResponse {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    best: Option<BestResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    legal_moves: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nodes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nps: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    // outcome 命令的字段
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<String>,
    // eval 命令的字段
    #[serde(skip_serializing_if = "Option::is_none")]
    eval: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    piece: Option<String>,
    // explain 命令的字段
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl ServerResponse {
    fn success_best(best: BestResult, nodes: u64, nps: f64, elapsed_ms: f64) -> Self {
        Self {
            ok: true,
            best: Some(best),
            nodes: Some(nodes),
            nps: Some(nps),
            elapsed_ms: Some(elapsed_ms),
            ..Default::default()
        }
    }

    fn success_legal_moves(legal_moves: Vec<String>) -> Self {
        Self {
            ok: true,
            legal_moves: Some(legal_moves),
            ..Default::default()
        }
    }

    fn success_outcome(outcome: String) -> Self {
        Self {
            ok: true,
            outcome: Some(outcome),
            ..Default::default()
        }
    }

    fn success_eval(eval_score: i64, piece: Piece) -> Self {
        Self {
            ok: true,
            eval: Some(eval_score),
            piece: Some(piece.to_string()),
            ..Default::default()
        }
    }

    fn success_explain(reason: String) -> Self {
        Self {
            ok: true,
            reason: Some(reason),
            ..Default::default()
        }
    }

    fn error(msg: &str) -> Self {
        Self {
            ok: false,
            error: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

fn calc_nps(nodes: u64, elapsed_secs: f64) -> f64 {
    if elapsed_secs > 0.0 {
        nodes as f64 / elapsed_secs
    } else {
        0.0
    }
}

/// 打印错误并退出
fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn load_board(notation: &str) -> Board {
    Board::from_notation(notation).unwrap_or_else(|e| fail(e))
}

/// 搜索并统计节点数和耗时
fn run_best(
    board: &Board,
    piece: Piece,
    difficulty: Difficulty,
    settings: &EngineConfig,
    seed: Option<u64>,
) -> Result<(BestResult, u64, f64), String> {
    let mut engine = AIEngine::from_difficulty(difficulty, settings, seed);

    reset_node_count();
    let start = Instant::now();
    let sm = engine.choose_move(board, piece).map_err(|e| e.to_string())?;
    let elapsed = start.elapsed().as_secs_f64();

    let best = BestResult {
        mv: sm.mv.to_notation(),
        row: sm.mv.row,
        col: sm.mv.col,
        score: sm.score,
        reason: explain_move(board, sm.mv, piece).to_string(),
    };
    Ok((best, get_node_count(), elapsed))
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => EngineConfig::from_file(path).unwrap_or_else(|e| fail(e)),
        None => EngineConfig::default(),
    };

    match cli.command {
        Commands::Moves { board } => {
            let board = load_board(&board);
            let moves = legal_moves(&board);
            println!("Legal moves ({}):", moves.len());
            for mv in &moves {
                println!("  {}", mv);
            }
        }

        Commands::Best {
            board,
            piece,
            difficulty,
            seed,
            json,
        } => {
            let board = load_board(&board);
            let piece = piece.unwrap_or_else(|| board.side_to_move());

            match run_best(&board, piece, difficulty, &settings, seed) {
                Ok((best, nodes, elapsed)) => {
                    let nps = calc_nps(nodes, elapsed);
                    if json {
                        match serde_json::to_string_pretty(&best) {
                            Ok(s) => println!("{}", s),
                            Err(e) => fail(e),
                        }
                        eprintln!(
                            "Stats: nodes={}, time={:.3}s, nps={:.0}",
                            nodes, elapsed, nps
                        );
                    } else {
                        println!("Best move (difficulty={}, piece={}):", difficulty, piece);
                        println!("  {} (score: {}, {})", best.mv, best.score, best.reason);
                        println!(
                            "\nStats: nodes={}, time={:.3}s, nps={:.0}",
                            nodes, elapsed, nps
                        );
                    }
                }
                Err(e) => fail(e),
            }
        }

        Commands::Outcome { board } => {
            let board = load_board(&board);
            println!("{}", check_outcome(&board));
        }

        Commands::Score { board, piece, json } => {
            let board = load_board(&board);
            let piece = piece.unwrap_or_else(|| board.side_to_move());
            let score = evaluate(&board, piece);

            if json {
                println!(
                    "{{\"board\": {:?}, \"piece\": {:?}, \"score\": {}}}",
                    board.to_notation(),
                    piece.to_string(),
                    score
                );
            } else {
                println!("局面评估 ({} 视角): {}", piece, score);
            }
        }

        Commands::Play {
            size,
            difficulty,
            seed,
        } => {
            let config = GameConfig::for_size(size).unwrap_or_else(|e| fail(e));
            let mut game = Game::with_settings(config, GameMode::AiVsAi, difficulty, &settings, seed);

            println!("{} goes first\n", game.turn());
            while !game.is_over() {
                let piece = game.turn();
                match game.play_ai() {
                    Ok(mv) => println!("{} plays {}\n{}", piece, mv, game.board()),
                    Err(e) => fail(e),
                }
            }
            println!("Result: {} ({} moves)", game.outcome(), game.history().len());
        }

        Commands::Server => {
            run_server(&settings);
        }
    }
}

/// 输出一行 JSON 响应
fn emit(response: &ServerResponse) {
    match serde_json::to_string(response) {
        Ok(s) => println!("{}", s),
        Err(e) => println!("{{\"ok\":false,\"error\":{:?}}}", e.to_string()),
    }
    let _ = io::stdout().flush();
}

/// Server 模式主循环
/// 从 stdin 读取 JSON 请求，返回 JSON 响应到 stdout
fn run_server(settings: &EngineConfig) {
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        // 空行跳过
        if line.trim().is_empty() {
            continue;
        }

        // 解析请求
        let request: ServerRequest = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                emit(&ServerResponse::error(&format!("Invalid JSON: {}", e)));
                continue;
            }
        };

        // 处理命令
        let response = match request.cmd.as_str() {
            "best" => handle_best_request(&request, settings),
            "moves" => handle_moves_request(&request),
            "outcome" => handle_outcome_request(&request),
            "eval" => handle_eval_request(&request),
            "explain" => handle_explain_request(&request),
            "quit" => break,
            _ => ServerResponse::error(&format!("Unknown command: {}", request.cmd)),
        };

        emit(&response);
    }
}

/// 解析请求中的棋盘和走棋方
fn request_board(request: &ServerRequest) -> Result<(Board, Piece), ServerResponse> {
    let board = Board::from_notation(&request.board)
        .map_err(|e| ServerResponse::error(&format!("Invalid board: {}", e)))?;
    let piece = match request.piece.as_deref() {
        Some(s) => s
            .parse::<Piece>()
            .map_err(|e| ServerResponse::error(&format!("Invalid piece: {}", e)))?,
        None => board.side_to_move(),
    };
    Ok((board, piece))
}

/// 处理 best 命令
fn handle_best_request(request: &ServerRequest, settings: &EngineConfig) -> ServerResponse {
    let (board, piece) = match request_board(request) {
        Ok(v) => v,
        Err(response) => return response,
    };
    let difficulty = match request.difficulty.as_deref().unwrap_or("hard").parse::<Difficulty>() {
        Ok(d) => d,
        Err(e) => return ServerResponse::error(&format!("Invalid difficulty: {}", e)),
    };

    match run_best(&board, piece, difficulty, settings, request.seed) {
        Ok((best, nodes, elapsed)) => {
            ServerResponse::success_best(best, nodes, calc_nps(nodes, elapsed), elapsed * 1000.0)
        }
        Err(e) => ServerResponse::error(&format!("AI error: {}", e)),
    }
}

/// 处理 moves 命令
fn handle_moves_request(request: &ServerRequest) -> ServerResponse {
    match Board::from_notation(&request.board) {
        Ok(board) => ServerResponse::success_legal_moves(
            legal_moves(&board).iter().map(Move::to_notation).collect(),
        ),
        Err(e) => ServerResponse::error(&format!("Invalid board: {}", e)),
    }
}

/// 处理 outcome 命令
fn handle_outcome_request(request: &ServerRequest) -> ServerResponse {
    match Board::from_notation(&request.board) {
        Ok(board) => ServerResponse::success_outcome(check_outcome(&board).to_string()),
        Err(e) => ServerResponse::error(&format!("Invalid board: {}", e)),
    }
}

/// 处理 eval 命令（静态评估）
fn handle_eval_request(request: &ServerRequest) -> ServerResponse {
    match request_board(request) {
        Ok((board, piece)) => ServerResponse::success_eval(evaluate(&board, piece), piece),
        Err(response) => response,
    }
}

/// 处理 explain 命令
fn handle_explain_request(request: &ServerRequest) -> ServerResponse {
    let (board, piece) = match request_board(request) {
        Ok(v) => v,
        Err(response) => return response,
    };
    let mv = match request.mv.as_deref().and_then(Move::from_notation) {
        Some(mv) => mv,
        None => return ServerResponse::error(&format!("Invalid move: {:?}", request.mv)),
    };
    ServerResponse::success_explain(explain_move(&board, mv, piece).to_string())
}
