//! 评估局面工具
//!
//! 用法:
//!   cargo run --release --example eval_position -- --board "X1O/1X1/3" --verbose

use clap::Parser;
use nrow_ai::ai::eval::{evaluate, position_score, window_total};
use nrow_ai::ai::ordering::order_moves;
use nrow_ai::{explain_move, Board, BoardProfile, Piece};

#[derive(Parser)]
#[command(about = "评估指定局面的静态分数")]
struct Args {
    /// 棋盘记谱
    #[arg(short, long)]
    board: String,

    /// 评估视角 (x / o)，默认按棋子数推断
    #[arg(short, long)]
    piece: Option<Piece>,

    /// 是否显示详细信息
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let board = match Board::from_notation(&args.board) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("记谱解析错误: {}", e);
            std::process::exit(1);
        }
    };

    let piece = args.piece.unwrap_or_else(|| board.side_to_move());
    let profile = board.config().profile();

    if args.verbose {
        println!("棋盘: {}", board.to_notation());
        println!("配置: {} ({:?})", board.config(), profile);
        println!("视角: {}", piece);
        println!();
        println!("{}", board);
        println!("棋盘信息:");
        println!("  {} 方棋子数: {}", piece, board.count_of(piece));
        println!(
            "  {} 方棋子数: {}",
            piece.opposite(),
            board.count_of(piece.opposite())
        );
        println!();
    }

    let score = evaluate(&board, piece);

    println!("═══════════════════════════════════");
    println!("静态局面评估 ({} 视角)", piece);
    println!("═══════════════════════════════════");
    println!("评估分数: {}", score);
    if profile == BoardProfile::Large {
        println!("  位置分: {}", position_score(&board, piece));
        println!("  连线分: {}", window_total(&board, piece));
    }
    println!("═══════════════════════════════════");

    if args.verbose {
        println!("\n候选走法（搜索顺序）:");
        for mv in order_moves(&board) {
            println!("  {} [{}]", mv, explain_move(&board, mv, piece));
        }
        println!();
        println!("分数解释:");
        println!("  > 0   : {} 方占优", piece);
        println!("  = 0   : 势均力敌");
        println!("  < 0   : {} 方占优", piece.opposite());
    }
}
