//! Perft verification runner.
//!
//! Usage:
//! `cargo run --release --bin perft -- --depth 5`
//! `cargo run --release --bin perft -- --fen "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -" --depth 4 --divide`

use std::process::ExitCode;
use std::time::Instant;

use chrono::Local;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use quince_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use quince_chess::move_generation::perft::{count_leaf_nodes, perft_divide};
use quince_chess::utils::fen_parser::parse_fen;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Count legal move-tree leaves from a FEN position")]
struct Args {
    /// Position to search from.
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    fen: String,

    /// Plies to expand.
    #[arg(long, default_value_t = 4)]
    depth: u8,

    /// Print the leaf count under each root move.
    #[arg(long)]
    divide: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let game = match parse_fen(&args.fen) {
        Ok(game) => game,
        Err(err) => {
            error!(fen = %args.fen, "{err}");
            return ExitCode::FAILURE;
        }
    };

    info!(fen = %args.fen, depth = args.depth, "starting perft");
    let started = Instant::now();

    let nodes = if args.divide {
        let divide = perft_divide(&game, args.depth);
        for (id, nodes) in &divide {
            println!("{id}: {nodes}");
        }
        divide.iter().map(|(_, nodes)| nodes).sum()
    } else {
        count_leaf_nodes(&game, args.depth)
    };

    let elapsed = started.elapsed();
    let nps = (nodes as f64 / elapsed.as_secs_f64().max(1e-9)) as u64;
    println!(
        "[{}] depth={} nodes={} elapsed_ms={} nps={}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        args.depth,
        nodes,
        elapsed.as_millis(),
        nps
    );

    ExitCode::SUCCESS
}
