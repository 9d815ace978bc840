//! Count move paths from a position.
//!
//! ```text
//! perft <depth> [fen...] [--divide]
//! ```
//!
//! Without a FEN the standard starting position is used. `--divide` prints
//! the count below each root move before the total.

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use chess_rules::board::START_FEN;
use chess_rules::Board;

const USAGE: &str = "usage: perft <depth> [fen...] [--divide]";

struct Options {
    depth: usize,
    fen: String,
    divide: bool,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut divide = false;
    let mut rest = Vec::new();
    for arg in args {
        if arg == "--divide" {
            divide = true;
        } else {
            rest.push(arg.as_str());
        }
    }
    let (depth, fen) = rest.split_first().ok_or_else(|| USAGE.to_string())?;
    let depth = depth
        .parse()
        .map_err(|_| format!("invalid depth '{depth}'\n{USAGE}"))?;
    let fen = if fen.is_empty() {
        START_FEN.to_string()
    } else {
        fen.join(" ")
    };
    Ok(Options { depth, fen, divide })
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
    };
    let mut board = match Board::try_from_fen(&options.fen) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    let start = Instant::now();
    let nodes = if options.divide {
        let breakdown = board.divide(options.depth);
        for (mv, count) in &breakdown {
            println!("{mv}: {count}");
        }
        println!();
        breakdown.iter().map(|&(_, count)| count).sum()
    } else {
        board.perft(options.depth)
    };
    let elapsed = start.elapsed();

    println!("Nodes searched: {nodes}");
    let nps = (nodes as f64 / elapsed.as_secs_f64().max(1e-9)) as u64;
    println!("Time: {} ms ({nps} nps)", elapsed.as_millis());
    ExitCode::SUCCESS
}
