use std::process;

use chess_core::{Board, ChessResult, Square};
use clap::Parser;
use log::error;

/// Lists the squares pieces can reach from the standard starting position.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Row of the piece to query (0 is White's back rank)
    #[arg(long, requires = "col")]
    row: Option<i8>,

    /// Column of the piece to query
    #[arg(long, requires = "row")]
    col: Option<i8>,

    /// Print JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> ChessResult<()> {
    let board = Board::starting();

    let squares = match (args.row, args.col) {
        (Some(row), Some(col)) => vec![Square::at(row, col)?],
        _ => board.pieces().map(|(square, _)| square).collect(),
    };

    if !args.json {
        print!("{}", board);
    }

    for square in squares {
        let Some(piece) = board.get_piece(square) else {
            if args.json {
                println!("{}", empty_square_json(square));
            } else {
                println!("{}: empty", square);
            }
            continue;
        };
        let moves = piece.available_moves(&board)?;

        if args.json {
            let targets: Vec<[i8; 2]> = moves.iter().map(|m| [m.row(), m.col()]).collect();
            let mut entry = piece.to_json();
            entry["square"] = serde_json::json!([square.row(), square.col()]);
            entry["moves"] = serde_json::json!(targets);
            println!("{}", entry);
        } else {
            let targets: Vec<String> = moves.iter().map(Square::to_string).collect();
            println!("{} {}: {}", square, piece.symbol(), targets.join(" "));
        }
    }

    Ok(())
}

fn empty_square_json(square: Square) -> serde_json::Value {
    serde_json::json!({ "square": [square.row(), square.col()], "piece": null })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_square_is_reported_as_json() {
        let square = Square::at(4, 4).unwrap();

        let line = empty_square_json(square).to_string();

        assert_eq!(line, r#"{"piece":null,"square":[4,4]}"#);
        assert!(serde_json::from_str::<serde_json::Value>(&line).is_ok());
    }
}
