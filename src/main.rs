//! Terminal front end for the omok rule engine
//!
//! Presentation collaborator only: maps text input to grid coordinates,
//! prints the board and reports engine outcomes. All rules live in the
//! library.

use std::io::{self, BufRead, Write};

use clap::Parser;

use omok::{Engine, GameConfig, GamePhase, MoveOutcome, Point, Stone, UndoOutcome};

#[derive(Parser)]
#[command(name = "omok", about = "Five-in-a-row with Renju-style rules for Black")]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = 15)]
    width: u16,

    /// Board height in cells
    #[arg(long, default_value_t = 15)]
    height: u16,

    /// Disable Black's forbidden-move rules (freestyle gomoku)
    #[arg(long)]
    freestyle: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if args.debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "debug".into()),
            )
            .init();
    }

    let config = GameConfig {
        width: args.width,
        height: args.height,
        forbidden_moves: !args.freestyle,
    };
    let mut engine = match Engine::new(config) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    };

    println!("omok {}x{}: enter `x y`, `undo` or `quit`", args.width, args.height);
    if engine.rules_enabled() {
        println!("forbidden-move rules for Black are in effect (`!` marks)");
    }

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print_board(&engine);
        match engine.phase() {
            GamePhase::InProgress { to_move } => print!("{}> ", to_move),
            GamePhase::Won { winner } => {
                println!("{} wins!", winner);
                break;
            }
            GamePhase::Draw => {
                println!("draw: the board is full");
                break;
            }
        }
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim();

        match line {
            "" => continue,
            "quit" | "q" => break,
            "undo" | "u" => match engine.undo() {
                UndoOutcome::Undone => println!("took back the last move"),
                UndoOutcome::NothingToUndo => println!("nothing to undo"),
                UndoOutcome::RejectedGameOver => println!("the game is over"),
            },
            _ => match parse_point(line) {
                Some(pos) => report(engine.commit_move(pos)),
                None => println!("could not parse `{}`; expected `x y`", line),
            },
        }
    }
    Ok(())
}

fn parse_point(line: &str) -> Option<Point> {
    let mut parts = line.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Point::new(x, y))
}

fn report(outcome: MoveOutcome) {
    match outcome {
        MoveOutcome::Placed => {}
        MoveOutcome::RejectedOccupied => println!("that cell is occupied"),
        MoveOutcome::RejectedForbidden => println!("forbidden move, play elsewhere"),
        MoveOutcome::RejectedOutOfBounds => println!("off the board"),
        MoveOutcome::RejectedGameOver => println!("the game is over"),
        MoveOutcome::WinsFor { color, .. } => println!("{} makes five!", color),
        MoveOutcome::Draw => println!("the board is full"),
    }
}

/// Board with the advisory forbidden marks and the winning line overlaid
fn print_board(engine: &Engine) {
    let board = engine.board();
    let winning: &[Point] = engine.winning_line().unwrap_or(&[]);

    for y in (0..board.height()).rev() {
        print!("{:>3} ", y);
        for x in 0..board.width() {
            let p = Point::new(x, y);
            let glyph = if winning.contains(&p) {
                '*'
            } else {
                match board.get(p) {
                    Ok(Stone::Black) => 'X',
                    Ok(Stone::White) => 'O',
                    _ if engine.forbidden_cells().contains(&p) => '!',
                    _ => '.',
                }
            };
            print!(" {}", glyph);
        }
        println!();
    }
    print!("    ");
    for x in 0..board.width() {
        print!(" {}", x % 10);
    }
    println!();
}
