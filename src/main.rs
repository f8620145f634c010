use std::io::{self, Write};

use bitboard_chess::render::TerminalDisplay;
use bitboard_chess::{Board, BoardDisplay, Square, SquareContent};

/// Clears the screen and moves cursor to top-left.
fn clear_screen() {
    print!("\x1B[2J\x1B[H");
}

fn main() {
    env_logger::init();
    log::info!("Bitboard chess terminal");

    let mut board = Board::new_standard();
    let mut display = TerminalDisplay::new();
    let mut marks: Vec<Square> = Vec::new();

    clear_screen();
    draw_interface(&mut display, &board, &marks);

    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Failed to flush stdout: {}", e);
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Failed to read input: {}", e);
                break;
            }
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "m" => {
                if parts.len() < 3 {
                    println!("Usage: m <from> <to>");
                    continue;
                }
                match (parts[1].parse::<Square>(), parts[2].parse::<Square>()) {
                    (Ok(from), Ok(to)) => {
                        let captured = board.move_piece(from, to);
                        marks.clear();
                        redraw(&mut display, &board, &marks);
                        if let Some(kind) = captured {
                            println!("Captured {}", kind.glyph());
                        }
                    }
                    (Err(e), _) | (_, Err(e)) => println!("Invalid square: {}", e),
                }
            }
            "s" => {
                let script = input.trim_start().trim_start_matches('s');
                match board.play_script(script) {
                    Ok(captured) => {
                        marks.clear();
                        redraw(&mut display, &board, &marks);
                        println!("Captured {} piece(s)", captured.len());
                    }
                    Err(e) => println!("Invalid script: {}", e),
                }
            }
            "k" => match parts[1..]
                .iter()
                .map(|s| s.parse::<Square>())
                .collect::<Result<Vec<_>, _>>()
            {
                Ok(squares) => {
                    marks = squares;
                    redraw(&mut display, &board, &marks);
                }
                Err(e) => println!("Invalid square: {}", e),
            },
            "g" => {
                let coords = parts
                    .get(1..3)
                    .map(|xy| (xy[0].parse::<i32>(), xy[1].parse::<i32>()));
                match coords {
                    Some((Ok(x), Ok(y))) => match board.get_piece(x, y) {
                        SquareContent::Piece(kind) => println!("{kind:?}"),
                        SquareContent::Empty => println!("empty"),
                        SquareContent::OutOfBounds => println!("out of bounds"),
                    },
                    _ => println!("Usage: g <x> <y>"),
                }
            }
            "r" => {
                board.reset();
                marks.clear();
                redraw(&mut display, &board, &marks);
            }
            "c" => {
                board.clear();
                marks.clear();
                redraw(&mut display, &board, &marks);
            }
            "p" => redraw(&mut display, &board, &marks),
            "q" => break,
            _ => println!("Unknown command"),
        }
    }
}

fn redraw(display: &mut TerminalDisplay, board: &Board, marks: &[Square]) {
    clear_screen();
    draw_interface(display, board, marks);
}

/// Draws the complete interface: help text and board.
fn draw_interface(display: &mut TerminalDisplay, board: &Board, marks: &[Square]) {
    println!("Bitboard Chess");
    println!();
    println!(
        "Commands: m <from> <to> | s <moves> | k <squares> | g <x> <y> | r (reset) | c (clear) | p (refresh) | q (quit)"
    );
    println!();
    if let Err(e) = display.show(board, marks) {
        eprintln!("Failed to draw board: {}", e);
    }
    println!("Occupancy: {:#018X} | Pieces: {:02}", board.occupancy(), board.occupancy().count());
}
