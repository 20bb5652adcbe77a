//! Terminal front-end for local play.
//!
//! Reads square names from stdin, feeds them to the selection controller,
//! and renders the board after each event; exactly the role the embedding UI
//! plays around the engine. Pass `bot` as the first argument to let the
//! random engine answer for Black.

use std::io::{self, BufRead, Write};

use breakroom_chess::engines::engine_random::RandomEngine;
use breakroom_chess::engines::engine_trait::Engine;
use breakroom_chess::game_state::chess_types::Color;
use breakroom_chess::interaction::selection::{SelectionController, SelectionOutcome};
use breakroom_chess::utils::algebraic::{algebraic_to_location, location_to_algebraic};
use breakroom_chess::utils::fen::generate_fen;
use breakroom_chess::utils::game_log::write_game_log;
use breakroom_chess::utils::render_game_state::render_board;

fn main() {
    let bot_plays_black = std::env::args().nth(1).as_deref() == Some("bot");

    let mut controller = SelectionController::new();
    let mut bot = RandomEngine::new();

    println!("Breakroom Chess: enter a square (e.g. e2), 'reset', 'log', 'fen', or 'quit'.");
    print_board(&controller);

    let stdin = io::stdin();
    let mut stdin_lock = stdin.lock();
    let mut input = String::new();

    loop {
        prompt(&controller);

        input.clear();
        match stdin_lock.read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("stdin error: {err}");
                break;
            }
        }

        let token = input.trim();
        match token {
            "" => continue,
            "quit" | "exit" => break,
            "reset" => {
                controller.reset();
                print_board(&controller);
                continue;
            }
            "log" => {
                match write_game_log(controller.game()) {
                    Ok(log) => println!("{log}"),
                    Err(err) => eprintln!("could not write log: {err}"),
                }
                continue;
            }
            "fen" => {
                let game = controller.game();
                println!("{}", generate_fen(&game.board, game.turn));
                continue;
            }
            _ => {}
        }

        let loc = match algebraic_to_location(token) {
            Ok(loc) => loc,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        report(controller.select_square(&loc));
        print_board(&controller);

        if bot_plays_black && controller.game().turn == Color::Black {
            if let Some(proposal) = bot.choose_move(controller.game()) {
                controller.select_square(&proposal.from);
                report(controller.select_square(&proposal.to));
                print_board(&controller);
            }
        }

        if let Some(winner) = controller.winner() {
            println!("{winner:?} wins by king capture. Enter 'reset' to play again.");
        }
    }
}

fn prompt(controller: &SelectionController) {
    let turn = controller.game().turn;
    print!("{turn:?}> ");
    io::stdout().flush().ok();
}

fn print_board(controller: &SelectionController) {
    println!(
        "{}",
        render_board(&controller.game().board, controller.highlighted_targets())
    );
}

fn report(outcome: SelectionOutcome) {
    match outcome {
        SelectionOutcome::Selected { from, targets } => {
            let names: Vec<String> = targets
                .iter()
                .filter_map(|loc| location_to_algebraic(loc).ok())
                .collect();
            if let Ok(from) = location_to_algebraic(&from) {
                println!("selected {from}: {}", names.join(" "));
            }
        }
        SelectionOutcome::Deselected => println!("selection cleared"),
        SelectionOutcome::Moved(record) => {
            let from = location_to_algebraic(&record.from).unwrap_or_default();
            let to = location_to_algebraic(&record.to).unwrap_or_default();
            match record.captured {
                Some(piece) => println!("{from}{to} takes {}", piece.symbol()),
                None => println!("{from}{to}"),
            }
        }
        SelectionOutcome::Ignored(reason) => println!("no move: {reason:?}"),
    }
}
