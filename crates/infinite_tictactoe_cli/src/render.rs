//! Plain-text rendering of game events.

use crate::orchestrator::GameEvent;
use crate::players::PlayerType;
use infinite_tictactoe::{BOARD_CELLS, Board, Mark, Outcome, Position, Square, Variant};
use std::io::Write;
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Draws the board as a 3x3 grid.
///
/// Empty squares show their index. The mark at `fading` is lowercase: it is
/// the next one the eviction rule removes.
pub fn render_board(board: &Board, fading: Option<usize>) -> String {
    let mut out = String::new();
    for (pos, square) in board.squares().iter().enumerate() {
        let cell = match square {
            Square::Empty => pos.to_string(),
            Square::Occupied(mark) if fading == Some(pos) => mark.to_string().to_lowercase(),
            Square::Occupied(mark) => mark.to_string(),
        };
        out.push(' ');
        out.push_str(&cell);
        out.push(' ');
        match pos {
            p if p == BOARD_CELLS - 1 => out.push('\n'),
            p if p % 3 == 2 => out.push_str("\n---+---+---\n"),
            _ => out.push('|'),
        }
    }
    out
}

fn square_name(index: usize) -> String {
    Position::from_index(index)
        .map(|position| format!("{} ({})", position.label(), index))
        .unwrap_or_else(|| index.to_string())
}

/// One event as the text shown to the players.
pub fn describe(event: &GameEvent) -> String {
    match event {
        GameEvent::Notice(text) => text.clone(),
        GameEvent::BoardChanged { board, fading } => {
            let mut text = render_board(board, *fading);
            if let Some(index) = fading {
                text.push_str(&format!("The mark at {} fades next.\n", square_name(*index)));
            }
            text
        }
        GameEvent::Turn {
            player,
            mark,
            player_type: PlayerType::Human,
        } => format!("{} ({}), enter a square (0-8 or name, q to quit):", player, mark),
        GameEvent::Turn { player, mark, .. } => format!("{} ({}) is thinking...", player, mark),
        GameEvent::MoveMade { player, placement } => {
            let mut text = format!(
                "{} plays {} at {}.",
                player,
                placement.mark,
                square_name(placement.index)
            );
            if let Some(evicted) = placement.evicted {
                text.push_str(&format!(
                    " {}'s oldest mark at {} disappears.",
                    evicted.mark,
                    square_name(evicted.index)
                ));
            }
            text
        }
        GameEvent::MoveRejected { player, error } => format!("{}: {}. Try again.", player, error),
        GameEvent::Unrecognised { player, input } => {
            format!("{}: '{}' is not a square. Try again.", player, input)
        }
        GameEvent::GameOver { outcome, winner } => match (outcome, winner) {
            (Outcome::Win { mark, .. }, Some(name)) => format!("{} ({}) wins!", name, mark),
            (Outcome::Win { mark, .. }, None) => format!("{} wins!", mark),
            (Outcome::Draw, _) => "It's a draw.".to_string(),
            (Outcome::InProgress, _) => "Game stopped.".to_string(),
        },
        GameEvent::Quit { player } => format!("{} left the game.", player),
    }
}

/// Prints events until the sender side closes.
#[instrument(skip_all)]
pub async fn run<W: Write>(mut rx: mpsc::UnboundedReceiver<GameEvent>, mut out: W) -> std::io::Result<()> {
    while let Some(event) = rx.recv().await {
        debug!(?event, "Rendering event");
        writeln!(out, "{}", describe(&event))?;
        out.flush()?;
    }
    Ok(())
}

/// Banner printed before each game.
pub fn banner(round: u32, rounds: u32, variant: Variant, x: &str, o: &str) -> String {
    let header = if rounds > 1 {
        format!("Game {} of {}", round, rounds)
    } else {
        "New game".to_string()
    };
    let rule = match variant {
        Variant::Infinite => " Only the newest nine marks stay on the board.",
        Variant::Classic => "",
    };
    format!("{}: {} ({}) vs {} ({}).{}", header, x, Mark::X, o, Mark::O, rule)
}
