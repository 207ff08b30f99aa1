//! Text commands typed at the prompt.

use battleship_core::Player;
use thiserror::Error;

/// A grid position written as column letter and 1-based row, e.g. `C7`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

/// Commands understood by the terminal front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Leave the menu
    Start,

    /// Clear both boards and place again
    Reset,

    /// Flip placement orientation
    Rotate,

    /// Place the current ship with its origin at a cell
    Place(Coord),

    /// Fire at a cell; without a player the opponent of the shooter is targeted
    Fire { target: Option<Player>, cell: Coord },

    /// Lay out the rest of the current fleet at random
    Auto,

    /// Show the command list
    Help,

    /// Leave the program
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing {0}")]
    MissingArgument(&'static str),

    #[error("Invalid cell: {0} (expected a letter and a row number, like B7)")]
    InvalidCell(String),

    #[error("Invalid player: {0} (expected 1 or 2)")]
    InvalidPlayer(String),

    #[error("Unexpected input: {0}")]
    TrailingInput(String),
}

pub const HELP: &str = "\
Commands:
  start               begin placing ships
  place <cell>        place the current ship with its bow at <cell>, e.g. place B3
  rotate              switch between horizontal and vertical placement
  auto                place the rest of your fleet at random
  fire [1|2] <cell>   shoot at a cell on the opponent's board, e.g. fire E5
  reset               clear both boards and start placing again
  help                show this list
  quit                leave the game";

/// Parse a cell like `a1` or `J10`.
///
/// Any letter and any positive row number are accepted; whether the cell is
/// on the grid is left to the engine.
pub fn parse_cell(text: &str) -> Result<Coord, ParseError> {
    let invalid = || ParseError::InvalidCell(text.to_string());

    let mut chars = text.chars();
    let letter = chars.next().filter(|c| c.is_ascii_alphabetic()).ok_or_else(invalid)?;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let row: usize = digits.parse().map_err(|_| invalid())?;
    if row == 0 {
        return Err(invalid());
    }

    Ok(Coord {
        row: row - 1,
        col: (letter.to_ascii_uppercase() as u8 - b'A') as usize,
    })
}

fn parse_player(text: &str) -> Result<Player, ParseError> {
    text.parse::<u8>()
        .ok()
        .and_then(Player::from_number)
        .ok_or_else(|| ParseError::InvalidPlayer(text.to_string()))
}

/// Parse one line typed at the prompt
pub fn parse_line(line: &str) -> Result<Input, ParseError> {
    let mut words = line.split_whitespace();
    let command = words.next().ok_or(ParseError::Empty)?.to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    let input = match (command.as_str(), args.as_slice()) {
        ("start", []) => Input::Start,
        ("reset", []) => Input::Reset,
        ("rotate" | "r", []) => Input::Rotate,
        ("auto", []) => Input::Auto,
        ("help" | "?", []) => Input::Help,
        ("quit" | "exit" | "q", []) => Input::Quit,

        ("place" | "p", []) => return Err(ParseError::MissingArgument("cell")),
        ("place" | "p", [cell]) => Input::Place(parse_cell(cell)?),

        ("fire" | "f", []) => return Err(ParseError::MissingArgument("cell")),
        ("fire" | "f", [cell]) => Input::Fire {
            target: None,
            cell: parse_cell(cell)?,
        },
        ("fire" | "f", [player, cell]) => Input::Fire {
            target: Some(parse_player(player)?),
            cell: parse_cell(cell)?,
        },

        ("start" | "reset" | "rotate" | "r" | "auto" | "help" | "?" | "quit" | "exit" | "q", extra)
        | ("place" | "p", [_, extra @ ..])
        | ("fire" | "f", [_, _, extra @ ..]) => {
            return Err(ParseError::TrailingInput(extra.join(" ")))
        }

        (other, _) => return Err(ParseError::UnknownCommand(other.to_string())),
    };

    Ok(input)
}
