//! Plain-text drawing of both boards.

use battleship_core::{Cell, MatchController, MatchPhase, Orientation, Player, GRID_SIZE};
use std::fmt::Write;

/// Gap between the two grids
const GUTTER: &str = "     ";

fn symbol(cell: Cell, reveal_ships: bool) -> char {
    match cell {
        Cell::Ship if reveal_ships => '#',
        Cell::Empty | Cell::Ship => '.',
        Cell::Miss => 'o',
        Cell::Hit => 'X',
    }
}

/// One line describing what the match is waiting for
pub fn status_line(game: &MatchController) -> String {
    match game.current_phase() {
        MatchPhase::Menu => "Type `start` to begin, `help` for commands.".to_string(),
        MatchPhase::Placing {
            player,
            queue,
            orientation,
        } => {
            let direction = match orientation {
                Orientation::Horizontal => "horizontal",
                Orientation::Vertical => "vertical",
            };
            match queue.current() {
                Some(length) => format!(
                    "{}: place a ship of length {} ({})",
                    player, length, direction
                ),
                None => format!("{}: fleet complete", player),
            }
        }
        MatchPhase::Battling { active } => format!(
            "{} to fire at {}'s board",
            active,
            active.opponent()
        ),
        MatchPhase::GameOver { winner } => {
            format!("{} wins! Type `reset` to play again.", winner)
        }
    }
}

/// Draw both boards side by side, hiding ships the phase does not reveal
pub fn render(game: &MatchController) -> String {
    let width = 3 + GRID_SIZE * 2;
    let mut out = String::new();

    for player in Player::ALL {
        let _ = write!(out, "{:<width$}{}", format!("   {}", player), GUTTER);
    }
    out.push('\n');

    let letters: String = (0..GRID_SIZE)
        .map(|c| format!(" {}", (b'A' + c as u8) as char))
        .collect();
    for _ in Player::ALL {
        let _ = write!(out, "   {}{}", letters, GUTTER);
    }
    out.push('\n');

    for row in 0..GRID_SIZE {
        for player in Player::ALL {
            let reveal = game.reveals_ships(player);
            let _ = write!(out, "{:>2} ", row + 1);
            for col in 0..GRID_SIZE {
                let cell = game.cell_at(player, row, col).unwrap_or_default();
                let _ = write!(out, " {}", symbol(cell, reveal));
            }
            out.push_str(GUTTER);
        }
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&status_line(game));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(text: &str) -> Vec<&str> {
        text.lines().collect()
    }

    #[test]
    fn test_menu_status() {
        let game = MatchController::new();
        assert_eq!(
            status_line(&game),
            "Type `start` to begin, `help` for commands."
        );
    }

    #[test]
    fn test_render_shows_own_ships_while_placing() {
        let mut game = MatchController::new();
        game.start();
        game.attempt_place(0, 0);

        let text = render(&game);
        let rows = lines(&text);
        assert_eq!(rows.len(), 2 + GRID_SIZE + 2);
        assert!(rows[2].starts_with(" 1  # # # # . ."));
        assert_eq!(
            rows.last().copied(),
            Some("Player 1: place a ship of length 3 (horizontal)")
        );
    }

    #[test]
    fn test_render_hides_opponent_ships_in_battle() {
        let mut game = MatchController::new();
        game.start();
        for _ in 0..2 {
            for row in [0, 2, 4, 6] {
                game.attempt_place(row, 0);
            }
        }
        game.attempt_shoot(Player::Two, 0, 0);
        game.attempt_shoot(Player::Two, 0, 9);

        // Player two now holds the turn, so only their fleet is drawn
        let text = render(&game);
        let first_row = lines(&text)[2];
        let (left, right) = first_row.split_at(3 + GRID_SIZE * 2 + GUTTER.len());
        assert!(left.starts_with(" 1  . . . ."));
        assert!(right.starts_with(" 1  X # # # . . . . . o"));
        assert_eq!(status_line(&game), "Player 2 to fire at Player 1's board");
    }

    #[test]
    fn test_game_over_status() {
        let mut game = MatchController::new();
        game.start();
        for _ in 0..2 {
            for row in [0, 2, 4, 6] {
                game.attempt_place(row, 0);
            }
        }
        for (row, len) in [(0, 4), (2, 3), (4, 2), (6, 1)] {
            for col in 0..len {
                game.attempt_shoot(Player::Two, row, col);
            }
        }
        assert_eq!(
            status_line(&game),
            "Player 1 wins! Type `reset` to play again."
        );

        // The winner's untouched fleet stays hidden on the final screen
        let text = render(&game);
        let first_row = lines(&text)[2];
        let (left, right) = first_row.split_at(3 + GRID_SIZE * 2 + GUTTER.len());
        assert!(left.starts_with(" 1  . . . . . ."));
        assert!(right.starts_with(" 1  X X X X . ."));
        assert!(!text.contains('#'));
    }
}
