//! A single hot-seat match driven from the prompt.

use crate::input::{Input, HELP};
use battleship_core::{
    CommandError, FleetPlacer, MatchCommand, MatchController, MatchEvent, Orientation, Player,
    ShotResult,
};
use tracing::{debug, info};

/// What the prompt loop should do after a line was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and redraw the boards
    Redraw(String),
    /// Print the message only
    Message(String),
    /// Leave the program
    Quit,
}

/// The running match plus the placer used by `auto`
pub struct Session {
    pub game: MatchController,
    placer: FleetPlacer,
}

impl Session {
    pub fn new(placer: FleetPlacer) -> Self {
        Self {
            game: MatchController::new(),
            placer,
        }
    }

    /// Handle one parsed input line
    pub fn handle(&mut self, input: Input) -> Reply {
        let result = match input {
            Input::Help => return Reply::Message(HELP.to_string()),
            Input::Quit => {
                info!("player quit");
                return Reply::Quit;
            }
            Input::Start => self.game.apply(MatchCommand::Start),
            Input::Reset => self.game.apply(MatchCommand::Reset),
            Input::Rotate => self.game.apply(MatchCommand::ToggleOrientation),
            Input::Place(cell) => self.game.apply(MatchCommand::Place {
                row: cell.row,
                col: cell.col,
            }),
            Input::Fire { target, cell } => {
                let target = target
                    .or_else(|| self.game.active_player().map(Player::opponent))
                    .unwrap_or(Player::Two);
                self.game.apply(MatchCommand::Shoot {
                    target,
                    row: cell.row,
                    col: cell.col,
                })
            }
            Input::Auto => self.placer.place_fleet(&mut self.game),
        };

        match result {
            Ok(events) => {
                debug!(count = events.len(), "events produced");
                Reply::Redraw(describe(&events))
            }
            Err(err) => {
                // Stays below the default `warn` filter
                debug!(?input, %err, "input rejected");
                Reply::Message(rejection(err))
            }
        }
    }
}

fn rejection(err: CommandError) -> String {
    match err {
        CommandError::WrongPhase => "That doesn't work right now. Type `help` for commands.".to_string(),
        other => format!("{}.", other),
    }
}

/// Human-readable summary of what a command did
pub fn describe(events: &[MatchEvent]) -> String {
    let mut lines = Vec::new();
    let mut placed = 0;
    let mut rotated = None;

    for event in events {
        match event {
            MatchEvent::MatchStarted => lines.push("Match started.".to_string()),
            MatchEvent::MatchReset => lines.push("Boards cleared.".to_string()),
            MatchEvent::OrientationChanged { orientation } => rotated = Some(*orientation),
            MatchEvent::ShipPlaced { .. } => placed += 1,
            MatchEvent::FleetComplete { player } => {
                lines.push(format!("{} has placed their fleet.", player))
            }
            MatchEvent::BattleStarted { first } => {
                lines.push(format!("Battle begins. {} fires first.", first))
            }
            MatchEvent::ShotFired { shooter, result, .. } => lines.push(match result {
                ShotResult::Hit => format!("{}: hit! Fire again.", shooter),
                ShotResult::Miss => format!("{}: miss.", shooter),
            }),
            MatchEvent::TurnPassed { to, .. } => {
                lines.push(format!("{}, take the seat.", to))
            }
            MatchEvent::MatchWon { winner } => {
                // The "fire again" line does not apply to the final shot
                lines.pop();
                lines.push(format!("{} sank the last ship and wins!", winner))
            }
        }
    }

    match rotated {
        Some(Orientation::Horizontal) if placed == 0 => lines.push("Placing horizontally.".to_string()),
        Some(Orientation::Vertical) if placed == 0 => lines.push("Placing vertically.".to_string()),
        _ => {}
    }
    if placed > 0 {
        let noun = if placed == 1 { "ship" } else { "ships" };
        lines.insert(0, format!("Placed {} {}.", placed, noun));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{parse_line, Coord};
    use pretty_assertions::assert_eq;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::EnvFilter;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    /// Run rejected inputs under a subscriber with the given filter and return its output
    fn logs_for_rejections(filter: &str) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut s = session();
            assert!(matches!(run(&mut s, "place A1"), Reply::Message(_)));
            run(&mut s, "start");
            run(&mut s, "place A1");
            assert!(matches!(run(&mut s, "place A1"), Reply::Message(_)));
        });
        logs.text()
    }

    fn session() -> Session {
        Session::new(FleetPlacer::with_seed(5))
    }

    fn run(session: &mut Session, line: &str) -> Reply {
        session.handle(parse_line(line).unwrap())
    }

    #[test]
    fn test_start_and_place() {
        let mut s = session();
        assert_eq!(run(&mut s, "start"), Reply::Redraw("Match started.".to_string()));
        assert_eq!(run(&mut s, "place A1"), Reply::Redraw("Placed 1 ship.".to_string()));
        assert_eq!(
            run(&mut s, "place B1"),
            Reply::Message("Cell is already occupied by a ship.".to_string())
        );
    }

    #[test]
    fn test_wrong_phase_message() {
        let mut s = session();
        assert_eq!(
            run(&mut s, "fire A1"),
            Reply::Message("That doesn't work right now. Type `help` for commands.".to_string())
        );
    }

    #[test]
    fn test_off_grid_cell_is_rejected_by_engine() {
        let mut s = session();
        run(&mut s, "start");
        assert_eq!(
            s.handle(Input::Place(Coord { row: 0, col: 12 })),
            Reply::Message("Coordinates are outside the grid.".to_string())
        );
    }

    #[test]
    fn test_auto_places_both_fleets_and_fire_defaults_to_opponent() {
        let mut s = session();
        run(&mut s, "start");
        assert_eq!(
            run(&mut s, "auto"),
            Reply::Redraw("Placed 4 ships.\nPlayer 1 has placed their fleet.".to_string())
        );
        assert_eq!(
            run(&mut s, "auto"),
            Reply::Redraw(
                "Placed 4 ships.\nPlayer 2 has placed their fleet.\nBattle begins. Player 1 fires first."
                    .to_string()
            )
        );

        assert!(matches!(run(&mut s, "fire A1"), Reply::Redraw(_)));
        assert_ne!(
            s.game.cell_at(Player::Two, 0, 0),
            Some(battleship_core::Cell::Empty)
        );
        assert_eq!(
            s.game.cell_at(Player::One, 0, 0).map(|c| c.is_targeted()),
            Some(false)
        );
    }

    #[test]
    fn test_firing_at_own_board() {
        let mut s = session();
        run(&mut s, "start");
        run(&mut s, "auto");
        run(&mut s, "auto");
        assert_eq!(
            run(&mut s, "fire 1 A1"),
            Reply::Message("Cannot shoot at your own board.".to_string())
        );
    }

    #[test]
    fn test_describe_final_shot() {
        let events = vec![
            MatchEvent::ShotFired {
                shooter: Player::Two,
                target: Player::One,
                row: 0,
                col: 0,
                result: ShotResult::Hit,
            },
            MatchEvent::MatchWon {
                winner: Player::Two,
            },
        ];
        assert_eq!(describe(&events), "Player 2 sank the last ship and wins!");
    }

    #[test]
    fn test_rotate_message() {
        let mut s = session();
        run(&mut s, "start");
        assert_eq!(run(&mut s, "rotate"), Reply::Redraw("Placing vertically.".to_string()));
        assert_eq!(run(&mut s, "r"), Reply::Redraw("Placing horizontally.".to_string()));
    }

    #[test]
    fn test_rejections_are_silent_at_default_filter() {
        assert_eq!(logs_for_rejections(crate::DEFAULT_LOG_FILTER), "");

        let verbose = logs_for_rejections("debug");
        assert_eq!(verbose.matches("input rejected").count(), 2);
    }

    #[test]
    fn test_help_and_quit() {
        let mut s = session();
        assert_eq!(run(&mut s, "help"), Reply::Message(HELP.to_string()));
        assert_eq!(run(&mut s, "quit"), Reply::Quit);
    }
}
