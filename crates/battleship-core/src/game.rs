//! Core match state machine.
//!
//! This module contains the `MatchController`, which owns both boards and the
//! current phase, and validates every command before it touches state.

use crate::actions::{MatchCommand, MatchEvent};
use crate::board::{Board, Cell, Orientation, ShotResult};
pub use crate::error::CommandError;
use crate::fleet::FleetQueue;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// One of the two seats at the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players in turn order
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The other player
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Player number as shown to humans (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Look up a player by human number
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// Index into per-player storage
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Match phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Waiting for a start command
    Menu,

    /// A player is laying out their fleet
    Placing {
        /// Who is placing
        player: Player,
        /// Ships still to place, current one first
        queue: FleetQueue,
        /// Orientation used for the next placement
        orientation: Orientation,
    },

    /// Players take shots at each other
    Battling {
        /// Whose turn it is
        active: Player,
    },

    /// One fleet is destroyed
    GameOver { winner: Player },
}

impl MatchPhase {
    /// Fresh placement for a player with the standard fleet
    fn placing(player: Player, orientation: Orientation) -> Self {
        MatchPhase::Placing {
            player,
            queue: FleetQueue::standard(),
            orientation,
        }
    }

    /// Length of the ship currently being placed
    pub fn ship_len(&self) -> Option<usize> {
        match self {
            MatchPhase::Placing { queue, .. } => queue.current(),
            _ => None,
        }
    }
}

/// What a shot command did, for input layers that only need the outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    /// Command was ignored and nothing changed
    Rejected,
    /// Open water; the turn passed to the target
    Miss,
    /// Ship segment hit; the shooter fires again
    Hit,
    /// Last ship segment hit; the match is over
    HitAndWon(Player),
}

/// The complete match state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchController {
    /// Boards indexed by `Player::index`
    boards: [Board; 2],
    /// Current match phase
    phase: MatchPhase,
}

impl MatchController {
    /// Create a match sitting in the menu
    pub fn new() -> Self {
        Self {
            boards: [Board::new(), Board::new()],
            phase: MatchPhase::Menu,
        }
    }

    /// Current phase, for rendering
    pub fn current_phase(&self) -> &MatchPhase {
        &self.phase
    }

    /// A player's board
    pub fn board(&self, player: Player) -> &Board {
        &self.boards[player.index()]
    }

    /// Read one cell of a player's board; `None` outside the grid
    pub fn cell_at(&self, player: Player, row: usize, col: usize) -> Option<Cell> {
        self.board(player).cell_at(row, col)
    }

    /// The player expected to act next, if any
    pub fn active_player(&self) -> Option<Player> {
        match self.phase {
            MatchPhase::Placing { player, .. } => Some(player),
            MatchPhase::Battling { active } => Some(active),
            MatchPhase::Menu | MatchPhase::GameOver { .. } => None,
        }
    }

    /// Get the winner if the match is over
    pub fn winner(&self) -> Option<Player> {
        if let MatchPhase::GameOver { winner } = self.phase {
            Some(winner)
        } else {
            None
        }
    }

    /// Check if the match is over
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, MatchPhase::GameOver { .. })
    }

    /// Whether unhit ships on `owner`'s board may be shown on the shared screen.
    ///
    /// Both fleets are visible while placing; during battle only the active
    /// player's own fleet is. The menu and the game-over screen show none.
    pub fn reveals_ships(&self, owner: Player) -> bool {
        match self.phase {
            MatchPhase::Menu | MatchPhase::GameOver { .. } => false,
            MatchPhase::Placing { .. } => true,
            MatchPhase::Battling { active } => owner == active,
        }
    }

    /// Apply a command to the match
    pub fn apply(&mut self, command: MatchCommand) -> Result<Vec<MatchEvent>, CommandError> {
        let result = match command {
            MatchCommand::Start => self.start_match(),
            MatchCommand::Reset => Ok(self.reset_match()),
            MatchCommand::ToggleOrientation => self.toggle(),
            MatchCommand::Place { row, col } => self.place(row, col),
            MatchCommand::Shoot { target, row, col } => self.shoot(target, row, col),
        };

        match &result {
            Ok(events) => debug!(?command, ?events, phase = ?self.phase, "command applied"),
            Err(err) => trace!(?command, %err, "command rejected"),
        }
        result
    }

    /// Leave the menu; `false` outside the menu
    pub fn start(&mut self) -> bool {
        self.apply(MatchCommand::Start).is_ok()
    }

    /// Clear both boards and restart placement with player one
    pub fn reset(&mut self) {
        self.reset_match();
        debug!("match reset");
    }

    /// Flip the placement orientation; `false` outside placement
    pub fn toggle_orientation(&mut self) -> bool {
        self.apply(MatchCommand::ToggleOrientation).is_ok()
    }

    /// Place the current ship at (row, col) with the session orientation
    pub fn attempt_place(&mut self, row: usize, col: usize) -> bool {
        self.apply(MatchCommand::Place { row, col }).is_ok()
    }

    /// Fire at the target player's board
    pub fn attempt_shoot(&mut self, target: Player, row: usize, col: usize) -> ShotOutcome {
        if self.apply(MatchCommand::Shoot { target, row, col }).is_err() {
            return ShotOutcome::Rejected;
        }

        match self.phase {
            MatchPhase::GameOver { winner } => ShotOutcome::HitAndWon(winner),
            MatchPhase::Battling { active } if active == target => ShotOutcome::Miss,
            _ => ShotOutcome::Hit,
        }
    }

    fn start_match(&mut self) -> Result<Vec<MatchEvent>, CommandError> {
        if self.phase != MatchPhase::Menu {
            return Err(CommandError::WrongPhase);
        }
        self.boards = [Board::new(), Board::new()];
        self.phase = MatchPhase::placing(Player::One, Orientation::default());
        Ok(vec![MatchEvent::MatchStarted])
    }

    fn reset_match(&mut self) -> Vec<MatchEvent> {
        self.boards = [Board::new(), Board::new()];
        self.phase = MatchPhase::placing(Player::One, Orientation::default());
        vec![MatchEvent::MatchReset]
    }

    fn toggle(&mut self) -> Result<Vec<MatchEvent>, CommandError> {
        if let MatchPhase::Placing {
            ref mut orientation,
            ..
        } = self.phase
        {
            *orientation = orientation.toggled();
            Ok(vec![MatchEvent::OrientationChanged {
                orientation: *orientation,
            }])
        } else {
            Err(CommandError::WrongPhase)
        }
    }

    fn place(&mut self, row: usize, col: usize) -> Result<Vec<MatchEvent>, CommandError> {
        let MatchPhase::Placing {
            player,
            ref mut queue,
            orientation,
        } = self.phase
        else {
            return Err(CommandError::WrongPhase);
        };

        let length = queue.current().ok_or(CommandError::QueueExhausted)?;
        self.boards[player.index()].try_place_ship(row, col, length, orientation)?;
        queue.advance()?;

        let mut events = vec![MatchEvent::ShipPlaced {
            player,
            row,
            col,
            length,
            orientation,
        }];

        if queue.is_empty() {
            events.push(MatchEvent::FleetComplete { player });
            self.phase = match player {
                Player::One => MatchPhase::placing(Player::Two, orientation),
                Player::Two => {
                    events.push(MatchEvent::BattleStarted { first: Player::One });
                    MatchPhase::Battling {
                        active: Player::One,
                    }
                }
            };
        }

        Ok(events)
    }

    fn shoot(
        &mut self,
        target: Player,
        row: usize,
        col: usize,
    ) -> Result<Vec<MatchEvent>, CommandError> {
        let MatchPhase::Battling { active } = self.phase else {
            return Err(CommandError::WrongPhase);
        };
        if target == active {
            return Err(CommandError::ShootingOwnBoard);
        }

        let board = &mut self.boards[target.index()];
        let result = board.shoot(row, col)?;

        let mut events = vec![MatchEvent::ShotFired {
            shooter: active,
            target,
            row,
            col,
            result,
        }];

        match result {
            ShotResult::Hit if board.is_defeated() => {
                self.phase = MatchPhase::GameOver { winner: active };
                events.push(MatchEvent::MatchWon { winner: active });
            }
            ShotResult::Hit => {}
            ShotResult::Miss => {
                self.phase = MatchPhase::Battling { active: target };
                events.push(MatchEvent::TurnPassed {
                    from: active,
                    to: target,
                });
            }
        }

        Ok(events)
    }
}

impl Default for MatchController {
    fn default() -> Self {
        Self::new()
    }
}
