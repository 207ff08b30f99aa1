//! Commands the input layer can issue.
//!
//! This module defines every command accepted by the match controller and
//! the events produced when a command is applied.

use crate::board::{Orientation, ShotResult};
use crate::game::Player;
use serde::{Deserialize, Serialize};

/// All commands an input layer can send to a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchCommand {
    /// Leave the menu and begin placement
    Start,
    /// Clear both boards and restart placement with player one
    Reset,
    /// Flip the orientation used for the next placement
    ToggleOrientation,
    /// Place the current ship of the placing player with its origin at (row, col)
    Place { row: usize, col: usize },
    /// Fire at a cell on the target player's board
    Shoot { target: Player, row: usize, col: usize },
}

/// Events that occur as a result of commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Placement began for player one
    MatchStarted,

    /// Both boards were cleared
    MatchReset,

    /// Placement orientation changed
    OrientationChanged { orientation: Orientation },

    /// A ship was placed
    ShipPlaced {
        player: Player,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    },

    /// A player finished placing their fleet
    FleetComplete { player: Player },

    /// Both fleets are placed and shooting starts
    BattleStarted { first: Player },

    /// A shot was resolved
    ShotFired {
        shooter: Player,
        target: Player,
        row: usize,
        col: usize,
        result: ShotResult,
    },

    /// The turn moved to the other player after a miss
    TurnPassed { from: Player, to: Player },

    /// The last ship segment of the opponent was hit
    MatchWon { winner: Player },
}
