//! Command rejection reasons shared by the board, the fleet queue and the
//! match controller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a command is rejected. A rejected command never changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CommandError {
    #[error("Coordinates are outside the grid")]
    OutOfBounds,

    #[error("Cell is already occupied by a ship")]
    CellOccupied,

    #[error("Command is not valid in the current phase")]
    WrongPhase,

    #[error("Cannot shoot at your own board")]
    ShootingOwnBoard,

    #[error("No ships left to place")]
    QueueExhausted,

    #[error("Cell was already targeted")]
    AlreadyTargeted,
}
