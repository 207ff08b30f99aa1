//! Random fleet layout for players who do not want to place ships by hand.
//!
//! The placer only fills in the current player's own board, one validated
//! `Place` command at a time. It never plays shots.

use crate::actions::{MatchCommand, MatchEvent};
use crate::board::{Board, Orientation};
use crate::error::CommandError;
use crate::game::{MatchController, MatchPhase};
use rand::prelude::*;

/// Chooses ship positions at random
pub struct FleetPlacer {
    rng: StdRng,
}

impl FleetPlacer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Placer with a fixed seed, for reproducible layouts
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a uniformly random spot where a ship of `length` fits
    pub fn choose_placement(
        &mut self,
        board: &Board,
        length: usize,
    ) -> Option<(usize, usize, Orientation)> {
        let candidates: Vec<(usize, usize, Orientation)> =
            [Orientation::Horizontal, Orientation::Vertical]
                .into_iter()
                .flat_map(|orientation| {
                    board
                        .valid_placements(length, orientation)
                        .into_iter()
                        .map(move |(row, col)| (row, col, orientation))
                })
                .collect();

        candidates.choose(&mut self.rng).copied()
    }

    /// Place every ship left in the current player's queue.
    ///
    /// Stops after that player's fleet is complete, so calling it twice lays
    /// out both fleets.
    pub fn place_fleet(
        &mut self,
        game: &mut MatchController,
    ) -> Result<Vec<MatchEvent>, CommandError> {
        let MatchPhase::Placing { player, .. } = *game.current_phase() else {
            return Err(CommandError::WrongPhase);
        };

        let mut events = Vec::new();
        loop {
            let (length, current) = match game.current_phase() {
                MatchPhase::Placing {
                    player: placing,
                    queue,
                    orientation,
                } if *placing == player => (
                    queue.current().ok_or(CommandError::QueueExhausted)?,
                    *orientation,
                ),
                _ => break,
            };

            let (row, col, wanted) = self
                .choose_placement(game.board(player), length)
                .ok_or(CommandError::CellOccupied)?;

            if wanted != current {
                events.extend(game.apply(MatchCommand::ToggleOrientation)?);
            }
            events.extend(game.apply(MatchCommand::Place { row, col })?);
        }

        Ok(events)
    }
}

impl Default for FleetPlacer {
    fn default() -> Self {
        Self::new()
    }
}
