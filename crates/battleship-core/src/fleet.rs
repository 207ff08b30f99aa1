//! The fleet each player places before battle.

use crate::error::CommandError;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Ship lengths every player places, longest first
pub const FLEET: [usize; 4] = [4, 3, 2, 1];

/// Lengths still waiting to be placed by one player.
///
/// The front entry is the ship currently being placed; an empty queue means
/// the player's placement is finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetQueue {
    lengths: VecDeque<usize>,
}

impl FleetQueue {
    /// A fresh queue holding the standard fleet
    pub fn standard() -> Self {
        Self::from_lengths(FLEET)
    }

    /// A queue with custom lengths, consumed front to back
    pub fn from_lengths<I: IntoIterator<Item = usize>>(lengths: I) -> Self {
        Self {
            lengths: lengths.into_iter().collect(),
        }
    }

    /// Length of the ship being placed now
    pub fn current(&self) -> Option<usize> {
        self.lengths.front().copied()
    }

    /// Drop the ship that was just placed and return its length
    pub fn advance(&mut self) -> Result<usize, CommandError> {
        self.lengths.pop_front().ok_or(CommandError::QueueExhausted)
    }

    /// Lengths after the current one
    pub fn remaining(&self) -> impl Iterator<Item = usize> + '_ {
        self.lengths.iter().skip(1).copied()
    }

    /// Number of ships left including the current one
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }
}

impl Default for FleetQueue {
    fn default() -> Self {
        Self::standard()
    }
}
