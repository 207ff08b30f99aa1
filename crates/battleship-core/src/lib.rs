//! Battleship - a two-player same-screen naval combat engine
//!
//! This crate provides the game-state core for a hot-seat Battleship match:
//! - Board representation with ship placement and shot resolution
//! - The fleet queue each player places before battle
//! - A match state machine (menu, placement, battle, game over)
//! - Optional random fleet layout
//!
//! # Architecture
//!
//! The engine is a synchronous command/response machine with no presentation
//! code. An input layer translates clicks or keystrokes into commands, and a
//! renderer reads the phase and cells back. It can be compiled to:
//! - Native Rust for terminal front ends
//! - WebAssembly for a browser renderer
//!
//! # Modules
//!
//! - [`board`]: One player's 10x10 grid
//! - [`error`]: Why a command was rejected
//! - [`fleet`]: Ship lengths still to place
//! - [`actions`]: Commands and the events they produce
//! - [`game`]: The match controller
//! - [`placer`]: Random fleet layout

pub mod actions;
pub mod board;
pub mod error;
pub mod fleet;
pub mod game;
pub mod placer;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use actions::{MatchCommand, MatchEvent};
pub use board::{Board, Cell, Orientation, ShotResult, GRID_SIZE};
pub use fleet::{FleetQueue, FLEET};
pub use error::CommandError;
pub use game::{MatchController, MatchPhase, Player, ShotOutcome};
pub use placer::FleetPlacer;
