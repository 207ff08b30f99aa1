//! One player's ocean grid.
//!
//! This module contains:
//! - Cell states and ship orientation
//! - The 10x10 board with placement validation
//! - Shot resolution and defeat detection

use crate::error::CommandError;
use serde::{Deserialize, Serialize};

/// Width and height of every board
pub const GRID_SIZE: usize = 10;

/// State of a single grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// Open water, never targeted
    #[default]
    Empty,
    /// Part of a ship that has not been hit yet
    Ship,
    /// Targeted open water
    Miss,
    /// Targeted ship segment
    Hit,
}

impl Cell {
    /// Whether a shot already landed here
    pub fn is_targeted(&self) -> bool {
        matches!(self, Cell::Miss | Cell::Hit)
    }
}

/// Direction a ship extends from its origin cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Orientation {
    /// Extends to increasing columns
    #[default]
    Horizontal,
    /// Extends to increasing rows
    Vertical,
}

impl Orientation {
    /// The other orientation
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Result of a shot that was accepted by the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotResult {
    Hit,
    Miss,
}

/// A 10x10 grid of cells belonging to one player.
///
/// Cells only move Empty -> Ship during placement and Ship -> Hit or
/// Empty -> Miss during battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Board {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells a ship would cover, or `OutOfBounds` if any of them falls off the grid
    fn footprint(
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<Vec<(usize, usize)>, CommandError> {
        if length == 0 || row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(CommandError::OutOfBounds);
        }
        let start = match orientation {
            Orientation::Horizontal => col,
            Orientation::Vertical => row,
        };
        if start.saturating_add(length) > GRID_SIZE {
            return Err(CommandError::OutOfBounds);
        }

        Ok((0..length)
            .map(|i| match orientation {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            })
            .collect())
    }

    /// Place a ship, reporting why it was rejected.
    ///
    /// The board is untouched unless every covered cell is in range and empty.
    pub fn try_place_ship(
        &mut self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), CommandError> {
        let cells = Self::footprint(row, col, length, orientation)?;
        if cells.iter().any(|&(r, c)| self.cells[r][c] != Cell::Empty) {
            return Err(CommandError::CellOccupied);
        }

        for (r, c) in cells {
            self.cells[r][c] = Cell::Ship;
        }
        Ok(())
    }

    /// Place a ship; `false` means nothing changed
    pub fn place_ship(
        &mut self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> bool {
        self.try_place_ship(row, col, length, orientation).is_ok()
    }

    /// Check a placement without applying it
    pub fn can_place(&self, row: usize, col: usize, length: usize, orientation: Orientation) -> bool {
        Self::footprint(row, col, length, orientation)
            .map(|cells| cells.iter().all(|&(r, c)| self.cells[r][c] == Cell::Empty))
            .unwrap_or(false)
    }

    /// Every origin where a ship of `length` fits with the given orientation
    pub fn valid_placements(&self, length: usize, orientation: Orientation) -> Vec<(usize, usize)> {
        let mut spots = Vec::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if self.can_place(row, col, length, orientation) {
                    spots.push((row, col));
                }
            }
        }
        spots
    }

    /// Resolve a shot at (row, col).
    ///
    /// Cells that were already targeted are rejected with `AlreadyTargeted`
    /// and keep their state.
    pub fn shoot(&mut self, row: usize, col: usize) -> Result<ShotResult, CommandError> {
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(CommandError::OutOfBounds)?;

        match *cell {
            Cell::Ship => {
                *cell = Cell::Hit;
                Ok(ShotResult::Hit)
            }
            Cell::Empty => {
                *cell = Cell::Miss;
                Ok(ShotResult::Miss)
            }
            Cell::Hit | Cell::Miss => Err(CommandError::AlreadyTargeted),
        }
    }

    /// True when no unhit ship segment remains, including on a board with no ships
    pub fn is_defeated(&self) -> bool {
        self.ship_cells_remaining() == 0
    }

    /// Read a cell; `None` outside the grid
    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Number of cells in the given state
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Ship segments that have not been hit
    pub fn ship_cells_remaining(&self) -> usize {
        self.count(Cell::Ship)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty_and_defeated() {
        let board = Board::new();
        assert_eq!(board.count(Cell::Empty), GRID_SIZE * GRID_SIZE);
        assert!(board.is_defeated());
    }

    #[test]
    fn test_place_horizontal_and_vertical() {
        let mut board = Board::new();
        assert!(board.place_ship(0, 0, 4, Orientation::Horizontal));
        assert!(board.place_ship(2, 9, 3, Orientation::Vertical));

        for col in 0..4 {
            assert_eq!(board.cell_at(0, col), Some(Cell::Ship));
        }
        assert_eq!(board.cell_at(0, 4), Some(Cell::Empty));
        for row in 2..5 {
            assert_eq!(board.cell_at(row, 9), Some(Cell::Ship));
        }
        assert_eq!(board.ship_cells_remaining(), 7);
        assert!(!board.is_defeated());
    }

    #[test]
    fn test_place_past_edge_is_rejected() {
        let mut board = Board::new();
        assert_eq!(
            board.try_place_ship(0, 7, 4, Orientation::Horizontal),
            Err(CommandError::OutOfBounds)
        );
        assert_eq!(
            board.try_place_ship(8, 0, 3, Orientation::Vertical),
            Err(CommandError::OutOfBounds)
        );
        assert_eq!(
            board.try_place_ship(10, 0, 1, Orientation::Vertical),
            Err(CommandError::OutOfBounds)
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_touching_last_row_and_column() {
        let mut board = Board::new();
        assert!(board.place_ship(9, 6, 4, Orientation::Horizontal));
        assert!(board.place_ship(6, 0, 4, Orientation::Vertical));
        assert_eq!(board.cell_at(9, 9), Some(Cell::Ship));
        assert_eq!(board.cell_at(9, 0), Some(Cell::Ship));
    }

    #[test]
    fn test_zero_length_ship_is_rejected() {
        let mut board = Board::new();
        assert_eq!(
            board.try_place_ship(0, 0, 0, Orientation::Horizontal),
            Err(CommandError::OutOfBounds)
        );
    }

    #[test]
    fn test_overlap_leaves_board_unchanged() {
        let mut board = Board::new();
        assert!(board.place_ship(3, 3, 3, Orientation::Horizontal));
        let before = board.clone();

        assert_eq!(
            board.try_place_ship(1, 4, 4, Orientation::Vertical),
            Err(CommandError::CellOccupied)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_adjacent_ships_are_allowed() {
        let mut board = Board::new();
        assert!(board.place_ship(0, 0, 2, Orientation::Horizontal));
        assert!(board.place_ship(1, 0, 2, Orientation::Horizontal));
        assert!(board.place_ship(0, 2, 1, Orientation::Horizontal));
    }

    #[test]
    fn test_shoot_hit_then_repeat_is_rejected() {
        let mut board = Board::new();
        board.place_ship(4, 4, 2, Orientation::Vertical);

        assert_eq!(board.shoot(4, 4), Ok(ShotResult::Hit));
        assert_eq!(board.cell_at(4, 4), Some(Cell::Hit));

        assert_eq!(board.shoot(4, 4), Err(CommandError::AlreadyTargeted));
        assert_eq!(board.cell_at(4, 4), Some(Cell::Hit));
    }

    #[test]
    fn test_shoot_miss_then_repeat_is_rejected() {
        let mut board = Board::new();
        assert_eq!(board.shoot(0, 0), Ok(ShotResult::Miss));
        assert_eq!(board.cell_at(0, 0), Some(Cell::Miss));
        assert_eq!(board.shoot(0, 0), Err(CommandError::AlreadyTargeted));
        assert_eq!(board.cell_at(0, 0), Some(Cell::Miss));
    }

    #[test]
    fn test_shoot_out_of_range() {
        let mut board = Board::new();
        assert_eq!(board.shoot(10, 2), Err(CommandError::OutOfBounds));
        assert_eq!(board.shoot(2, 10), Err(CommandError::OutOfBounds));
        assert_eq!(board.cell_at(10, 10), None);
    }

    #[test]
    fn test_single_cell_ship_sinks_board() {
        let mut board = Board::new();
        assert!(board.place_ship(0, 0, 1, Orientation::Horizontal));
        assert!(!board.is_defeated());
        assert_eq!(board.shoot(0, 0), Ok(ShotResult::Hit));
        assert!(board.is_defeated());
    }

    #[test]
    fn test_valid_placements_respects_edges_and_ships() {
        let mut board = Board::new();
        // A length-4 horizontal ship fits in columns 0..=6 of every row
        assert_eq!(board.valid_placements(4, Orientation::Horizontal).len(), 70);

        board.place_ship(0, 0, 10, Orientation::Horizontal);
        let spots = board.valid_placements(1, Orientation::Vertical);
        assert_eq!(spots.len(), 90);
        assert!(spots.iter().all(|&(r, _)| r != 0));
    }

    #[test]
    fn test_orientation_toggle() {
        assert_eq!(Orientation::Horizontal.toggled(), Orientation::Vertical);
        assert_eq!(Orientation::Vertical.toggled(), Orientation::Horizontal);
        assert_eq!(Orientation::default(), Orientation::Horizontal);
    }
}
