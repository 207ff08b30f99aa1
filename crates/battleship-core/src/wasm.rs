//! WebAssembly bindings for the battleship engine.
//!
//! This module exposes the match controller to a JavaScript renderer through
//! wasm-bindgen. Player arguments are the human numbers 1 and 2.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::actions::MatchCommand;
#[cfg(feature = "wasm")]
use crate::game::{MatchController, Player, ShotOutcome};
#[cfg(feature = "wasm")]
use crate::placer::FleetPlacer;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[cfg(feature = "wasm")]
fn player_arg(number: u8) -> Result<Player, JsValue> {
    Player::from_number(number).ok_or_else(|| JsValue::from_str("Player must be 1 or 2"))
}

/// WASM-exposed match wrapper
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmMatch {
    game: MatchController,
    placer: FleetPlacer,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmMatch {
    /// Create a match sitting in the menu
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmMatch {
        WasmMatch {
            game: MatchController::new(),
            placer: FleetPlacer::new(),
        }
    }

    /// Get the whole match (both boards and the phase) as JSON
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        serde_json::to_string(&self.game).unwrap_or_else(|_| "{}".to_string())
    }

    /// Get the current phase as JSON
    #[wasm_bindgen(js_name = getPhase)]
    pub fn get_phase(&self) -> String {
        serde_json::to_string(self.game.current_phase())
            .unwrap_or_else(|_| "\"Unknown\"".to_string())
    }

    /// Get one player's board as JSON
    #[wasm_bindgen(js_name = getBoard)]
    pub fn get_board(&self, player: u8) -> Result<String, JsValue> {
        let player = player_arg(player)?;
        Ok(serde_json::to_string(self.game.board(player)).unwrap_or_else(|_| "{}".to_string()))
    }

    /// Get one cell as JSON ("Empty", "Ship", "Miss", "Hit"), or null outside the grid
    #[wasm_bindgen(js_name = getCell)]
    pub fn get_cell(&self, player: u8, row: usize, col: usize) -> Result<String, JsValue> {
        let player = player_arg(player)?;
        Ok(serde_json::to_string(&self.game.cell_at(player, row, col))
            .unwrap_or_else(|_| "null".to_string()))
    }

    /// Whether ships on a player's board may be drawn
    #[wasm_bindgen(js_name = revealsShips)]
    pub fn reveals_ships(&self, player: u8) -> Result<bool, JsValue> {
        Ok(self.game.reveals_ships(player_arg(player)?))
    }

    /// Apply a command from JSON, returns events JSON or the rejection reason
    #[wasm_bindgen(js_name = applyCommand)]
    pub fn apply_command(&mut self, command_json: &str) -> Result<String, JsValue> {
        let command: MatchCommand = serde_json::from_str(command_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid command JSON: {}", e)))?;

        match self.game.apply(command) {
            Ok(events) => Ok(serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())),
            Err(e) => Err(JsValue::from_str(&format!("Command rejected: {}", e))),
        }
    }

    pub fn start(&mut self) -> bool {
        self.game.start()
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }

    #[wasm_bindgen(js_name = toggleOrientation)]
    pub fn toggle_orientation(&mut self) -> bool {
        self.game.toggle_orientation()
    }

    #[wasm_bindgen(js_name = attemptPlace)]
    pub fn attempt_place(&mut self, row: usize, col: usize) -> bool {
        self.game.attempt_place(row, col)
    }

    /// Fire at a board; returns "Rejected", "Miss", "Hit" or "Won"
    #[wasm_bindgen(js_name = attemptShoot)]
    pub fn attempt_shoot(&mut self, target: u8, row: usize, col: usize) -> Result<String, JsValue> {
        let outcome = self.game.attempt_shoot(player_arg(target)?, row, col);
        Ok(match outcome {
            ShotOutcome::Rejected => "Rejected",
            ShotOutcome::Miss => "Miss",
            ShotOutcome::Hit => "Hit",
            ShotOutcome::HitAndWon(_) => "Won",
        }
        .to_string())
    }

    /// Randomly lay out the rest of the placing player's fleet
    #[wasm_bindgen(js_name = autoPlace)]
    pub fn auto_place(&mut self) -> Result<String, JsValue> {
        let events = self
            .placer
            .place_fleet(&mut self.game)
            .map_err(|e| JsValue::from_str(&format!("Auto placement failed: {}", e)))?;
        Ok(serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string()))
    }

    /// Get the winner's number (if the match is over)
    #[wasm_bindgen(js_name = getWinner)]
    pub fn get_winner(&self) -> Option<u8> {
        self.game.winner().map(Player::number)
    }
}

#[cfg(feature = "wasm")]
impl Default for WasmMatch {
    fn default() -> Self {
        Self::new()
    }
}
