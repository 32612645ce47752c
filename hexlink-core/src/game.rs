//! Game session: board, turn order, hover state and win checking

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, Cell, Coord, Player, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::geometry::Point;
use crate::layout::Layout;
use crate::search;

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    Player1Wins,
    Player2Wins,
}

/// Errors on the session API. Occupied cells and pointer misses are
/// ordinary non-error results, not failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: i16, col: i16, size: usize },
}

/// One game in progress. Pure state: holds nothing presentation-side.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    result: GameResult,
}

impl GameState {
    /// Start a game on a `size` x `size` board, clamped to the
    /// configurable range. Player1 moves first.
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE)),
            current_player: Player::Player1,
            result: GameResult::Ongoing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Claim `coord` for the player to move.
    ///
    /// Ok(true): the claim landed, the win check ran and the turn
    /// passed to the opponent. Ok(false): the cell is already owned or
    /// the game is over; nothing changed and the turn did not toggle.
    pub fn play(&mut self, coord: Coord) -> Result<bool, GameError> {
        if !self.board.in_bounds(coord) {
            return Err(GameError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                size: self.board.size(),
            });
        }
        if self.result != GameResult::Ongoing {
            return Ok(false);
        }
        if !self.board.claim(coord, self.current_player) {
            return Ok(false);
        }

        self.result = match search::winner(&self.board) {
            Some(Player::Player1) => GameResult::Player1Wins,
            Some(Player::Player2) => GameResult::Player2Wins,
            None => GameResult::Ongoing,
        };
        self.current_player = self.current_player.opponent();
        Ok(true)
    }

    /// Handle a pointer press: locate the cell under `pos` and claim
    /// it. Returns the claimed cell, or None when the pointer missed
    /// the board or the cell was taken.
    pub fn pointer_press(&mut self, pos: Point, layout: &Layout) -> Option<Coord> {
        let coord = layout.locate_cell(pos, self.board.size())?;
        // locate_cell only yields in-bounds coordinates
        match self.play(coord) {
            Ok(true) => Some(coord),
            _ => None,
        }
    }

    /// Tag the unclaimed cell under the pointer with the hover mark of
    /// the player to move, clearing stale hover marks elsewhere.
    pub fn hover(&mut self, pos: Point, layout: &Layout) {
        let target = layout.locate_cell(pos, self.board.size());
        for coord in self.board.coords() {
            let cell = self.board.cell(coord);
            if Some(coord) == target {
                if cell == Cell::Empty && self.result == GameResult::Ongoing {
                    self.board.set(coord, self.current_player.hover_tag());
                }
            } else if cell.is_hover() {
                self.board.set(coord, Cell::Empty);
            }
        }
    }

    /// Drop all hover marks (pointer left the board)
    pub fn clear_hover(&mut self) {
        for coord in self.board.coords() {
            if self.board.cell(coord).is_hover() {
                self.board.set(coord, Cell::Empty);
            }
        }
    }

    /// Fresh board of the same size, Player1 to move
    pub fn reset(&mut self) {
        self.board = Board::new(self.board.size());
        self.current_player = Player::Player1;
        self.result = GameResult::Ongoing;
    }
}
