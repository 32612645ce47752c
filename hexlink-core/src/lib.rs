//! HEXLINK Core - connection game rules engine
//!
//! This crate provides the rules of a two-player hex connection game:
//! - Planar geometry (coordinate snapping, hexagon hit test)
//! - Pixel layout and pointer-to-cell mapping
//! - Board state on a rhombic flat-top hex grid
//! - Edge-to-edge connectivity search and win detection
//! - Game session (turn order, hover marks, reset)

pub mod board;
pub mod game;
pub mod geometry;
pub mod layout;
pub mod search;

// Re-exports for convenient access
pub use board::{Board, Cell, Coord, Player, DIRECTIONS, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use game::{GameError, GameResult, GameState};
pub use geometry::{
    dist, point_in_hexagon, point_in_rectangle, triangle_area, Point, EPS,
};
pub use layout::Layout;
pub use search::{has_connected_path, winner};
