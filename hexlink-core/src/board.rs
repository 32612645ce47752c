//! Board state: a rhombic grid of flat-top hex cells with axial addressing

use serde::{Deserialize, Serialize};

/// Smallest playable board
pub const MIN_BOARD_SIZE: usize = 5;

/// Largest configurable board
pub const MAX_BOARD_SIZE: usize = 13;

/// Axial grid coordinates (row, column), usable directly as array indices
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i16,
    pub col: i16,
}

impl Coord {
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    /// Get neighbor in direction (0-5)
    pub fn neighbor(&self, direction: u8) -> Coord {
        let (dr, dc) = DIRECTIONS[direction as usize % 6];
        Coord::new(self.row + dr, self.col + dc)
    }
}

/// Neighbor offsets (drow, dcol) of the flat-top lattice.
/// The order is fixed: the connectivity search expands neighbors in
/// exactly this sequence.
pub const DIRECTIONS: [(i16, i16); 6] = [
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
];

/// Player side. Player1 connects the row edges (row 0 to row size-1),
/// Player2 the column edges (column 0 to column size-1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Transient tag shown while this player hovers an unclaimed cell
    pub(crate) fn hover_tag(self) -> Cell {
        match self {
            Player::Player1 => Cell::Hover1,
            Player::Player2 => Cell::Hover2,
        }
    }
}

/// Cell ownership tag. The hover tags are visual-only: they count as
/// unclaimed for move legality and are invisible to connectivity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Player1,
    Player2,
    Hover1,
    Hover2,
}

impl Cell {
    /// Owner of the cell, if it has been claimed
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Player1 => Some(Player::Player1),
            Cell::Player2 => Some(Player::Player2),
            Cell::Empty | Cell::Hover1 | Cell::Hover2 => None,
        }
    }

    /// True for cells a claim may land on
    pub fn is_claimable(self) -> bool {
        self.owner().is_none()
    }

    pub fn is_hover(self) -> bool {
        matches!(self, Cell::Hover1 | Cell::Hover2)
    }
}

/// The playing field: `size * size` cells, all Empty at creation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row >= 0
            && (coord.row as usize) < self.size
            && coord.col >= 0
            && (coord.col as usize) < self.size
    }

    /// Cell at `coord`. Out-of-range coordinates are a caller contract
    /// violation and panic.
    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[self.index(coord)]
    }

    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        let i = self.index(coord);
        self.cells[i] = cell;
    }

    /// Claim `coord` for `player`. Succeeds only when the cell is
    /// unclaimed (empty or hovered); an owned cell is left unchanged
    /// and the claim reports false.
    pub fn claim(&mut self, coord: Coord, player: Player) -> bool {
        let i = self.index(coord);
        if !self.cells[i].is_claimable() {
            return false;
        }
        self.cells[i] = match player {
            Player::Player1 => Cell::Player1,
            Player::Player2 => Cell::Player2,
        };
        true
    }

    /// Iterate all coordinates in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let size = self.size as i16;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }

    fn index(&self, coord: Coord) -> usize {
        assert!(
            self.in_bounds(coord),
            "coordinate ({}, {}) out of range for board size {}",
            coord.row,
            coord.col,
            self.size
        );
        coord.row as usize * self.size + coord.col as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(5);
        assert_eq!(board.size(), 5);
        assert!(board.coords().all(|c| board.cell(c) == Cell::Empty));
        assert_eq!(board.coords().count(), 25);
    }

    #[test]
    fn test_in_bounds() {
        let board = Board::new(5);
        assert!(board.in_bounds(Coord::new(0, 0)));
        assert!(board.in_bounds(Coord::new(4, 4)));
        assert!(!board.in_bounds(Coord::new(-1, 0)));
        assert!(!board.in_bounds(Coord::new(0, 5)));
        assert!(!board.in_bounds(Coord::new(5, 0)));
    }

    #[test]
    fn test_claim_monotonic() {
        let mut board = Board::new(5);
        let c = Coord::new(2, 3);
        assert!(board.claim(c, Player::Player1));
        assert_eq!(board.cell(c), Cell::Player1);

        // Repeated claims by anyone fail and never change the owner
        assert!(!board.claim(c, Player::Player1));
        assert!(!board.claim(c, Player::Player2));
        assert_eq!(board.cell(c), Cell::Player1);
    }

    #[test]
    fn test_hover_is_claimable() {
        let mut board = Board::new(5);
        let c = Coord::new(1, 1);
        board.set(c, Cell::Hover2);
        assert!(board.cell(c).is_claimable());
        assert_eq!(board.cell(c).owner(), None);
        assert!(board.claim(c, Player::Player1));
        assert_eq!(board.cell(c).owner(), Some(Player::Player1));
    }

    #[test]
    fn test_neighbor_order() {
        let c = Coord::new(2, 2);
        let neighbors: Vec<Coord> = (0..6).map(|d| c.neighbor(d)).collect();
        assert_eq!(
            neighbors,
            vec![
                Coord::new(3, 2),
                Coord::new(3, 1),
                Coord::new(2, 3),
                Coord::new(2, 1),
                Coord::new(1, 3),
                Coord::new(1, 2),
            ]
        );
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_cell_panics() {
        let board = Board::new(5);
        board.cell(Coord::new(5, 0));
    }
}
