//! Edge-to-edge connectivity search and win detection

use rustc_hash::FxHashSet;

use crate::board::{Board, Coord, Player};

/// Depth-first search over cells owned by `player`.
///
/// `seeds` is the starting frontier (callers pass already-owned cells).
/// The active node is the top of the stack; it is marked visited when
/// it is expanded, not when it is pushed. Expansion tries the six
/// neighbor directions in DIRECTIONS order and descends into the first
/// unvisited, in-bounds, player-owned neighbor; a node with no such
/// neighbor is popped. Returns true the moment an expanded cell
/// satisfies `is_goal`, false once the stack empties.
pub fn has_connected_path<F>(board: &Board, seeds: &[Coord], is_goal: F, player: Player) -> bool
where
    F: Fn(Coord) -> bool,
{
    let mut stack: Vec<Coord> = seeds.to_vec();
    let mut visited: FxHashSet<Coord> = FxHashSet::default();

    while let Some(&cur) = stack.last() {
        if is_goal(cur) {
            return true;
        }
        visited.insert(cur);

        let mut advanced = false;
        for direction in 0..6 {
            let next = cur.neighbor(direction);
            if board.in_bounds(next)
                && !visited.contains(&next)
                && board.cell(next).owner() == Some(player)
            {
                stack.push(next);
                advanced = true;
                break;
            }
        }

        if !advanced {
            stack.pop();
        }
    }

    false
}

/// Decide whether either player has completed their connection.
///
/// Player2 is seeded from every owned cell in column 0 with the goal
/// "column == size-1"; Player1 from every owned cell in row 0 with the
/// goal "row == size-1". The edge pairs are orthogonal on purpose:
/// that is the board-orientation rule of the game. Player2's edge is
/// scanned first, matching the original check order.
pub fn winner(board: &Board) -> Option<Player> {
    let size = board.size() as i16;

    for row in 0..size {
        let seed = Coord::new(row, 0);
        if board.cell(seed).owner() == Some(Player::Player2)
            && has_connected_path(board, &[seed], |c| c.col == size - 1, Player::Player2)
        {
            return Some(Player::Player2);
        }
    }

    for col in 0..size {
        let seed = Coord::new(0, col);
        if board.cell(seed).owner() == Some(Player::Player1)
            && has_connected_path(board, &[seed], |c| c.row == size - 1, Player::Player1)
        {
            return Some(Player::Player1);
        }
    }

    None
}
