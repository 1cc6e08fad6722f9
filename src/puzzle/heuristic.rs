//! Manhattan-distance heuristic for the best-first strategy.

use crate::puzzle::board::Board;
use crate::puzzle::node::Node;

/// Sum of the Manhattan distances of all non-blank tiles from their goal
/// cells. Tile `v` belongs at row `v / n`, column `v % n`.
///
/// The blank is excluded, so the estimate never overcounts the moves still
/// required: one slide moves exactly one tile one cell.
#[must_use]
pub fn manhattan(board: &Board) -> u32 {
    let n = board.size();
    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(idx, &tile)| {
            let goal = tile as usize;
            let distance = (idx / n).abs_diff(goal / n) + (idx % n).abs_diff(goal % n);
            distance as u32
        })
        .sum()
}

/// A* priority key: estimated remaining moves plus moves already made.
#[must_use]
pub fn total_cost(node: &Node) -> u32 {
    manhattan(&node.board) + node.cost
}
