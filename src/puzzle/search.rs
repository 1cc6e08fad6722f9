//! The generic graph-search loop shared by all three strategies.
//!
//! Breadth-first, depth-first and A* differ only in their frontier; the
//! traversal itself is one function. A dequeued node already present in the
//! visited set is discarded and the loop continues; otherwise it is marked
//! visited, goal-tested, and expanded. The run ends when a goal board is
//! dequeued (a [`Solution`] is reconstructed from the parent chain) or when
//! the frontier empties, which is a normal termination and yields no
//! solution.

use crate::puzzle::board::Board;
use crate::puzzle::frontier::{BestFirstFrontier, FifoFrontier, Frontier, LifoFrontier};
use crate::puzzle::moves::Direction;
use crate::puzzle::node::{Arena, NodeId};
use crate::puzzle::telemetry::MemorySampler;
use core::fmt;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Counters and measurements collected over one search run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStats {
    /// Nodes that passed the visited check and had children generated.
    pub nodes_expanded: usize,
    /// Nodes created in the arena, root excluded.
    pub nodes_generated: usize,
    /// Largest cost among all enqueued nodes.
    pub max_search_depth: u32,
    /// Largest frontier length observed after an expansion.
    pub peak_frontier: usize,
    /// Wall time of the run.
    pub running_time: Duration,
    /// Peak allocator growth over the run, in MiB.
    pub max_ram_usage: f64,
}

/// A goal-reaching move sequence and its length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Moves from the initial board to the goal, in order.
    pub path: Vec<Direction>,
    /// Number of moves, equal to `path.len()`.
    pub cost: u32,
}

/// Runs the shared traversal loop with the given frontier.
///
/// Returns `Some(Solution)` when a goal board is dequeued and `None` when the
/// frontier exhausts first; statistics are returned either way.
pub fn search<F: Frontier>(initial: Board, mut frontier: F) -> (Option<Solution>, SearchStats) {
    let start = Instant::now();
    let mut sampler = MemorySampler::start();
    let mut stats = SearchStats::default();

    let mut arena = Arena::new();
    let mut visited: FxHashSet<Board> = FxHashSet::default();

    let root = arena.root(initial);
    frontier.push(root, &arena);

    let mut outcome = None;
    while let Some(id) = frontier.pop(&arena) {
        if !visited.insert(arena[id].board.clone()) {
            continue;
        }

        if arena[id].board.is_goal() {
            outcome = Some(reconstruct(&arena, id));
            break;
        }

        let moves = arena[id].board.successors();
        stats.nodes_expanded += 1;

        let children: SmallVec<[NodeId; 4]> = moves
            .into_iter()
            .map(|(direction, board)| arena.child(id, direction, board))
            .collect();
        stats.nodes_generated += children.len();

        // Children of one expansion all share the same cost, so one admitted
        // child is enough to account for the depth.
        let admitted = frontier.push_children(&children, &arena);
        if admitted > 0 {
            stats.max_search_depth = stats.max_search_depth.max(arena[children[0]].cost);
        }

        stats.peak_frontier = stats.peak_frontier.max(frontier.len());
        sampler.sample();
    }

    stats.running_time = start.elapsed();
    stats.max_ram_usage = sampler.peak_delta_mib();
    (outcome, stats)
}

/// Walks the parent chain back to the root and reverses it into the forward
/// move sequence.
fn reconstruct(arena: &Arena, goal: NodeId) -> Solution {
    let mut path = Vec::with_capacity(arena[goal].cost as usize);
    let mut current = goal;
    while let Some((parent, action)) = arena[current].parent {
        path.push(action);
        current = parent;
    }
    path.reverse();

    Solution {
        path,
        cost: arena[goal].cost,
    }
}

/// Search strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Breadth-first search: optimal, memory-hungry.
    Bfs,
    /// Depth-first search: cheap on frontier memory, not optimal.
    Dfs,
    /// A* with the Manhattan-distance heuristic: optimal, expands few nodes.
    AStar,
}

impl Strategy {
    /// Runs this strategy on `initial`.
    #[must_use]
    pub fn run(self, initial: Board) -> (Option<Solution>, SearchStats) {
        match self {
            Self::Bfs => search(initial, FifoFrontier::new()),
            Self::Dfs => search(initial, LifoFrontier::new()),
            Self::AStar => search(initial, BestFirstFrontier::new()),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::AStar => "ast",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "ast" => Ok(Self::AStar),
            other => Err(format!(
                "unknown strategy '{other}', expected one of bfs, dfs, ast"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(initial: &Board, path: &[Direction]) -> Board {
        path.iter().fold(initial.clone(), |board, &direction| {
            board.slide(direction).unwrap()
        })
    }

    fn three_move_board() -> Board {
        Board::new(vec![1, 2, 5, 3, 4, 0, 6, 7, 8], 3).unwrap()
    }

    #[test]
    fn test_astar_solves_three_move_board() {
        let board = three_move_board();
        let (solution, stats) = Strategy::AStar.run(board.clone());
        let solution = solution.unwrap();

        assert_eq!(solution.cost, 3);
        assert_eq!(solution.path.len(), 3);
        assert!(replay(&board, &solution.path).is_goal());
        assert!(stats.nodes_expanded >= 3);
        assert!(stats.max_search_depth >= solution.cost);
    }

    #[test]
    fn test_bfs_finds_same_cost_as_astar() {
        let board = three_move_board();
        let (bfs, _) = Strategy::Bfs.run(board.clone());
        let (astar, _) = Strategy::AStar.run(board);
        assert_eq!(bfs.unwrap().cost, astar.unwrap().cost);
    }

    #[test]
    fn test_dfs_cost_at_least_optimal() {
        let board = three_move_board();
        let (solution, _) = Strategy::Dfs.run(board.clone());
        let solution = solution.unwrap();

        assert!(solution.cost >= 3);
        assert!(replay(&board, &solution.path).is_goal());
    }

    #[test]
    fn test_goal_input_yields_empty_path() {
        for strategy in [Strategy::Bfs, Strategy::Dfs, Strategy::AStar] {
            let (solution, stats) = strategy.run(Board::goal(3));
            let solution = solution.unwrap();
            assert_eq!(solution.cost, 0);
            assert!(solution.path.is_empty());
            assert_eq!(stats.nodes_expanded, 0);
        }
    }

    #[test]
    fn test_runs_are_deterministic() {
        let board = three_move_board();
        for strategy in [Strategy::Bfs, Strategy::Dfs, Strategy::AStar] {
            let (first, _) = strategy.run(board.clone());
            let (second, _) = strategy.run(board.clone());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_two_by_two_is_searchable() {
        // Goal after sliding Down then Right; Left then Up solves it.
        let board = Board::new(vec![2, 1, 3, 0], 2).unwrap();
        let (solution, _) = Strategy::Bfs.run(board.clone());
        let solution = solution.unwrap();
        assert_eq!(solution.cost, 2);
        assert!(replay(&board, &solution.path).is_goal());
    }

    #[test]
    fn test_unreachable_goal_exhausts_frontier() {
        // Swapping one adjacent tile pair flips the permutation parity, which
        // no sequence of blank moves can restore.
        let board = Board::new(vec![0, 2, 1, 3, 4, 5, 6, 7, 8], 3).unwrap();
        let (solution, stats) = Strategy::Bfs.run(board);
        assert!(solution.is_none());
        // The reachable component holds 9!/2 states, all of them expanded.
        assert_eq!(stats.nodes_expanded, 181_440);
    }

    #[test]
    fn test_strategy_selector_parses_case_insensitively() {
        assert_eq!("bfs".parse::<Strategy>().unwrap(), Strategy::Bfs);
        assert_eq!("DFS".parse::<Strategy>().unwrap(), Strategy::Dfs);
        assert_eq!("Ast".parse::<Strategy>().unwrap(), Strategy::AStar);
        assert!("idastar".parse::<Strategy>().is_err());
    }
}
