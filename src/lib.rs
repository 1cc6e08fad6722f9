//! This crate solves the sliding-tile (N-puzzle) problem: given a scrambled
//! n×n board of tiles `0..n*n` (0 is the blank), it finds a sequence of blank
//! moves reaching the ordered goal configuration.
//!
//! Three interchangeable strategies drive one generic graph-search loop:
//! breadth-first (optimal, memory-hungry), depth-first (frontier-light, not
//! optimal) and A* with the Manhattan-distance heuristic (optimal, and
//! typically far fewer expansions than breadth-first).

/// The `puzzle` module implements the board representation, move generation,
/// the search strategies and their supporting I/O.
pub mod puzzle;
