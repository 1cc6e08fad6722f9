#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
pub mod board;
pub mod moves;
pub mod node;
pub mod heuristic;
pub mod frontier;
pub mod search;
pub mod report;
pub mod input;
pub mod telemetry;
pub mod scramble;
