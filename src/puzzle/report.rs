//! The results report written after a successful search.
//!
//! The report is a fixed seven-field record; `search_depth` always equals
//! `cost_of_path` and both time and memory carry eight decimal places. No
//! report exists for a run that exhausts its frontier.

use crate::puzzle::search::{SearchStats, Solution};
use itertools::Itertools;
use std::io;
use std::path::Path;

/// Borrowing view over one successful run, ready to render.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub solution: &'a Solution,
    pub stats: &'a SearchStats,
}

impl Report<'_> {
    /// Renders the record as the text that lands in the output file.
    #[must_use]
    pub fn render(&self) -> String {
        let path = if self.solution.path.is_empty() {
            "[]".to_string()
        } else {
            format!("['{}']", self.solution.path.iter().join("', '"))
        };

        format!(
            "path_to_goal: {path}\n\
             cost_of_path: {cost}\n\
             nodes_expanded: {expanded}\n\
             search_depth: {cost}\n\
             max_search_depth: {max_depth}\n\
             running_time: {time:.8}\n\
             max_ram_usage: {ram:.8}\n",
            cost = self.solution.cost,
            expanded = self.stats.nodes_expanded,
            max_depth = self.stats.max_search_depth,
            time = self.stats.running_time.as_secs_f64(),
            ram = self.stats.max_ram_usage,
        )
    }

    /// Writes the rendered record to `path`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from creating or writing the file.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        std::fs::write(path, self.render())
    }
}
