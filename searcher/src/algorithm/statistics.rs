use std::time::Instant;

use tracing::{debug, info};

/// Running counts for a single search, logged as the search progresses.
#[derive(Debug, Clone)]
pub(crate) struct SearchStatistics {
    /// Nodes taken off the queue
    popped: usize,
    /// Nodes whose state was expanded
    expanded: usize,
    /// Child nodes pushed onto the queue
    generated: usize,
    /// Largest queue seen
    peak_frontier: usize,
    /// Log progress every this many popped nodes
    verbose: Option<usize>,
    started: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new(None)
    }
}

impl SearchStatistics {
    pub(crate) fn new(verbose: Option<usize>) -> Self {
        Self {
            popped: 0,
            expanded: 0,
            generated: 0,
            peak_frontier: 0,
            verbose: verbose.filter(|n| *n > 0),
            started: Instant::now(),
        }
    }

    pub(crate) fn popped(&mut self, frontier: usize) {
        self.popped += 1;
        self.peak_frontier = self.peak_frontier.max(frontier + 1);

        if let Some(n) = self.verbose {
            if self.popped % n == 0 {
                debug!(
                    popped = self.popped,
                    expanded = self.expanded,
                    generated = self.generated,
                    frontier,
                    "searching"
                );
            }
        }
    }

    pub(crate) fn expanded(&mut self, children: usize) {
        self.expanded += 1;
        self.generated += children;
    }

    pub(crate) fn finish(&self, outcome: &str) {
        info!(
            outcome,
            popped = self.popped,
            expanded = self.expanded,
            generated = self.generated,
            peak_frontier = self.peak_frontier,
            seconds = self.started.elapsed().as_secs_f64(),
            "search finished"
        );
    }
}
