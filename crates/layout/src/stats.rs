use std::fmt;

/// Counters collected over one breaking invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStatistics {
    /// Legal break points the scan considered.
    pub legal_breaks: usize,
    /// Active nodes inserted, the root excluded.
    pub nodes_created: usize,
    pub nodes_deactivated: usize,
    pub forced_restarts: usize,
    pub peak_active_nodes: usize,
}

impl ScanStatistics {
    /// Folds the counters of another invocation into this one.
    pub fn merge(&mut self, other: &ScanStatistics) {
        self.legal_breaks += other.legal_breaks;
        self.nodes_created += other.nodes_created;
        self.nodes_deactivated += other.nodes_deactivated;
        self.forced_restarts += other.forced_restarts;
        self.peak_active_nodes = self.peak_active_nodes.max(other.peak_active_nodes);
    }

    pub(crate) fn observe_active(&mut self, active: usize) {
        self.peak_active_nodes = self.peak_active_nodes.max(active);
    }
}

impl fmt::Display for ScanStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} legal breaks, {} nodes created, {} deactivated, {} forced restarts, peak {} active",
            self.legal_breaks,
            self.nodes_created,
            self.nodes_deactivated,
            self.forced_restarts,
            self.peak_active_nodes
        )
    }
}
