//! Hooks that decide which breaking wins and observe the chosen breaks.
//!
//! The scan itself is independent of its consumer. Paragraph breaking, page
//! breaking and tests each plug in a [`BreakingStrategy`] to pick the final
//! node and to collect whatever per-break data they need.

use crate::active_set::ActiveNodeSet;
use crate::node::{KnuthNode, NodeId};
use kbreak_types::{Alignment, KnuthElement};

pub trait BreakingStrategy<P> {
    /// Picks the node the breaking ends at among the nodes still active after
    /// the scan. `None` when the set is empty.
    fn filter_active_nodes(&mut self, set: &ActiveNodeSet) -> Option<NodeId>;

    /// Called once with the number of lines and the total demerits of the
    /// chosen breaking.
    fn line_count_chosen(&mut self, _total_lines: usize, _demerits: f64) {}

    /// Called for every break of the chosen breaking, last line first.
    fn break_chosen(
        &mut self,
        _node: &KnuthNode,
        _elements: &[KnuthElement<P>],
        _total_lines: usize,
    ) {
    }
}

/// The most advanced active node, ties broken by fewer demerits.
pub fn most_advanced(set: &ActiveNodeSet) -> Option<NodeId> {
    set.active_nodes().reduce(|best, id| {
        let (best_at, at) = (set.break_position(best), set.break_position(id));
        let cheaper = set.node(id).total_demerits < set.node(best).total_demerits;
        if at > best_at || (at == best_at && cheaper) {
            id
        } else {
            best
        }
    })
}

/// Keeps the optimal breaking.
#[derive(Debug, Clone, Copy, Default)]
pub struct FewestDemerits;

impl<P> BreakingStrategy<P> for FewestDemerits {
    fn filter_active_nodes(&mut self, set: &ActiveNodeSet) -> Option<NodeId> {
        most_advanced(set)
    }
}

/// Trades demerits for a line count `looseness` lines away from the optimum,
/// getting as close as the active nodes allow.
#[derive(Debug, Clone, Copy, Default)]
pub struct Looseness {
    pub looseness: i32,
}

impl Looseness {
    pub fn new(looseness: i32) -> Self {
        Self { looseness }
    }
}

impl<P> BreakingStrategy<P> for Looseness {
    fn filter_active_nodes(&mut self, set: &ActiveNodeSet) -> Option<NodeId> {
        let optimum = most_advanced(set)?;
        let optimum_line = set.node(optimum).line as i64;
        let position = set.break_position(optimum);
        let target = i64::from(self.looseness);

        let mut chosen = optimum;
        let mut delta_chosen = 0i64;
        for id in set.active_nodes() {
            // Only complete breakings compete.
            if set.break_position(id) != position {
                continue;
            }
            let node = set.node(id);
            let delta = node.line as i64 - optimum_line;
            let closer = (target <= delta && delta < delta_chosen)
                || (delta_chosen < delta && delta <= target);
            if closer {
                chosen = id;
                delta_chosen = delta;
            } else if delta == delta_chosen
                && node.total_demerits < set.node(chosen).total_demerits
            {
                chosen = id;
            }
        }
        Some(chosen)
    }
}

/// A page break reported by [`BreakCollector`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageBreakPosition {
    /// Index of the break element.
    pub position: usize,
    /// Ratio the page should be adjusted by; 0 when the governing alignment
    /// does not stretch content.
    pub adjust_ratio: f64,
    pub difference: i64,
}

/// Collects the chosen breaks front-first, the way a page breaker consumes
/// them.
#[derive(Debug, Clone, Default)]
pub struct BreakCollector {
    alignment: Alignment,
    alignment_last: Alignment,
    total_lines: usize,
    demerits: f64,
    breaks: Vec<PageBreakPosition>,
}

impl BreakCollector {
    pub fn new(alignment: Alignment, alignment_last: Alignment) -> Self {
        Self {
            alignment,
            alignment_last,
            ..Default::default()
        }
    }

    pub fn breaks(&self) -> &[PageBreakPosition] {
        &self.breaks
    }

    pub fn into_breaks(self) -> Vec<PageBreakPosition> {
        self.breaks
    }

    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    pub fn demerits(&self) -> f64 {
        self.demerits
    }
}

impl<P> BreakingStrategy<P> for BreakCollector {
    fn filter_active_nodes(&mut self, set: &ActiveNodeSet) -> Option<NodeId> {
        most_advanced(set)
    }

    fn line_count_chosen(&mut self, total_lines: usize, demerits: f64) {
        self.total_lines = total_lines;
        self.demerits = demerits;
        self.breaks.clear();
        self.breaks.reserve(total_lines);
    }

    fn break_chosen(&mut self, node: &KnuthNode, elements: &[KnuthElement<P>], total_lines: usize) {
        let alignment = if node.line < total_lines {
            self.alignment
        } else {
            self.alignment_last
        };
        let adjust_ratio = if alignment.is_justified() || node.adjust_ratio < 0.0 {
            node.adjust_ratio
        } else {
            0.0
        };
        log::debug!(
            "Page break at {} difference={} ratio={}",
            node.position,
            node.difference,
            adjust_ratio
        );
        // Breaks arrive last first.
        self.breaks.insert(
            0,
            PageBreakPosition {
                position: node.position.min(elements.len().saturating_sub(1)),
                adjust_ratio,
                difference: node.difference,
            },
        );
    }
}
