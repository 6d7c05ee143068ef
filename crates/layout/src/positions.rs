//! Per-line results of a breaking run.

use crate::active_set::ActiveNodeSet;
use crate::node::{FitnessClass, KnuthNode, NodeId};
use crate::stats::ScanStatistics;

/// One line of the chosen breaking. `start` and `end` are inclusive element
/// indices.
#[derive(Debug, Clone, PartialEq)]
pub struct LineBreak {
    pub start: usize,
    pub end: usize,
    pub adjust_ratio: f64,
    pub difference: i64,
    pub fitness: FitnessClass,
    pub available_stretch: i64,
    pub available_shrink: i64,
    /// Demerits accumulated up to and including this line.
    pub total_demerits: f64,
    /// The line was closed by a forced restart and may violate the threshold.
    pub forced: bool,
}

/// The lines of a breaking, first to last. No lines means no feasible
/// breaking was found.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreakPositions {
    lines: Vec<LineBreak>,
    statistics: ScanStatistics,
}

impl BreakPositions {
    pub fn new(lines: Vec<LineBreak>, statistics: ScanStatistics) -> Self {
        Self { lines, statistics }
    }

    pub fn empty(statistics: ScanStatistics) -> Self {
        Self {
            lines: Vec::new(),
            statistics,
        }
    }

    /// Rebuilds the lines ending at `winner` by following its predecessors.
    /// `len` is the length of the element sequence; a break after its last
    /// element reports the last element as its end.
    pub(crate) fn from_chain(
        set: &ActiveNodeSet,
        winner: NodeId,
        len: usize,
        statistics: ScanStatistics,
    ) -> Self {
        let line_count = set.node(winner).line;
        let mut chain: Vec<&KnuthNode> = Vec::with_capacity(line_count);
        let mut cursor = Some(winner);
        for _ in 0..line_count {
            let Some(id) = cursor else { break };
            let node = set.node(id);
            chain.push(node);
            cursor = node.previous;
        }
        chain.reverse();

        let last = len.saturating_sub(1);
        let lines = chain
            .iter()
            .enumerate()
            .map(|(line, node)| {
                let start = match node.previous {
                    Some(prev) if line > 0 => set.node(prev).position + 1,
                    _ => 0,
                };
                LineBreak {
                    start,
                    end: node.position.min(last),
                    adjust_ratio: node.adjust_ratio,
                    difference: node.difference,
                    fitness: node.fitness,
                    available_stretch: node.available_stretch,
                    available_shrink: node.available_shrink,
                    total_demerits: node.total_demerits,
                    forced: node.forced,
                }
            })
            .collect();
        Self { lines, statistics }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, line: usize) -> Option<&LineBreak> {
        self.lines.get(line)
    }

    pub fn lines(&self) -> &[LineBreak] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineBreak> {
        self.lines.iter()
    }

    /// First element of `line`.
    ///
    /// # Panics
    ///
    /// If `line >= self.line_count()`, as do the other per-line accessors.
    pub fn start(&self, line: usize) -> usize {
        self.lines[line].start
    }

    /// Last element of `line`, the break itself.
    pub fn end(&self, line: usize) -> usize {
        self.lines[line].end
    }

    pub fn adjust_ratio(&self, line: usize) -> f64 {
        self.lines[line].adjust_ratio
    }

    pub fn difference(&self, line: usize) -> i64 {
        self.lines[line].difference
    }

    /// Demerits of the whole breaking, 0 when there are no lines.
    pub fn total_demerits(&self) -> f64 {
        self.lines.last().map_or(0.0, |l| l.total_demerits)
    }

    pub fn statistics(&self) -> &ScanStatistics {
        &self.statistics
    }
}

impl<'a> IntoIterator for &'a BreakPositions {
    type Item = &'a LineBreak;
    type IntoIter = std::slice::Iter<'a, LineBreak>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
