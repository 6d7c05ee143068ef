//! Total-fit breaking of an element sequence into lines.
//!
//! The scan walks the sequence once, keeping a set of active nodes: breaks from
//! which a line could still start. At every legal break each active node is
//! tried as the start of a line ending there. Nodes that can no longer start a
//! feasible line are deactivated, and for each fitness class the cheapest
//! feasible line becomes a new active node. When the set runs dry and the
//! caller asked for a forced breaking, the scan restarts from the best
//! infeasible candidate it saw.

use crate::active_set::ActiveNodeSet;
use crate::algorithms::demerits::{compute_adjustment_ratio, compute_demerits, compute_difference};
use crate::best_records::{BestRecord, BestRecords};
use crate::config::BreakingParameters;
use crate::node::{FitnessClass, KnuthNode, NodeId};
use crate::positions::BreakPositions;
use crate::stats::ScanStatistics;
use crate::strategy::{BreakingStrategy, FewestDemerits, Looseness};
use kbreak_types::{
    Alignment, ElementKind, INFINITE, KnuthElement, ends_with_forced_break, first_box_index,
};

/// Break after the last element of a sequence that does not end with a forced
/// break.
const TERMINAL_BREAK: ElementKind = ElementKind::Penalty {
    width: 0,
    penalty: -INFINITE,
    flagged: false,
};

/// Finds optimal breakings. Holds only parameters, so one value can serve any
/// number of sequences and threads.
#[derive(Debug, Clone, Default)]
pub struct BreakingAlgorithm {
    params: BreakingParameters,
}

impl BreakingAlgorithm {
    pub fn new(params: BreakingParameters) -> Self {
        Self { params }
    }

    pub fn parameters(&self) -> &BreakingParameters {
        &self.params
    }

    /// Breaks `elements` into lines of `line_width`, keeping every line's
    /// adjustment ratio within `[-1, threshold]`.
    ///
    /// Returns no lines when that is impossible and `force` is off. With
    /// `force` on, the scan restarts from the least bad overfull or underfull
    /// line instead and always yields at least one line for a non-empty
    /// sequence. Flagged penalties are only break candidates when
    /// `allow_flagged` is set.
    pub fn find_breaking_points<P>(
        &self,
        elements: &[KnuthElement<P>],
        line_width: i32,
        threshold: f64,
        force: bool,
        allow_flagged: bool,
    ) -> BreakPositions {
        if self.params.looseness != 0 {
            let mut strategy = Looseness::new(self.params.looseness);
            self.find_breaking_points_with(
                elements,
                line_width,
                threshold,
                force,
                allow_flagged,
                &mut strategy,
            )
        } else {
            self.find_breaking_points_with(
                elements,
                line_width,
                threshold,
                force,
                allow_flagged,
                &mut FewestDemerits,
            )
        }
    }

    /// Like [`BreakingAlgorithm::find_breaking_points`], with `strategy`
    /// choosing the winning node and observing the chosen breaks.
    pub fn find_breaking_points_with<P, S>(
        &self,
        elements: &[KnuthElement<P>],
        line_width: i32,
        threshold: f64,
        force: bool,
        allow_flagged: bool,
        strategy: &mut S,
    ) -> BreakPositions
    where
        S: BreakingStrategy<P> + ?Sized,
    {
        if elements.is_empty() {
            return BreakPositions::default();
        }
        let mut scan =
            Scan::new(&self.params, elements, line_width, threshold, force, allow_flagged);
        if !scan.run() {
            return BreakPositions::empty(scan.stats);
        }

        if log::log_enabled!(log::Level::Trace) {
            log::trace!("Main loop completed {}", scan.set.len());
            log::trace!("Active nodes={}", scan.set.dump(""));
        }

        let Some(winner) = strategy.filter_active_nodes(&scan.set) else {
            log::debug!("No active node left after the scan");
            return BreakPositions::empty(scan.stats);
        };
        let best = scan.set.node(winner);
        let total_lines = best.line;
        log::trace!("Best demerits {} for sequence size {}", best.total_demerits, elements.len());
        strategy.line_count_chosen(total_lines, best.total_demerits);

        let mut cursor = Some(winner);
        for _ in 0..total_lines {
            let Some(id) = cursor else { break };
            let node = scan.set.node(id);
            strategy.break_chosen(node, elements, total_lines);
            cursor = node.previous;
        }

        BreakPositions::from_chain(&scan.set, winner, elements.len(), scan.stats)
    }
}

/// State of one invocation.
struct Scan<'a, P> {
    params: &'a BreakingParameters,
    elements: &'a [KnuthElement<P>],
    line_width: i32,
    threshold: f64,
    force: bool,
    allow_flagged: bool,
    /// Scan length; one past the sequence when the terminal break is virtual.
    end: usize,
    set: ActiveNodeSet,
    best: BestRecords,
    total_width: i64,
    total_stretch: i64,
    total_shrink: i64,
    last_too_long: Option<KnuthNode>,
    last_too_short: Option<KnuthNode>,
    last_deactivated: Option<NodeId>,
    stats: ScanStatistics,
}

impl<'a, P> Scan<'a, P> {
    fn new(
        params: &'a BreakingParameters,
        elements: &'a [KnuthElement<P>],
        line_width: i32,
        threshold: f64,
        force: bool,
        allow_flagged: bool,
    ) -> Self {
        let terminated = ends_with_forced_break(elements)
            && (allow_flagged || !elements.last().is_some_and(KnuthElement::is_flagged));
        let end = if terminated { elements.len() } else { elements.len() + 1 };
        Self {
            params,
            elements,
            line_width,
            threshold,
            force,
            allow_flagged,
            end,
            set: ActiveNodeSet::for_sequence(elements.len()),
            best: BestRecords::new(),
            total_width: 0,
            total_stretch: 0,
            total_shrink: 0,
            last_too_long: None,
            last_too_short: None,
            last_deactivated: None,
            stats: ScanStatistics::default(),
        }
    }

    fn element(&self, idx: usize) -> ElementKind {
        self.elements.get(idx).map_or(TERMINAL_BREAK, |e| e.kind)
    }

    fn is_terminal(&self, idx: usize) -> bool {
        idx == self.elements.len()
    }

    /// Runs the scan. Returns false when no breaking exists and forcing is off.
    fn run(&mut self) -> bool {
        let first_box = if self.params.alignment == Alignment::Center {
            0
        } else {
            first_box_index(self.elements).unwrap_or(0)
        };
        let root = self.set.alloc(KnuthNode::root(first_box));
        self.set.add(0, root);
        self.stats.observe_active(self.set.len());
        log::trace!("Looping over {} elements", self.elements.len());

        let mut last_forced = first_box;
        let mut previous_is_box = false;
        let mut i = first_box;
        while i < self.end {
            let element = self.element(i);
            match element {
                ElementKind::Box { width } => {
                    self.total_width += i64::from(width);
                    previous_is_box = true;
                }
                ElementKind::Glue { width, stretch, shrink } => {
                    if previous_is_box {
                        self.consider_legal_break(&element, i);
                    }
                    self.total_width += i64::from(width);
                    self.total_stretch += i64::from(stretch);
                    self.total_shrink += i64::from(shrink);
                    previous_is_box = false;
                }
                ElementKind::Penalty { penalty, flagged, .. } => {
                    if penalty < INFINITE && (self.allow_flagged || !flagged) {
                        self.consider_legal_break(&element, i);
                    }
                    previous_is_box = false;
                }
            }

            if self.set.is_empty() {
                if !self.force {
                    log::debug!(
                        "Could not find a set of breaking points {} (last deactivated {})",
                        self.threshold,
                        self.last_deactivated
                            .map_or_else(|| "none".to_string(), |id| self.set.node(id).to_string())
                    );
                    return false;
                }
                let Some(position) = self.restart(last_forced) else {
                    log::error!("No node to restart from at element {i}");
                    return false;
                };
                last_forced = position;
                i = position;
                previous_is_box = false;
            }
            i += 1;
        }
        true
    }

    /// Makes the best forced candidate the only active node and returns its
    /// position.
    fn restart(&mut self, last_forced: usize) -> Option<usize> {
        let too_short = self.last_too_short.take();
        let too_long = self.last_too_long.take();
        let mut node = match (too_short, too_long) {
            (Some(short), _) if short.position != last_forced => short,
            (short, long) => long.or(short)?,
        };
        node.total_demerits = 0.0;
        node.forced = true;
        log::debug!("Restarting at node {node}");

        self.total_width = node.total_width;
        self.total_stretch = node.total_stretch;
        self.total_shrink = node.total_shrink;
        let (line, position) = (node.line, node.position);
        let id = self.set.alloc(node);
        self.set.restart(line, id);
        self.stats.forced_restarts += 1;
        self.stats.observe_active(self.set.len());
        Some(position)
    }

    fn consider_legal_break(&mut self, element: &ElementKind, idx: usize) {
        self.stats.legal_breaks += 1;
        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "Feasible breakpoint at {} {}+{}-{}",
                idx,
                self.total_width,
                self.total_stretch,
                self.total_shrink
            );
            log::trace!("\tCurrent active node list: {} {}", self.set.len(), self.set.dump("\t"));
        }

        self.last_deactivated = None;
        self.last_too_long = None;
        let mut line = self.set.start_line();
        // Lines added by a flush are visited too; their nodes sit at `idx`.
        while line < self.set.end_line() {
            let mut cursor = self.set.head(line);
            while let Some(id) = cursor {
                let node = self.set.node(id).clone();
                cursor = node.next;
                if node.position == idx {
                    continue;
                }
                // A break on the last element would leave an empty line.
                if self.is_terminal(idx) && node.line > 0 && node.position + 1 == idx {
                    continue;
                }
                self.try_line(&node, id, line, element, idx);
            }
            self.add_breaks(line, idx);
            line += 1;
        }
    }

    /// Evaluates the line from `node` to the break at `idx`.
    fn try_line(
        &mut self,
        node: &KnuthNode,
        id: NodeId,
        line: usize,
        element: &ElementKind,
        idx: usize,
    ) {
        let difference = compute_difference(self.line_width, self.total_width, node, element);
        let available_shrink = self.total_shrink - node.total_shrink;
        let available_stretch = self.total_stretch - node.total_stretch;
        let r = compute_adjustment_ratio(difference, available_stretch, available_shrink);
        log::trace!("\tr={r} line={line}");

        // Overfull beyond shrinking, or nothing may cross a forced break.
        if r < -1.0 || element.is_forced_break() {
            log::trace!("Removing {node}");
            self.set.remove(line, id);
            self.stats.nodes_deactivated += 1;
            self.track_deactivated(id);
        }

        if r >= -1.0 && r <= self.threshold {
            let fitness = FitnessClass::from_ratio(r);
            let demerits = self.demerits(node, element, fitness, r);
            log::trace!("\tDemerits={demerits} Fitness class={fitness:?}");
            if demerits < self.best.demerits(fitness) {
                self.best.add_record(
                    fitness,
                    BestRecord {
                        demerits,
                        node: id,
                        adjust_ratio: r,
                        difference,
                        available_shrink,
                        available_stretch,
                    },
                );
                self.last_too_short = None;
            }
        }

        if self.force && (r <= -1.0 || r > self.threshold) {
            let fitness = FitnessClass::from_ratio(r);
            let demerits = self.demerits(node, element, fitness, r);
            let candidate = KnuthNode {
                position: idx,
                line: line + 1,
                fitness,
                total_width: self.total_width,
                total_stretch: self.total_stretch,
                total_shrink: self.total_shrink,
                adjust_ratio: r,
                available_shrink,
                available_stretch,
                difference,
                total_demerits: demerits,
                previous: Some(id),
                next: None,
                forced: false,
            };
            if r <= -1.0 {
                if self.last_too_long.as_ref().is_none_or(|n| demerits < n.total_demerits) {
                    log::trace!("Picking tooLong {candidate}");
                    self.last_too_long = Some(candidate);
                }
            } else if self.last_too_short.as_ref().is_none_or(|n| demerits <= n.total_demerits) {
                log::trace!("Picking tooShort {candidate}");
                self.last_too_short = Some(candidate);
            }
        }
    }

    fn demerits(
        &self,
        node: &KnuthNode,
        element: &ElementKind,
        fitness: FitnessClass,
        r: f64,
    ) -> f64 {
        let node_flagged = self.element(node.position).is_flagged();
        compute_demerits(self.params, node, element, node_flagged, fitness, r)
    }

    fn track_deactivated(&mut self, id: NodeId) {
        let replace = match self.last_deactivated {
            None => true,
            Some(last) => {
                let (last, node) = (self.set.node(last), self.set.node(id));
                node.position > last.position
                    || (node.position == last.position && node.total_demerits < last.total_demerits)
            }
        };
        if replace {
            self.last_deactivated = Some(id);
        }
    }

    /// Turns the best records into active nodes on `line + 1`.
    fn add_breaks(&mut self, line: usize, idx: usize) {
        if !self.best.has_records() {
            return;
        }

        // Glue and penalties after the break vanish at the start of the next
        // line, so they count toward the new node's totals.
        let mut new_width = self.total_width;
        let mut new_stretch = self.total_stretch;
        let mut new_shrink = self.total_shrink;
        for (j, e) in self.elements.iter().enumerate().skip(idx) {
            match e.kind {
                ElementKind::Box { .. } => break,
                ElementKind::Glue { width, stretch, shrink } => {
                    new_width += i64::from(width);
                    new_stretch += i64::from(stretch);
                    new_shrink += i64::from(shrink);
                }
                kind if kind.is_forced_break() && j != idx => break,
                ElementKind::Penalty { .. } => {}
            }
        }

        let limit = self.best.min_demerits() + f64::from(self.params.incompatible_fitness_demerit);
        for (fitness, record) in self.best.iter() {
            if !record.demerits.is_finite() || record.demerits > limit {
                continue;
            }
            let node = KnuthNode {
                position: idx,
                line: line + 1,
                fitness,
                total_width: new_width,
                total_stretch: new_stretch,
                total_shrink: new_shrink,
                adjust_ratio: record.adjust_ratio,
                available_shrink: record.available_shrink,
                available_stretch: record.available_stretch,
                difference: record.difference,
                total_demerits: record.demerits,
                previous: Some(record.node),
                next: None,
                forced: false,
            };
            log::trace!("\tInsert new break in list of {}: {}", self.set.len(), node);
            let id = self.set.alloc(node);
            self.set.add(line + 1, id);
            self.stats.nodes_created += 1;
        }
        self.stats.observe_active(self.set.len());
        self.best.reset();
    }
}
