//! The dynamic-programming frontier of the breaking scan.
//!
//! Nodes live in an arena for the whole invocation so predecessor chains stay
//! valid after a node is deactivated. Active nodes are additionally sorted into
//! lines: each line is a singly linked list threaded through `KnuthNode::next`,
//! with the head stored at slot `line * 2` and the tail at `line * 2 + 1`.
//!
//! The active nodes can be traversed with
//!
//! ```ignore
//! for line in set.start_line()..set.end_line() {
//!     for id in set.iter_line(line) {
//!         // do something with set.node(id)
//!     }
//! }
//! ```

use crate::node::{KnuthNode, NodeId};
use std::fmt::Write;

const INITIAL_LINE_SLOTS: usize = 20;

#[derive(Debug, Clone)]
pub struct ActiveNodeSet {
    arena: Vec<KnuthNode>,
    lines: Vec<Option<NodeId>>,
    active_count: usize,
    /// The lowest line that may hold active nodes.
    start_line: usize,
    /// One past the highest line that may hold active nodes.
    end_line: usize,
    /// Index of the last element of the sequence being broken, if known.
    last_position: Option<usize>,
}

impl Default for ActiveNodeSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveNodeSet {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            lines: vec![None; INITIAL_LINE_SLOTS],
            active_count: 0,
            start_line: 0,
            end_line: 0,
            last_position: None,
        }
    }

    /// A set for a sequence of `len` elements. Breaks past the last element
    /// then rank like breaks on it, see [`ActiveNodeSet::break_position`].
    pub fn for_sequence(len: usize) -> Self {
        Self {
            last_position: len.checked_sub(1),
            ..Self::new()
        }
    }

    /// Where the line of `id` ends within the sequence. The end-of-sequence
    /// break that follows an unterminated sequence counts as a break on its
    /// last element, so both compete as complete breakings.
    pub fn break_position(&self, id: NodeId) -> usize {
        let position = self.arena[id].position;
        self.last_position.map_or(position, |last| position.min(last))
    }

    /// Stores a node in the arena without activating it.
    pub fn alloc(&mut self, node: KnuthNode) -> NodeId {
        self.arena.push(node);
        self.arena.len() - 1
    }

    pub fn node(&self, id: NodeId) -> &KnuthNode {
        &self.arena[id]
    }

    /// First active node of `line`.
    pub fn head(&self, line: usize) -> Option<NodeId> {
        self.lines.get(line * 2).copied().flatten()
    }

    /// Appends `id` to the end of `line`.
    pub fn add(&mut self, line: usize, id: NodeId) {
        let head_idx = line * 2;
        if head_idx + 1 >= self.lines.len() {
            let mut len = self.lines.len().max(2);
            while head_idx + 1 >= len {
                len *= 2;
            }
            self.lines.resize(len, None);
        }
        self.arena[id].next = None;
        match self.lines[head_idx + 1] {
            Some(tail) => self.arena[tail].next = Some(id),
            None => self.lines[head_idx] = Some(id),
        }
        self.lines[head_idx + 1] = Some(id);
        self.end_line = self.end_line.max(line + 1);
        self.active_count += 1;
    }

    /// Deactivates `id`. The scan only ever removes the first node of a line;
    /// anything else is unlinked the slow way and reported.
    pub fn remove(&mut self, line: usize, id: NodeId) {
        let head_idx = line * 2;
        if self.head(line) == Some(id) {
            let next = self.arena[id].next;
            self.lines[head_idx] = next;
            if next.is_none() {
                self.lines[head_idx + 1] = None;
            }
        } else if !self.unlink_inner(line, id) {
            log::warn!("Node {} is not active on line {}", self.arena[id], line);
            return;
        }
        while self.start_line < self.end_line && self.head(self.start_line).is_none() {
            self.start_line += 1;
        }
        self.active_count -= 1;
    }

    fn unlink_inner(&mut self, line: usize, id: NodeId) -> bool {
        log::warn!(
            "Removing {} which is not the first node of line {}",
            self.arena[id],
            line
        );
        let mut cursor = self.head(line);
        while let Some(current) = cursor {
            let next = self.arena[current].next;
            if next == Some(id) {
                self.arena[current].next = self.arena[id].next;
                if self.lines[line * 2 + 1] == Some(id) {
                    self.lines[line * 2 + 1] = Some(current);
                }
                return true;
            }
            cursor = next;
        }
        false
    }

    /// Makes `id` the only active node, on its own line.
    pub(crate) fn restart(&mut self, line: usize, id: NodeId) {
        debug_assert!(self.is_empty(), "restart with {} active nodes", self.len());
        self.add(line, id);
        self.start_line = line;
        self.end_line = line + 1;
    }

    /// Number of active nodes.
    pub fn len(&self) -> usize {
        self.active_count
    }

    pub fn is_empty(&self) -> bool {
        self.active_count == 0
    }

    /// Number of nodes ever created, active or not.
    pub fn arena_len(&self) -> usize {
        self.arena.len()
    }

    pub fn start_line(&self) -> usize {
        self.start_line
    }

    pub fn end_line(&self) -> usize {
        self.end_line
    }

    pub fn iter_line(&self, line: usize) -> LineIter<'_> {
        LineIter {
            set: self,
            cursor: self.head(line),
        }
    }

    /// Every active node, by increasing line and insertion order.
    pub fn active_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (self.start_line..self.end_line).flat_map(move |line| self.iter_line(line))
    }

    /// Renders the active nodes for trace logging.
    pub fn dump(&self, prepend: &str) -> String {
        let mut out = String::from("[\n");
        for id in self.active_nodes() {
            let _ = writeln!(out, "{prepend}\t{},", self.arena[id]);
        }
        out.push_str(prepend);
        out.push(']');
        out
    }
}

pub struct LineIter<'a> {
    set: &'a ActiveNodeSet,
    cursor: Option<NodeId>,
}

impl Iterator for LineIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        self.cursor = self.set.arena[id].next;
        Some(id)
    }
}
