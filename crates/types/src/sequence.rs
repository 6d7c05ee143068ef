//! An ordered, indexable run of measured elements: one paragraph, column or
//! page candidate.

use crate::element::{ElementKind, INFINITE, KnuthElement};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, Index};
use thiserror::Error;

/// Stretch given to the glue closing a paragraph. Large enough to absorb any
/// realistic amount of remaining space on the last line.
pub const FILL_STRETCH: i32 = 10_000_000;

/// Index of the first box in `elements`.
pub fn first_box_index<P>(elements: &[KnuthElement<P>]) -> Option<usize> {
    elements.iter().position(KnuthElement::is_box)
}

pub fn ends_with_forced_break<P>(elements: &[KnuthElement<P>]) -> bool {
    elements.last().is_some_and(KnuthElement::is_forced_break)
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SequenceError {
    #[error("Element {index} has a negative width of {width}.")]
    NegativeWidth { index: usize, width: i32 },
    #[error("Glue at {index} has a negative stretch of {stretch}.")]
    NegativeStretch { index: usize, stretch: i32 },
    #[error("Glue at {index} has a negative shrink of {shrink}.")]
    NegativeShrink { index: usize, shrink: i32 },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "P: Serialize",
    deserialize = "P: Deserialize<'de> + Default"
))]
#[serde(transparent)]
pub struct ElementSequence<P = ()> {
    elements: Vec<KnuthElement<P>>,
}

impl<P> ElementSequence<P> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, element: KnuthElement<P>) {
        self.elements.push(element);
    }

    pub fn push_kind(&mut self, kind: ElementKind, position: P) {
        self.elements.push(KnuthElement::new(kind, position));
    }

    pub fn elements(&self) -> &[KnuthElement<P>] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<KnuthElement<P>> {
        self.elements
    }

    /// Index of the first box, or `None` if the sequence holds no box.
    pub fn first_box_index(&self) -> Option<usize> {
        first_box_index(&self.elements)
    }

    pub fn ends_with_forced_break(&self) -> bool {
        ends_with_forced_break(&self.elements)
    }

    /// Whether the element at `idx` may end a line: a penalty below
    /// [`INFINITE`], or a glue directly preceded by a box.
    pub fn is_legal_breakpoint(&self, idx: usize) -> bool {
        match self.elements.get(idx) {
            Some(el) if el.is_penalty() => el.penalty() < INFINITE,
            Some(el) if el.is_glue() => {
                idx > 0 && self.elements.get(idx - 1).is_some_and(KnuthElement::is_box)
            }
            _ => false,
        }
    }

    /// Total natural width of the elements in `range`.
    pub fn natural_width(&self, range: std::ops::Range<usize>) -> i64 {
        self.elements[range].iter().map(|el| i64::from(el.width())).sum()
    }

    /// Checks the non-negativity invariants of every element.
    pub fn validate(&self) -> Result<(), SequenceError> {
        for (index, el) in self.elements.iter().enumerate() {
            let width = el.width();
            if width < 0 {
                return Err(SequenceError::NegativeWidth { index, width });
            }
            if el.stretch() < 0 {
                return Err(SequenceError::NegativeStretch {
                    index,
                    stretch: el.stretch(),
                });
            }
            if el.shrink() < 0 {
                return Err(SequenceError::NegativeShrink {
                    index,
                    shrink: el.shrink(),
                });
            }
        }
        Ok(())
    }
}

impl<P: Default> ElementSequence<P> {
    pub fn push_box(&mut self, width: i32) -> &mut Self {
        self.push(KnuthElement::boxed(width));
        self
    }

    pub fn push_glue(&mut self, width: i32, stretch: i32, shrink: i32) -> &mut Self {
        self.push(KnuthElement::glue(width, stretch, shrink));
        self
    }

    pub fn push_penalty(&mut self, width: i32, penalty: i32, flagged: bool) -> &mut Self {
        self.push(KnuthElement::penalty_of(width, penalty, flagged));
        self
    }

    pub fn push_forced_break(&mut self) -> &mut Self {
        self.push(KnuthElement::forced_break());
        self
    }

    /// Appends the conventional paragraph ending: a forbidden break, a fill
    /// glue taking up the remaining space and a forced break.
    pub fn end_paragraph(&mut self) -> &mut Self {
        self.push_penalty(0, INFINITE, false)
            .push_glue(0, FILL_STRETCH, 0)
            .push_forced_break()
    }
}

impl<P> Deref for ElementSequence<P> {
    type Target = [KnuthElement<P>];

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl<P> Index<usize> for ElementSequence<P> {
    type Output = KnuthElement<P>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<P> From<Vec<KnuthElement<P>>> for ElementSequence<P> {
    fn from(elements: Vec<KnuthElement<P>>) -> Self {
        Self { elements }
    }
}

impl<P> FromIterator<KnuthElement<P>> for ElementSequence<P> {
    fn from_iter<I: IntoIterator<Item = KnuthElement<P>>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a, P> IntoIterator for &'a ElementSequence<P> {
    type Item = &'a KnuthElement<P>;
    type IntoIter = std::slice::Iter<'a, KnuthElement<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
