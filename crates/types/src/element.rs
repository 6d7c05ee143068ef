//! Measured elements: the boxes, glues and penalties fed to the breaking engine.
//!
//! All lengths are integers in the producer's unit (millipoints in practice).
//! The engine never interprets the position token carried by an element; it is
//! threaded through so the producer can map break indices back to its own
//! content.

use serde::{Deserialize, Serialize};

/// Penalty value treated as infinite. A penalty of `INFINITE` or more forbids a
/// break, a penalty of `-INFINITE` or less forces one.
pub const INFINITE: i32 = 1000;

/// The measured shape of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    /// Fixed-width content. Never a break point.
    Box { width: i32 },
    /// Elastic space. A legal break only when it directly follows a box.
    Glue {
        width: i32,
        stretch: i32,
        shrink: i32,
    },
    /// A candidate break with an associated cost.
    Penalty {
        width: i32,
        penalty: i32,
        #[serde(default)]
        flagged: bool,
    },
}

impl ElementKind {
    pub fn width(&self) -> i32 {
        match *self {
            ElementKind::Box { width }
            | ElementKind::Glue { width, .. }
            | ElementKind::Penalty { width, .. } => width,
        }
    }

    pub fn stretch(&self) -> i32 {
        match *self {
            ElementKind::Glue { stretch, .. } => stretch,
            _ => 0,
        }
    }

    pub fn shrink(&self) -> i32 {
        match *self {
            ElementKind::Glue { shrink, .. } => shrink,
            _ => 0,
        }
    }

    /// The penalty cost, or 0 for boxes and glues.
    pub fn penalty(&self) -> i32 {
        match *self {
            ElementKind::Penalty { penalty, .. } => penalty,
            _ => 0,
        }
    }

    pub fn is_box(&self) -> bool {
        matches!(self, ElementKind::Box { .. })
    }

    pub fn is_glue(&self) -> bool {
        matches!(self, ElementKind::Glue { .. })
    }

    pub fn is_penalty(&self) -> bool {
        matches!(self, ElementKind::Penalty { .. })
    }

    pub fn is_flagged(&self) -> bool {
        matches!(self, ElementKind::Penalty { flagged: true, .. })
    }

    pub fn is_forced_break(&self) -> bool {
        matches!(self, ElementKind::Penalty { penalty, .. } if *penalty <= -INFINITE)
    }

    /// True for penalties whose cost forbids breaking.
    pub fn is_forbidden_break(&self) -> bool {
        matches!(self, ElementKind::Penalty { penalty, .. } if *penalty >= INFINITE)
    }
}

/// A measured element together with the producer's opaque position token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "P: Serialize",
    deserialize = "P: Deserialize<'de> + Default"
))]
pub struct KnuthElement<P = ()> {
    #[serde(flatten)]
    pub kind: ElementKind,
    #[serde(default)]
    pub position: P,
}

impl<P> KnuthElement<P> {
    pub fn new(kind: ElementKind, position: P) -> Self {
        Self { kind, position }
    }

    pub fn width(&self) -> i32 {
        self.kind.width()
    }

    pub fn stretch(&self) -> i32 {
        self.kind.stretch()
    }

    pub fn shrink(&self) -> i32 {
        self.kind.shrink()
    }

    pub fn penalty(&self) -> i32 {
        self.kind.penalty()
    }

    pub fn is_box(&self) -> bool {
        self.kind.is_box()
    }

    pub fn is_glue(&self) -> bool {
        self.kind.is_glue()
    }

    pub fn is_penalty(&self) -> bool {
        self.kind.is_penalty()
    }

    pub fn is_flagged(&self) -> bool {
        self.kind.is_flagged()
    }

    pub fn is_forced_break(&self) -> bool {
        self.kind.is_forced_break()
    }

    pub fn position(&self) -> &P {
        &self.position
    }
}

impl<P: Default> KnuthElement<P> {
    pub fn boxed(width: i32) -> Self {
        Self::new(ElementKind::Box { width }, P::default())
    }

    pub fn glue(width: i32, stretch: i32, shrink: i32) -> Self {
        Self::new(
            ElementKind::Glue {
                width,
                stretch,
                shrink,
            },
            P::default(),
        )
    }

    pub fn penalty_of(width: i32, penalty: i32, flagged: bool) -> Self {
        Self::new(
            ElementKind::Penalty {
                width,
                penalty,
                flagged,
            },
            P::default(),
        )
    }

    pub fn forced_break() -> Self {
        Self::penalty_of(0, -INFINITE, false)
    }
}

impl<P> KnuthElement<P> {
    /// Replaces the position token, keeping the measured shape.
    pub fn with_position<Q>(self, position: Q) -> KnuthElement<Q> {
        KnuthElement {
            kind: self.kind,
            position,
        }
    }
}
