pub mod alignment;
pub mod element;
pub mod sequence;

pub use alignment::Alignment;
pub use element::{ElementKind, INFINITE, KnuthElement};
pub use sequence::{ElementSequence, SequenceError, ends_with_forced_break, first_box_index};
