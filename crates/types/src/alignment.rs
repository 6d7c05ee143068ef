use serde::{Deserialize, Serialize};

/// Inline-progression alignment of the lines produced from a sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Start,
    /// Centered lines keep their leading elements, so breaking starts at index 0.
    Center,
    End,
    #[default]
    Justify,
}

impl Alignment {
    pub fn is_justified(self) -> bool {
        matches!(self, Alignment::Justify)
    }
}
