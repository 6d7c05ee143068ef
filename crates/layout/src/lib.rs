use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Threshold must be a non-negative number, got {0}.")]
    InvalidThreshold(f64),
    #[error("Line width must not be negative, got {0}.")]
    NegativeLineWidth(i32),
    #[error("Breaking parameter `{0}` must not be negative, got {1}.")]
    InvalidParameter(&'static str, i32),
}

pub mod active_set;
pub mod algorithms;
pub mod best_records;
pub mod config;
pub mod node;
pub mod positions;
pub mod stats;
pub mod strategy;

pub use self::active_set::ActiveNodeSet;
pub use self::algorithms::{BreakingAlgorithm, INFINITE_RATIO};
pub use self::best_records::{BestRecord, BestRecords};
pub use self::config::{BreakingParameters, validate_request};
pub use self::node::{FitnessClass, KnuthNode, NodeId};
pub use self::positions::{BreakPositions, LineBreak};
pub use self::stats::ScanStatistics;
pub use self::strategy::{
    BreakCollector, BreakingStrategy, FewestDemerits, Looseness, PageBreakPosition,
};

// Re-export the element model the algorithm consumes
pub use kbreak_types::{Alignment, ElementKind, ElementSequence, INFINITE, KnuthElement};

#[cfg(test)]
mod breaking_test;
#[cfg(test)]
mod test_utils;
