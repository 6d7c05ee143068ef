//! Knuth-style optimal line and page breaking.
//!
//! Producers describe their content as an [`ElementSequence`] of boxes, glues
//! and penalties. [`break_sequence`] finds the breaks that minimize total
//! demerits for a [`BreakingConfig`]; [`BatchBreaker`] does the same for many
//! sequences in parallel.
//!
//! ```ignore
//! use kbreak::{BreakingConfig, ElementSequence, break_sequence};
//!
//! let mut seq = ElementSequence::<()>::new();
//! seq.push_box(500).push_glue(10, 5, 5).push_box(500).end_paragraph();
//! let positions = break_sequence(&seq, &BreakingConfig::new(1010))?;
//! for line in &positions {
//!     println!("{}..={} ratio {}", line.start, line.end, line.adjust_ratio);
//! }
//! ```

pub mod batch;
pub mod config;
pub mod error;

pub use batch::{BatchBreaker, BatchSummary};
pub use config::BreakingConfig;
pub use error::BreakError;

pub use kbreak_executor::{Executor, ExecutorImpl, SyncExecutor};
#[cfg(feature = "rayon-executor")]
pub use kbreak_executor::RayonExecutor;
pub use kbreak_layout::{
    BreakCollector, BreakPositions, BreakingAlgorithm, BreakingParameters, BreakingStrategy,
    FewestDemerits, FitnessClass, LayoutError, LineBreak, Looseness, PageBreakPosition,
    ScanStatistics,
};
pub use kbreak_types::{
    Alignment, ElementKind, ElementSequence, INFINITE, KnuthElement, SequenceError,
};

/// Validates `sequence` and `config`, then breaks the sequence.
///
/// An infeasible breaking yields `Ok` with no lines.
pub fn break_sequence<P>(
    sequence: &ElementSequence<P>,
    config: &BreakingConfig,
) -> Result<BreakPositions, BreakError> {
    config.validate()?;
    sequence.validate()?;
    let algorithm = BreakingAlgorithm::new(config.parameters());
    let positions = algorithm.find_breaking_points(
        sequence,
        config.line_width,
        config.threshold,
        config.force,
        config.allow_flagged,
    );
    if positions.is_empty() {
        log::debug!(
            "No feasible breaking for {} elements at width {}",
            sequence.len(),
            config.line_width
        );
    }
    Ok(positions)
}
