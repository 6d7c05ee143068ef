use crate::LayoutError;
use kbreak_types::Alignment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakingParameters {
    /// Demerits added when two consecutive lines both end at a flagged
    /// penalty (typically two hyphenated lines in a row).
    ///
    /// Defaults to `50`.
    pub repeated_flagged_demerit: i32,
    /// Demerits added when adjacent lines fall into fitness classes more than
    /// one step apart, e.g. a very loose line following a tight one.
    ///
    /// Also bounds which fitness classes survive a flush: only records within
    /// this distance of the best one become active nodes.
    ///
    /// Defaults to `50`.
    pub incompatible_fitness_demerit: i32,
    /// Requested deviation from the optimal number of lines.
    ///
    /// - **Positive values**: prefer breakings with more lines.
    /// - **Negative values**: prefer breakings with fewer lines.
    ///
    /// Defaults to `0`.
    pub looseness: i32,
    /// Alignment of every line but the last. `Center` disables skipping of
    /// leading non-box elements.
    ///
    /// Defaults to `Justify`.
    pub alignment: Alignment,
    /// Alignment of the last line.
    ///
    /// Defaults to `Start`.
    pub alignment_last: Alignment,
}

impl Default for BreakingParameters {
    fn default() -> Self {
        Self {
            repeated_flagged_demerit: 50,
            incompatible_fitness_demerit: 50,
            looseness: 0,
            alignment: Alignment::Justify,
            alignment_last: Alignment::Start,
        }
    }
}

impl BreakingParameters {
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.repeated_flagged_demerit < 0 {
            return Err(LayoutError::InvalidParameter(
                "repeated_flagged_demerit",
                self.repeated_flagged_demerit,
            ));
        }
        if self.incompatible_fitness_demerit < 0 {
            return Err(LayoutError::InvalidParameter(
                "incompatible_fitness_demerit",
                self.incompatible_fitness_demerit,
            ));
        }
        Ok(())
    }
}

/// Checks the per-call arguments of a breaking run.
pub fn validate_request(line_width: i32, threshold: f64) -> Result<(), LayoutError> {
    if line_width < 0 {
        return Err(LayoutError::NegativeLineWidth(line_width));
    }
    if threshold.is_nan() || threshold < 0.0 {
        return Err(LayoutError::InvalidThreshold(threshold));
    }
    Ok(())
}
