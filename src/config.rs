use crate::error::BreakError;
use kbreak_layout::{BreakingParameters, validate_request};
use kbreak_types::Alignment;
use serde::{Deserialize, Serialize};

/// Everything a breaking run needs besides the elements.
///
/// Serialized with camelCase keys; missing keys take their default.
///
/// ```json
/// { "lineWidth": 30000, "threshold": 2.0, "force": true, "alignment": "justify" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BreakingConfig {
    /// Target width of every line, in the unit of the element widths.
    pub line_width: i32,
    /// Largest adjustment ratio a line may have. Defaults to `1.0`.
    pub threshold: f64,
    /// Fall back to overfull or underfull lines instead of failing.
    pub force: bool,
    /// Whether flagged penalties (hyphenation points) may be used as breaks.
    /// Defaults to `true`.
    pub allow_flagged: bool,
    pub repeated_flagged_demerit: i32,
    pub incompatible_fitness_demerit: i32,
    pub looseness: i32,
    pub alignment: Alignment,
    pub alignment_last: Alignment,
}

impl Default for BreakingConfig {
    fn default() -> Self {
        let params = BreakingParameters::default();
        Self {
            line_width: 0,
            threshold: 1.0,
            force: false,
            allow_flagged: true,
            repeated_flagged_demerit: params.repeated_flagged_demerit,
            incompatible_fitness_demerit: params.incompatible_fitness_demerit,
            looseness: params.looseness,
            alignment: params.alignment,
            alignment_last: params.alignment_last,
        }
    }
}

impl BreakingConfig {
    pub fn new(line_width: i32) -> Self {
        Self {
            line_width,
            ..Default::default()
        }
    }

    /// Parses and validates a configuration.
    pub fn from_json(json: &str) -> Result<Self, BreakError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, BreakError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), BreakError> {
        validate_request(self.line_width, self.threshold)?;
        self.parameters().validate()?;
        Ok(())
    }

    /// The parameters the algorithm itself is built with.
    pub fn parameters(&self) -> BreakingParameters {
        BreakingParameters {
            repeated_flagged_demerit: self.repeated_flagged_demerit,
            incompatible_fitness_demerit: self.incompatible_fitness_demerit,
            looseness: self.looseness,
            alignment: self.alignment,
            alignment_last: self.alignment_last,
        }
    }
}
