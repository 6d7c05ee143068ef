pub mod fixtures;

use kbreak::{
    BreakError, BreakPositions, BreakingConfig, ElementKind, ElementSequence, KnuthElement,
};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parse an element sequence from a JSON fixture
pub fn sequence_from_json(value: &Value) -> Result<ElementSequence, serde_json::Error> {
    serde_json::from_value(value.clone())
}

/// Parse and validate a configuration from a JSON fixture
pub fn config_from_json(value: &Value) -> Result<BreakingConfig, BreakError> {
    BreakingConfig::from_json(&value.to_string())
}

/// Measure a text as one box per word, tagging each box with its word index.
/// Every character is `char_width` wide.
pub fn text_paragraph(
    text: &str,
    char_width: i32,
    glue: (i32, i32, i32),
) -> ElementSequence<Option<usize>> {
    let mut seq = ElementSequence::new();
    for (i, word) in text.split_whitespace().enumerate() {
        if i > 0 {
            seq.push_glue(glue.0, glue.1, glue.2);
        }
        let width = char_width * word.chars().count() as i32;
        seq.push(KnuthElement::new(ElementKind::Box { width }, Some(i)));
    }
    seq.end_paragraph();
    seq
}

/// The words of each line, recovered from the position tokens
pub fn line_words<'a>(
    text: &'a str,
    seq: &ElementSequence<Option<usize>>,
    positions: &BreakPositions,
) -> Vec<Vec<&'a str>> {
    let words: Vec<&str> = text.split_whitespace().collect();
    positions
        .iter()
        .map(|line| {
            seq.elements()[line.start..=line.end]
                .iter()
                .filter_map(|el| el.position().map(|i| words[i]))
                .collect()
        })
        .collect()
}

/// Assert that the lines cover the sequence exactly once, in order
pub fn assert_tiles<P>(seq: &ElementSequence<P>, positions: &BreakPositions) {
    let mut next = 0;
    for (i, line) in positions.iter().enumerate() {
        assert_eq!(line.start, next, "line {i} starts at {} instead of {next}", line.start);
        assert!(line.end >= line.start, "line {i} is empty");
        next = line.end + 1;
    }
    if !positions.is_empty() {
        assert_eq!(next, seq.len(), "lines stop before the end of the sequence");
    }
}
