use crate::{BreakPositions, BreakingAlgorithm, BreakingParameters, ElementSequence};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Boxes of the given widths separated by glue of the given shape, without a
/// paragraph ending.
pub fn words(widths: &[i32], glue: (i32, i32, i32)) -> ElementSequence {
    let mut seq = ElementSequence::new();
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            seq.push_glue(glue.0, glue.1, glue.2);
        }
        seq.push_box(*width);
    }
    seq
}

/// Like [`words`], closed with the conventional paragraph ending.
pub fn paragraph(widths: &[i32], glue: (i32, i32, i32)) -> ElementSequence {
    let mut seq = words(widths, glue);
    seq.end_paragraph();
    seq
}

/// Breaks with default parameters, flagged breaks allowed.
pub fn break_with(
    seq: &ElementSequence,
    line_width: i32,
    threshold: f64,
    force: bool,
) -> BreakPositions {
    init_logging();
    BreakingAlgorithm::new(BreakingParameters::default())
        .find_breaking_points(seq, line_width, threshold, force, true)
}

/// Checks that consecutive lines tile the sequence without gaps.
pub fn assert_tiles_sequence(seq: &ElementSequence, positions: &BreakPositions) {
    let mut expected_start = 0;
    for (line, lb) in positions.iter().enumerate() {
        assert_eq!(lb.start, expected_start, "line {line} does not start after the previous break");
        assert!(lb.end >= lb.start, "line {line} is empty");
        expected_start = lb.end + 1;
    }
    if !positions.is_empty() {
        assert_eq!(expected_start, seq.len(), "the last line does not reach the end");
    }
}

/// Every line is within `[-1, threshold]` unless a forced restart closed it.
pub fn assert_feasible(positions: &BreakPositions, threshold: f64) {
    for (line, lb) in positions.iter().enumerate() {
        assert!(
            lb.forced || (lb.adjust_ratio >= -1.0 && lb.adjust_ratio <= threshold),
            "line {line} has ratio {} outside [-1, {threshold}]",
            lb.adjust_ratio
        );
    }
}

pub fn ends(positions: &BreakPositions) -> Vec<usize> {
    positions.iter().map(|lb| lb.end).collect()
}
