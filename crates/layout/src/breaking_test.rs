#![cfg(test)]

use crate::test_utils::{
    assert_feasible, assert_tiles_sequence, break_with, ends, init_logging, paragraph, words,
};
use crate::{
    Alignment, BreakingAlgorithm, BreakingParameters, ElementKind, ElementSequence, FitnessClass,
    KnuthElement,
};

fn three_words() -> ElementSequence {
    words(&[500, 500, 500], (10, 5, 5))
}

#[test]
fn test_empty_sequence_has_no_lines() {
    let seq: ElementSequence = ElementSequence::new();
    let positions = break_with(&seq, 1000, 1.0, true);
    assert_eq!(positions.line_count(), 0);
    assert_eq!(positions.total_demerits(), 0.0);
}

#[test]
fn test_exact_fit_costs_one_demerit() {
    let mut seq: ElementSequence = ElementSequence::new();
    seq.push_box(1000).push_forced_break();

    let positions = break_with(&seq, 1000, 1.0, false);
    assert_eq!(positions.line_count(), 1);
    assert_eq!(positions.start(0), 0);
    assert_eq!(positions.end(0), 1);
    assert_eq!(positions.adjust_ratio(0), 0.0);
    assert_eq!(positions.difference(0), 0);
    assert_eq!(positions.total_demerits(), 1.0);
    assert_eq!(positions.lines()[0].fitness, FitnessClass::Tight);
    assert!(!positions.lines()[0].forced);

    let stats = positions.statistics();
    assert_eq!(stats.legal_breaks, 1);
    assert_eq!(stats.nodes_created, 1);
    assert_eq!(stats.nodes_deactivated, 1);
    assert_eq!(stats.forced_restarts, 0);
    assert_eq!(stats.peak_active_nodes, 1);
}

#[test]
fn test_single_line_at_full_stretch() {
    let seq = three_words();
    let positions = break_with(&seq, 1530, 1.0, false);

    assert_eq!(positions.line_count(), 1);
    assert_eq!((positions.start(0), positions.end(0)), (0, 4));
    assert_eq!(positions.adjust_ratio(0), 1.0);
    assert_eq!(positions.difference(0), 10);
    assert_eq!(positions.lines()[0].fitness, FitnessClass::Loose);
    assert_eq!(positions.lines()[0].available_stretch, 10);
    assert_eq!(positions.lines()[0].available_shrink, 10);
    assert_eq!(positions.total_demerits(), 101.0 * 101.0);
}

#[test]
fn test_overfull_single_line_fails_without_force() {
    let seq = three_words();
    let positions = break_with(&seq, 1020, 1.0, false);
    assert!(positions.is_empty());
    assert_eq!(positions.statistics().nodes_deactivated, 1);
}

#[test]
fn test_only_break_out_of_range_fails_without_force() {
    let mut seq: ElementSequence = ElementSequence::new();
    seq.push_box(100).push_forced_break();
    let positions = break_with(&seq, 1000, 1.0, false);
    assert_eq!(positions.line_count(), 0);
}

#[test]
fn test_two_line_paragraph() {
    let seq = paragraph(&[100, 100, 100, 100], (10, 10, 5));
    let positions = break_with(&seq, 210, 1.0, false);

    assert_eq!(ends(&positions), vec![3, 9]);
    assert_eq!(positions.start(1), 4);
    assert_eq!(positions.adjust_ratio(0), 0.0);
    assert_eq!(positions.adjust_ratio(1), 0.0);
    assert_eq!(positions.total_demerits(), 2.0);
    assert_tiles_sequence(&seq, &positions);
}

#[test]
fn test_threshold_admits_loose_lines() {
    let seq = words(&[100, 100], (10, 10, 0));
    assert!(break_with(&seq, 300, 1.0, false).is_empty());

    let positions = break_with(&seq, 300, 10.0, false);
    assert_eq!(positions.line_count(), 1);
    assert_eq!(positions.adjust_ratio(0), 9.0);
    assert_eq!(positions.lines()[0].fitness, FitnessClass::VeryLoose);
}

#[test]
fn test_flagged_breaks_can_be_disallowed() {
    let mut seq: ElementSequence = ElementSequence::new();
    seq.push_box(200).push_penalty(0, 0, true).push_box(200);

    let algorithm = BreakingAlgorithm::default();
    let allowed = algorithm.find_breaking_points(&seq, 200, 1.0, false, true);
    assert_eq!(ends(&allowed), vec![1, 2]);

    let disallowed = algorithm.find_breaking_points(&seq, 200, 1.0, false, false);
    assert!(disallowed.is_empty());
}

#[test]
fn test_consecutive_flagged_breaks_cost_extra() {
    init_logging();
    let mut seq: ElementSequence = ElementSequence::new();
    seq.push_box(100)
        .push_penalty(0, 0, true)
        .push_box(100)
        .push_penalty(0, 0, true)
        .push_box(100);

    let positions = BreakingAlgorithm::default().find_breaking_points(&seq, 100, 1.0, false, true);
    assert_eq!(ends(&positions), vec![1, 3, 4]);
    assert_eq!(positions.total_demerits(), 53.0);

    let lenient = BreakingAlgorithm::new(BreakingParameters {
        repeated_flagged_demerit: 0,
        ..Default::default()
    });
    let positions = lenient.find_breaking_points(&seq, 100, 1.0, false, true);
    assert_eq!(positions.total_demerits(), 3.0);
}

#[test]
fn test_leading_glue_is_skipped_unless_centered() {
    init_logging();
    let mut seq: ElementSequence = ElementSequence::new();
    seq.push_glue(50, 0, 0).push_box(100);

    let justified = BreakingAlgorithm::default().find_breaking_points(&seq, 100, 1.0, false, true);
    assert_eq!(justified.line_count(), 1);
    assert_eq!((justified.start(0), justified.end(0)), (0, 1));
    assert_eq!(justified.difference(0), 0);

    let centered = BreakingAlgorithm::new(BreakingParameters {
        alignment: Alignment::Center,
        ..Default::default()
    });
    assert!(centered.find_breaking_points(&seq, 100, 1.0, false, true).is_empty());
}

#[test]
fn test_trailing_glue_does_not_open_an_empty_line() {
    let mut seq: ElementSequence = ElementSequence::new();
    seq.push_box(100).push_glue(10, 0, 0);

    let positions = break_with(&seq, 100, 1.0, false);
    assert_eq!(positions.line_count(), 1);
    assert_eq!((positions.start(0), positions.end(0)), (0, 1));
    assert_tiles_sequence(&seq, &positions);
}

#[test]
fn test_penalty_width_counts_on_its_line() {
    let mut seq: ElementSequence = ElementSequence::new();
    seq.push_box(190).push_penalty(10, 0, false).push_box(200);

    let positions = break_with(&seq, 200, 1.0, false);
    assert_eq!(ends(&positions), vec![1, 2]);
    assert_eq!(positions.difference(0), 0);
}

#[test]
fn test_position_tokens_are_untouched() {
    let seq: ElementSequence<u32> = vec![
        KnuthElement::new(ElementKind::Box { width: 100 }, 7),
        KnuthElement::new(ElementKind::Glue { width: 10, stretch: 10, shrink: 5 }, 8),
        KnuthElement::new(ElementKind::Box { width: 100 }, 9),
    ]
    .into();
    let positions = BreakingAlgorithm::default().find_breaking_points(&seq, 210, 1.0, false, true);
    assert_eq!(positions.line_count(), 1);
    let tokens: Vec<u32> = seq.elements()[positions.start(0)..=positions.end(0)]
        .iter()
        .map(|e| *e.position())
        .collect();
    assert_eq!(tokens, vec![7, 8, 9]);
}

#[test]
fn test_long_paragraph_is_well_formed_and_deterministic() {
    let widths: Vec<i32> = (0..120).map(|i| 2_000 + (i * 7_919) % 6_000).collect();
    let seq = paragraph(&widths, (1_500, 800, 400));

    let first = break_with(&seq, 60_000, 2.0, false);
    let second = BreakingAlgorithm::new(BreakingParameters::default())
        .find_breaking_points(&seq, 60_000, 2.0, false, true);

    assert!(first.line_count() > 1);
    assert_eq!(first, second);
    assert_tiles_sequence(&seq, &first);
    assert_feasible(&first, 2.0);
    for lb in &first {
        assert!(!lb.forced);
        assert!(seq.is_legal_breakpoint(lb.end));
    }
    // Demerits only accumulate along the chain.
    let demerits: Vec<f64> = first.iter().map(|lb| lb.total_demerits).collect();
    assert!(demerits.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_many_paragraphs_accumulate_wide_totals() {
    let mut seq: ElementSequence = ElementSequence::new();
    for _ in 0..300 {
        seq.push_box(100).end_paragraph();
    }

    // 300 fill glues stretch well past i32::MAX in total.
    let positions = break_with(&seq, 100, 1.0, false);
    assert_eq!(positions.line_count(), 300);
    assert_eq!(positions.total_demerits(), 300.0);
    assert!(positions.iter().all(|lb| lb.adjust_ratio == 0.0 && !lb.forced));
    assert_tiles_sequence(&seq, &positions);
}

#[test]
fn test_huge_boxes_keep_exact_differences() {
    let seq = words(&[1_500_000_000, 1_500_000_000], (0, 0, 0));

    let positions = break_with(&seq, 1_500_000_000, 1.0, true);
    assert_eq!(ends(&positions), vec![1, 2]);
    assert_eq!(positions.difference(0), 0);
    assert_eq!(positions.difference(1), 0);
    assert_eq!(positions.total_demerits(), 2.0);
    assert!(positions.iter().all(|lb| !lb.forced));
}

#[test]
fn test_bonus_on_the_last_element_beats_the_end_of_sequence() {
    let mut seq: ElementSequence = ElementSequence::new();
    seq.push_box(100).push_glue(10, 0, 0).push_box(100).push_penalty(0, -500, false);

    // Breaking on the bonus costs 1 - 500²; running on to the end of the
    // sequence would cost 1.
    let positions = break_with(&seq, 210, 1.0, false);
    assert_eq!(positions.line_count(), 1);
    assert_eq!((positions.start(0), positions.end(0)), (0, 3));
    assert_eq!(positions.total_demerits(), -249_999.0);
}
