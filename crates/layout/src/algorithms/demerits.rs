use crate::config::BreakingParameters;
use crate::node::{FitnessClass, KnuthNode};
use kbreak_types::ElementKind;

/// Ratio reported for a line that would need to stretch or shrink glue it
/// does not have.
pub const INFINITE_RATIO: f64 = 1000.0;

/// Target width minus the natural width of the line from `node` to a break at
/// `element`. A penalty contributes its own width, e.g. a hyphen.
///
/// Positive values mean the line has room left, negative values that it
/// overflows. Computed in `i64`: running totals of a long sequence outgrow
/// `i32`.
pub fn compute_difference(
    line_width: i32,
    total_width: i64,
    node: &KnuthNode,
    element: &ElementKind,
) -> i64 {
    let mut actual_width = total_width - node.total_width;
    if element.is_penalty() {
        actual_width += i64::from(element.width());
    }
    i64::from(line_width) - actual_width
}

/// How much of the available elasticity a line must use to absorb
/// `difference`.
///
/// * `0`: the line has exactly the right width.
/// * `-1..0`: the line is too wide but fits by shrinking glue.
/// * `0..1`: the line is too narrow but fits by stretching glue.
/// * `> 1`: the glue has to stretch beyond its nominal stretchability.
pub fn compute_adjustment_ratio(
    difference: i64,
    available_stretch: i64,
    available_shrink: i64,
) -> f64 {
    if difference > 0 {
        if available_stretch > 0 {
            difference as f64 / available_stretch as f64
        } else {
            INFINITE_RATIO
        }
    } else if difference < 0 {
        if available_shrink > 0 {
            difference as f64 / available_shrink as f64
        } else {
            -INFINITE_RATIO
        }
    } else {
        0.0
    }
}

/// Total demerits of reaching a break at `element` from `node`.
///
/// `node_flagged` says whether the element at `node.position` is a flagged
/// penalty.
pub fn compute_demerits(
    params: &BreakingParameters,
    node: &KnuthNode,
    element: &ElementKind,
    node_flagged: bool,
    fitness: FitnessClass,
    r: f64,
) -> f64 {
    let mut f = r.abs();
    f = 1.0 + 100.0 * f * f * f;
    let mut demerits = if element.is_penalty() && element.penalty() >= 0 {
        f += f64::from(element.penalty());
        f * f
    } else if element.is_penalty() && !element.is_forced_break() {
        let penalty = f64::from(element.penalty());
        f * f - penalty * penalty
    } else {
        f * f
    };
    if element.is_flagged() && node_flagged {
        demerits += f64::from(params.repeated_flagged_demerit);
    }
    if !fitness.is_compatible_with(node.fitness) {
        demerits += f64::from(params.incompatible_fitness_demerit);
    }
    demerits + node.total_demerits
}
