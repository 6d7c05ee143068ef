//! The breaking scan and the numeric rules it is built from.

pub mod breaking;
pub mod demerits;

pub use self::breaking::BreakingAlgorithm;
pub use self::demerits::{
    INFINITE_RATIO, compute_adjustment_ratio, compute_demerits, compute_difference,
};
