//! Per-fitness-class scratch for the best predecessor of the break being
//! considered.

use crate::node::{FitnessClass, NodeId};

/// The cheapest way found so far to end a line of one fitness class at the
/// current break.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestRecord {
    pub demerits: f64,
    pub node: NodeId,
    pub adjust_ratio: f64,
    pub difference: i64,
    pub available_shrink: i64,
    pub available_stretch: i64,
}

#[derive(Debug, Clone, Default)]
pub struct BestRecords {
    records: [Option<BestRecord>; 4],
    best: Option<FitnessClass>,
}

impl BestRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demerits of the record for `fitness`, infinite when there is none.
    pub fn demerits(&self, fitness: FitnessClass) -> f64 {
        self.records[fitness.index()].map_or(f64::INFINITY, |r| r.demerits)
    }

    pub fn get(&self, fitness: FitnessClass) -> Option<&BestRecord> {
        self.records[fitness.index()].as_ref()
    }

    /// Replaces the record for `fitness`. Callers only add records that beat
    /// the current one.
    pub fn add_record(&mut self, fitness: FitnessClass, record: BestRecord) {
        debug_assert!(
            record.demerits <= self.demerits(fitness),
            "best record for {:?} regressed from {} to {}",
            fitness,
            self.demerits(fitness),
            record.demerits
        );
        let demerits = record.demerits;
        self.records[fitness.index()] = Some(record);
        if self.best.is_none_or(|best| demerits < self.demerits(best)) {
            self.best = Some(fitness);
        }
    }

    pub fn has_records(&self) -> bool {
        self.best.is_some()
    }

    /// Lowest demerits over all classes.
    pub fn min_demerits(&self) -> f64 {
        self.best.map_or(f64::INFINITY, |best| self.demerits(best))
    }

    /// Records in fitness order, skipping empty classes.
    pub fn iter(&self) -> impl Iterator<Item = (FitnessClass, &BestRecord)> {
        FitnessClass::ALL
            .into_iter()
            .zip(self.records.iter())
            .filter_map(|(fitness, record)| record.as_ref().map(|r| (fitness, r)))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
