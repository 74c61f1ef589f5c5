//! Timeline unification for the two detection streams.
//!
//! The two sensors stamp their detections independently, so neither stream's
//! timestamps line up with the other's. Playback runs over a single ordered
//! index of every distinct instant seen by either sensor; each record is
//! assigned the zero-based rank of its timestamp in that index as its step.
//! This runs once at load and the result is never mutated.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::dataset::{Dataset, Source};

/// The unified, deduplicated, sorted sequence of instants.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    instants: Vec<NaiveDateTime>,
}

impl Timeline {
    /// Build the unified timeline from both datasets.
    ///
    /// Instants present in both streams collapse to a single step. If either
    /// dataset is empty there is nothing to synchronize: the timeline is
    /// empty and every playback operation becomes a no-op.
    pub fn unify(image: &Dataset, radar: &Dataset) -> Self {
        if image.is_empty() || radar.is_empty() {
            return Self::default();
        }

        let distinct: BTreeSet<NaiveDateTime> = image
            .records()
            .iter()
            .chain(radar.records())
            .map(|r| r.time)
            .collect();
        let instants: Vec<NaiveDateTime> = distinct.into_iter().collect();

        debug!(frames = instants.len(), "unified timeline");
        Self { instants }
    }

    /// Number of distinct instants, i.e. the total frame count.
    pub fn frame_count(&self) -> usize {
        self.instants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instants.is_empty()
    }

    pub fn instants(&self) -> &[NaiveDateTime] {
        &self.instants
    }

    /// The instant at a given step, if the step is in range.
    pub fn instant_at(&self, step: usize) -> Option<NaiveDateTime> {
        self.instants.get(step).copied()
    }

    /// The step assigned to an instant, if that instant is on the timeline.
    pub fn step_of(&self, instant: NaiveDateTime) -> Option<usize> {
        self.instants.binary_search(&instant).ok()
    }

    /// Attach step indices to every record of a dataset.
    ///
    /// Records whose timestamp is not on the timeline (only possible when
    /// the timeline is empty) are dropped.
    pub fn index(&self, dataset: &Dataset) -> IndexedDataset {
        let records = dataset
            .records()
            .iter()
            .filter_map(|r| {
                self.step_of(r.time).map(|step| IndexedPoint {
                    step,
                    x: r.x,
                    y: r.y,
                })
            })
            .collect();
        IndexedDataset {
            source: dataset.source(),
            records,
        }
    }
}

/// A detection with its derived step index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedPoint {
    /// Rank of the record's timestamp on the unified timeline
    pub step: usize,
    pub x: f64,
    pub y: f64,
}

/// A dataset whose records carry their step on the unified timeline.
#[derive(Debug, Clone)]
pub struct IndexedDataset {
    source: Source,
    records: Vec<IndexedPoint>,
}

impl IndexedDataset {
    pub fn source(&self) -> Source {
        self.source
    }

    pub fn records(&self) -> &[IndexedPoint] {
        &self.records
    }

    /// The current-frame subset: every record whose step equals `step`.
    pub fn frame(&self, step: usize) -> Vec<(f64, f64)> {
        self.records
            .iter()
            .filter(|p| p.step == step)
            .map(|p| (p.x, p.y))
            .collect()
    }
}
