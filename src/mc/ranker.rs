// src/mc/ranker.rs
//! Fixed-capacity ranking of results by confidence radius.
//!
//! Each lane maintains its own local list during the parallel phase, so
//! no offer ever contends with another lane; the lane-local lists are
//! merged in lane order once all lanes have joined. The merge costs
//! O(lanes * K^2), negligible for small constant K.

use crate::input::OptionRecord;
use crate::mc::kernel::SimulationResult;

/// One ranked result: the option and its Monte Carlo estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankEntry {
    pub record: OptionRecord,
    pub result: SimulationResult,
}

/// Bounded list of the K highest-confidence-radius entries seen so far
///
/// Invariant: at most `capacity` entries, strictly descending by
/// `confidence_radius`; on a tie the earlier-inserted entry ranks higher.
#[derive(Debug, Clone)]
pub struct TopK {
    entries: Vec<RankEntry>,
    capacity: usize,
}

impl TopK {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Offer an entry; O(capacity) scan-and-shift insertion
    pub fn offer(&mut self, entry: RankEntry) {
        let radius = entry.result.confidence_radius;
        match self
            .entries
            .iter()
            .position(|e| radius > e.result.confidence_radius)
        {
            Some(position) => {
                self.entries.insert(position, entry);
                self.entries.truncate(self.capacity);
            }
            None => {
                if self.entries.len() < self.capacity {
                    self.entries.push(entry);
                }
            }
        }
    }

    /// Fold another list in, preserving ranking and tie order
    pub fn merge(&mut self, other: &TopK) {
        for entry in &other.entries {
            self.offer(*entry);
        }
    }

    pub fn as_slice(&self) -> &[RankEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<RankEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
