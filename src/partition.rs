// src/partition.rs
//! Work partitioner: contiguous, equal-size option ranges, one per lane.

use std::ops::Range;

/// Slice `total` options into `lanes` contiguous half-open ranges of
/// length `floor(total / lanes)` each.
///
/// The trailing `total mod lanes` options are never assigned to any lane;
/// this truncation matches the reference workload and is reported against
/// the requested total, not the assigned one.
///
/// Pure function; `per_lane >= 1` is enforced by startup validation, not
/// here.
pub fn partition(total: usize, lanes: usize) -> Vec<Range<usize>> {
    let per_lane = total / lanes;
    (0..lanes)
        .map(|lane| lane * per_lane..(lane + 1) * per_lane)
        .collect()
}
