// src/graph/select.rs
use rand::Rng;
use statrs::statistics::Statistics;
use tracing::warn;

use crate::graph::debruijn::{DebruijnGraph, NodeId};
use crate::graph::metrics::WeightAveraging;

/// Upper bound of the uniform draw used when weights and lengths both tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreakBound {
    /// Draw from `0..len`; always a valid index.
    #[default]
    Exclusive,
    /// Legacy draw from `0..=len`. The one-past-the-end outcome is clamped
    /// to the last index and logged instead of selecting out of range.
    InclusiveClamped,
}

/// Knobs shared by every selection call site.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionPolicy {
    pub averaging: WeightAveraging,
    pub tie_break: TieBreakBound,
}

/// First index holding the maximum value.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &value) in values.iter().enumerate().skip(1) {
        if value > values[best] {
            best = i;
        }
    }
    best
}

fn sample_stdev(values: &[f64]) -> f64 {
    if values.len() > 1 {
        values.std_dev()
    } else {
        0.0
    }
}

/// Pick one winning path and delete the losers from the graph.
///
/// Selection cascade: spread in average weight decides first, then spread in
/// length, then a uniform random draw. Requires at least one candidate;
/// `candidates`, `lengths` and `weight_averages` must be parallel.
pub fn select_best_path<R: Rng>(
    graph: &mut DebruijnGraph,
    mut candidates: Vec<Vec<NodeId>>,
    lengths: &[usize],
    weight_averages: &[f64],
    delete_entry_node: bool,
    delete_sink_node: bool,
    tie_break: TieBreakBound,
    rng: &mut R,
) -> Vec<NodeId> {
    debug_assert!(!candidates.is_empty());
    debug_assert_eq!(candidates.len(), lengths.len());
    debug_assert_eq!(candidates.len(), weight_averages.len());

    let lengths_f64: Vec<f64> = lengths.iter().map(|&l| l as f64).collect();
    let stdev_weight = sample_stdev(weight_averages);
    let stdev_length = sample_stdev(&lengths_f64);

    let index = if stdev_weight != 0.0 {
        argmax(weight_averages)
    } else if stdev_length != 0.0 {
        argmax(&lengths_f64)
    } else {
        match tie_break {
            TieBreakBound::Exclusive => rng.gen_range(0..candidates.len()),
            TieBreakBound::InclusiveClamped => {
                let drawn = rng.gen_range(0..=candidates.len());
                if drawn == candidates.len() {
                    warn!(
                        "tie-break drew one past the last of {} candidates; clamping",
                        candidates.len()
                    );
                    candidates.len() - 1
                } else {
                    drawn
                }
            }
        }
    };

    let winner = candidates.remove(index);
    remove_paths(graph, &candidates, delete_entry_node, delete_sink_node);
    winner
}

/// Delete the nodes of each losing path.
///
/// Interior nodes always go; the flags decide the endpoints. Deleting a node
/// removes all its incident edges, and nodes shared between losing paths are
/// simply removed once.
pub fn remove_paths(
    graph: &mut DebruijnGraph,
    paths: &[Vec<NodeId>],
    delete_entry_node: bool,
    delete_sink_node: bool,
) {
    for path in paths {
        let doomed: &[NodeId] = if delete_entry_node && delete_sink_node {
            path
        } else if delete_entry_node {
            &path[..path.len() - 1]
        } else if delete_sink_node {
            &path[1..]
        } else if path.len() > 2 {
            &path[1..path.len() - 1]
        } else {
            &[]
        };
        for &node in doomed {
            graph.remove_node(node);
        }
    }
}
