// src/graph/metrics.rs
use ahash::AHashSet;
use statrs::statistics::Statistics;

use crate::error::AssemblyError;
use crate::graph::debruijn::{DebruijnGraph, NodeId};

/// Which edges participate in a path's average weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightAveraging {
    /// Every edge of the subgraph induced by the path's node set. Chord
    /// edges between non-consecutive path nodes count too; this is the
    /// calibrated default.
    #[default]
    InducedSubgraph,
    /// Only the edges traversed consecutively along the path.
    Consecutive,
}

/// Number of nodes in the path.
pub fn path_length(path: &[NodeId]) -> usize {
    path.len()
}

/// Arithmetic mean of the edge weights in scope for `path`.
///
/// Errors if no edge is in scope at all; a silent zero or NaN here would
/// corrupt every downstream selection decision.
pub fn path_average_weight(
    graph: &DebruijnGraph,
    path: &[NodeId],
    averaging: WeightAveraging,
) -> Result<f64, AssemblyError> {
    let weights: Vec<f64> = match averaging {
        WeightAveraging::InducedSubgraph => {
            let members: AHashSet<NodeId> = path.iter().copied().collect();
            let mut weights = Vec::new();
            for &from in &members {
                for to in graph.successors(from) {
                    if !members.contains(&to) {
                        continue;
                    }
                    if let Some(weight) = graph.edge_weight(from, to) {
                        weights.push(f64::from(weight));
                    }
                }
            }
            weights
        }
        WeightAveraging::Consecutive => path
            .windows(2)
            .filter_map(|pair| graph.edge_weight(pair[0], pair[1]))
            .map(f64::from)
            .collect(),
    };

    if weights.is_empty() {
        return Err(AssemblyError::EmptyPathSubgraph);
    }
    Ok(Statistics::mean(&weights))
}
