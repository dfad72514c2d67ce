// src/graph/bubble.rs
use rand::Rng;
use tracing::debug;

use crate::error::AssemblyError;
use crate::graph::debruijn::{DebruijnGraph, NodeId};
use crate::graph::metrics::{path_average_weight, path_length};
use crate::graph::select::{select_best_path, SelectionPolicy};

/// Detect and collapse bubbles until a full scan finds none.
///
/// Each round rescans the whole graph from scratch; the round count is
/// bounded by the node count at entry, past which a graph that refuses to
/// shrink is reported instead of looping forever. Returns the number of
/// bubbles collapsed.
pub fn simplify_bubbles<R: Rng>(
    graph: &mut DebruijnGraph,
    policy: SelectionPolicy,
    rng: &mut R,
) -> Result<usize, AssemblyError> {
    let round_limit = graph.node_count() + 1;
    let mut popped = 0;

    while let Some((ancestor, convergence)) = detect_bubble(graph) {
        if popped >= round_limit {
            return Err(AssemblyError::ResolutionDidNotConverge {
                stage: "bubble",
                iterations: popped,
            });
        }
        debug!(
            "collapsing bubble between {:?} and {:?}",
            graph.fragment(ancestor),
            graph.fragment(convergence)
        );
        solve_bubble(graph, ancestor, convergence, policy, rng)?;
        popped += 1;
    }
    Ok(popped)
}

/// Scan for a bubble: a node with multiple predecessors where some
/// predecessor pair shares a lowest common ancestor.
///
/// The scan walks nodes in lexical fragment order and does not stop at the
/// first hit; the last qualifying (ancestor, convergence) pair of the scan
/// is the one reported. A pair whose ancestor is the convergence node itself
/// is ignored (a back edge, not a bubble).
fn detect_bubble(graph: &DebruijnGraph) -> Option<(NodeId, NodeId)> {
    let mut found = None;
    for node in graph.nodes_lexical() {
        let predecessors = graph.predecessors_lexical(node);
        if predecessors.len() <= 1 {
            continue;
        }
        for i in 0..predecessors.len() {
            for j in i + 1..predecessors.len() {
                if let Some(ancestor) =
                    graph.lowest_common_ancestor(predecessors[i], predecessors[j])
                {
                    if ancestor != node {
                        found = Some((ancestor, node));
                    }
                    break;
                }
            }
        }
    }
    found
}

/// Collapse one bubble: enumerate the simple paths between its defining
/// pair, score them, and keep only the best. Endpoints are preserved; only
/// interior nodes of losing paths are deleted.
pub fn solve_bubble<R: Rng>(
    graph: &mut DebruijnGraph,
    ancestor: NodeId,
    convergence: NodeId,
    policy: SelectionPolicy,
    rng: &mut R,
) -> Result<(), AssemblyError> {
    let candidates = graph.all_simple_paths(ancestor, convergence);
    if candidates.is_empty() {
        return Ok(());
    }

    let lengths: Vec<usize> = candidates.iter().map(|path| path_length(path)).collect();
    let weight_averages = candidates
        .iter()
        .map(|path| path_average_weight(graph, path, policy.averaging))
        .collect::<Result<Vec<_>, _>>()?;

    select_best_path(
        graph,
        candidates,
        &lengths,
        &weight_averages,
        false,
        false,
        policy.tie_break,
        rng,
    );
    Ok(())
}
