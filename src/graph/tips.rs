// src/graph/tips.rs
use rand::Rng;
use tracing::debug;

use crate::error::AssemblyError;
use crate::graph::debruijn::{DebruijnGraph, NodeId};
use crate::graph::metrics::{path_average_weight, path_length};
use crate::graph::select::{select_best_path, SelectionPolicy};

#[derive(Clone, Copy)]
enum TipSide {
    Entry,
    Exit,
}

/// Prune competing entry tips: where several source nodes feed directly into
/// the same junction, keep the best tip and strip the losing sources.
/// Returns the number of junctions resolved.
pub fn solve_entry_tips<R: Rng>(
    graph: &mut DebruijnGraph,
    policy: SelectionPolicy,
    rng: &mut R,
) -> Result<usize, AssemblyError> {
    resolve_tips(graph, TipSide::Entry, policy, rng)
}

/// Prune competing exit tips, the mirror image of `solve_entry_tips` over
/// successors and sink nodes; losing tips lose their sink endpoint.
pub fn solve_out_tips<R: Rng>(
    graph: &mut DebruijnGraph,
    policy: SelectionPolicy,
    rng: &mut R,
) -> Result<usize, AssemblyError> {
    resolve_tips(graph, TipSide::Exit, policy, rng)
}

fn resolve_tips<R: Rng>(
    graph: &mut DebruijnGraph,
    side: TipSide,
    policy: SelectionPolicy,
    rng: &mut R,
) -> Result<usize, AssemblyError> {
    let snapshot = graph.nodes_lexical();
    let mut resolved = 0;

    for node in snapshot {
        if !graph.contains(node) {
            continue;
        }
        // boundary sets are recomputed per junction; earlier resolutions in
        // this same pass may have changed them
        let boundary = match side {
            TipSide::Entry => graph.start_nodes(),
            TipSide::Exit => graph.sink_nodes(),
        };
        let adjacent = match side {
            TipSide::Entry => graph.predecessors_lexical(node),
            TipSide::Exit => graph.successors_lexical(node),
        };
        let tips: Vec<NodeId> = adjacent
            .into_iter()
            .filter(|id| boundary.contains(id))
            .collect();
        if tips.len() <= 1 {
            continue;
        }

        debug!(
            "{} tips competing at {:?}",
            tips.len(),
            graph.fragment(node)
        );

        let mut candidates = Vec::with_capacity(tips.len());
        let mut lengths = Vec::with_capacity(tips.len());
        let mut weight_averages = Vec::with_capacity(tips.len());
        for tip in tips {
            let first = match side {
                TipSide::Entry => graph.first_simple_path(tip, node),
                TipSide::Exit => graph.first_simple_path(node, tip),
            };
            if let Some(path) = first {
                lengths.push(path_length(&path));
                weight_averages.push(path_average_weight(graph, &path, policy.averaging)?);
                candidates.push(path);
            }
        }
        if candidates.len() > 1 {
            let (delete_entry_node, delete_sink_node) = match side {
                TipSide::Entry => (true, false),
                TipSide::Exit => (false, true),
            };
            select_best_path(
                graph,
                candidates,
                &lengths,
                &weight_averages,
                delete_entry_node,
                delete_sink_node,
                policy.tie_break,
                rng,
            );
            resolved += 1;
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_entry_tips_keep_the_heavy_source() {
        let mut graph = DebruijnGraph::new();
        graph.add_edge("TA", "MM", 2);
        graph.add_edge("TB", "MM", 10);
        graph.add_edge("MM", "NN", 10);
        let mut rng = StdRng::seed_from_u64(9001);

        let resolved =
            solve_entry_tips(&mut graph, SelectionPolicy::default(), &mut rng).unwrap();

        assert_eq!(resolved, 1);
        assert!(graph.node_id("TA").is_none());
        assert!(graph.node_id("TB").is_some());
        assert!(graph.node_id("MM").is_some());
    }

    #[test]
    fn test_exit_tips_mirror_entry_resolution() {
        let mut graph = DebruijnGraph::new();
        graph.add_edge("NN", "MM", 10);
        graph.add_edge("MM", "TA", 2);
        graph.add_edge("MM", "TB", 10);
        let mut rng = StdRng::seed_from_u64(9001);

        let resolved = solve_out_tips(&mut graph, SelectionPolicy::default(), &mut rng).unwrap();

        assert_eq!(resolved, 1);
        assert!(graph.node_id("TA").is_none());
        assert!(graph.node_id("TB").is_some());
        assert!(graph.node_id("MM").is_some());
    }

    #[test]
    fn test_single_tip_is_left_alone() {
        let mut graph = DebruijnGraph::new();
        graph.add_edge("TA", "MM", 2);
        graph.add_edge("MM", "NN", 10);
        let mut rng = StdRng::seed_from_u64(9001);

        let resolved =
            solve_entry_tips(&mut graph, SelectionPolicy::default(), &mut rng).unwrap();
        assert_eq!(resolved, 0);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_only_direct_source_predecessors_qualify() {
        // UU is upstream of MM but via VV, so it is not a competing tip
        let mut graph = DebruijnGraph::new();
        graph.add_edge("UU", "VV", 5);
        graph.add_edge("VV", "MM", 5);
        graph.add_edge("TA", "MM", 2);
        graph.add_edge("MM", "NN", 5);
        let mut rng = StdRng::seed_from_u64(9001);

        let resolved =
            solve_entry_tips(&mut graph, SelectionPolicy::default(), &mut rng).unwrap();
        assert_eq!(resolved, 0);
        assert_eq!(graph.node_count(), 5);
    }
}
