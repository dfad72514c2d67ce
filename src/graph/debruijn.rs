// src/graph/debruijn.rs
use ahash::{AHashMap, AHashSet};
use petgraph::algo::{all_simple_paths, has_path_connecting};
use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;
use std::collections::VecDeque;
use tracing::debug;

/// Stable identifier for an interned sequence fragment.
pub type NodeId = usize;

/// Weighted directed graph over (k-1)-length sequence fragments.
///
/// Fragments are interned into an arena exactly once; a `NodeId` stays valid
/// for the life of the graph even after the node is removed from the
/// adjacency structure. Node identity is string equality, enforced by the
/// interner. Edge weights are written at edge creation and never updated.
pub struct DebruijnGraph {
    fragments: Vec<String>,
    ids: AHashMap<String, NodeId>,
    adj: DiGraphMap<NodeId, u32>,
}

impl Default for DebruijnGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl DebruijnGraph {
    pub fn new() -> Self {
        DebruijnGraph {
            fragments: Vec::new(),
            ids: AHashMap::new(),
            adj: DiGraphMap::new(),
        }
    }

    /// Build the graph from a substring occurrence table.
    ///
    /// Each entry of length exactly `kmer_size` contributes one edge from its
    /// (k-1)-prefix to its (k-1)-suffix, weighted by the occurrence count.
    /// Shorter entries are truncation artifacts of the read partitioning and
    /// would corrupt the prefix/suffix split, so they are skipped. Entries
    /// are inserted in lexical order to pin adjacency enumeration order.
    pub fn from_kmer_counts(counts: &AHashMap<String, u32>, kmer_size: usize) -> Self {
        let mut graph = DebruijnGraph::new();

        let mut entries: Vec<(&String, u32)> = counts.iter().map(|(s, &w)| (s, w)).collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        for (kmer, weight) in entries {
            if kmer.len() != kmer_size {
                debug!("skipping length-{} artifact {:?}", kmer.len(), kmer);
                continue;
            }
            graph.add_edge(&kmer[..kmer_size - 1], &kmer[1..], weight);
        }
        graph
    }

    fn intern(&mut self, fragment: &str) -> NodeId {
        if let Some(&id) = self.ids.get(fragment) {
            return id;
        }
        let id = self.fragments.len();
        self.fragments.push(fragment.to_string());
        self.ids.insert(fragment.to_string(), id);
        id
    }

    /// Insert an isolated node, creating it if the fragment is new.
    pub fn add_node(&mut self, fragment: &str) -> NodeId {
        let id = self.intern(fragment);
        self.adj.add_node(id);
        id
    }

    /// Insert a weighted edge, creating either endpoint if absent. The weight
    /// of an existing edge is left untouched.
    pub fn add_edge(&mut self, prefix: &str, suffix: &str, weight: u32) {
        let u = self.intern(prefix);
        let v = self.intern(suffix);
        if !self.adj.contains_edge(u, v) {
            self.adj.add_edge(u, v, weight);
        }
    }

    pub fn fragment(&self, id: NodeId) -> &str {
        &self.fragments[id]
    }

    /// Look up a fragment still present in the graph.
    pub fn node_id(&self, fragment: &str) -> Option<NodeId> {
        self.ids
            .get(fragment)
            .copied()
            .filter(|&id| self.adj.contains_node(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.adj.contains_node(id)
    }

    pub fn node_count(&self) -> usize {
        self.adj.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.edge_count()
    }

    /// Remove a node and all its incident edges.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        self.adj.remove_node(id)
    }

    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<u32> {
        self.adj.edge_weight(from, to).copied()
    }

    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, u32)> + '_ {
        self.adj.all_edges().map(|(u, v, &w)| (u, v, w))
    }

    pub fn successors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adj.neighbors_directed(id, Direction::Outgoing)
    }

    pub fn predecessors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adj.neighbors_directed(id, Direction::Incoming)
    }

    fn sorted_by_fragment(&self, mut ids: Vec<NodeId>) -> Vec<NodeId> {
        ids.sort_unstable_by(|&a, &b| self.fragments[a].cmp(&self.fragments[b]));
        ids
    }

    /// All live nodes in lexical fragment order. Scans over the graph use
    /// this ordering so detection results are reproducible.
    pub fn nodes_lexical(&self) -> Vec<NodeId> {
        self.sorted_by_fragment(self.adj.nodes().collect())
    }

    pub fn predecessors_lexical(&self, id: NodeId) -> Vec<NodeId> {
        self.sorted_by_fragment(self.predecessors(id).collect())
    }

    pub fn successors_lexical(&self, id: NodeId) -> Vec<NodeId> {
        self.sorted_by_fragment(self.successors(id).collect())
    }

    /// Nodes with no predecessors, recomputed fresh on every call.
    pub fn start_nodes(&self) -> Vec<NodeId> {
        let starts = self
            .adj
            .nodes()
            .filter(|&id| self.predecessors(id).next().is_none())
            .collect();
        self.sorted_by_fragment(starts)
    }

    /// Nodes with no successors, recomputed fresh on every call.
    pub fn sink_nodes(&self) -> Vec<NodeId> {
        let sinks = self
            .adj
            .nodes()
            .filter(|&id| self.successors(id).next().is_none())
            .collect();
        self.sorted_by_fragment(sinks)
    }

    pub fn has_path(&self, from: NodeId, to: NodeId) -> bool {
        has_path_connecting(&self.adj, from, to, None)
    }

    /// Enumerate every simple path between two nodes.
    pub fn all_simple_paths(&self, from: NodeId, to: NodeId) -> Vec<Vec<NodeId>> {
        all_simple_paths::<Vec<_>, _>(&self.adj, from, to, 0, None).collect()
    }

    /// First simple path in enumeration order, if any.
    pub fn first_simple_path(&self, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
        all_simple_paths::<Vec<_>, _>(&self.adj, from, to, 0, None).next()
    }

    fn ancestors_of(&self, id: NodeId) -> AHashSet<NodeId> {
        let mut seen = AHashSet::new();
        let mut queue = VecDeque::new();
        seen.insert(id);
        queue.push_back(id);
        while let Some(current) = queue.pop_front() {
            for pred in self.predecessors(current) {
                if seen.insert(pred) {
                    queue.push_back(pred);
                }
            }
        }
        seen
    }

    /// Lowest common ancestor of two nodes: a node from which both are
    /// reachable (every node reaches itself). Among the common ancestors the
    /// lowest are those from which no other common ancestor is reachable;
    /// ties break toward the lexically smallest fragment.
    pub fn lowest_common_ancestor(&self, a: NodeId, b: NodeId) -> Option<NodeId> {
        let ancestors_a = self.ancestors_of(a);
        let ancestors_b = self.ancestors_of(b);
        let common =
            self.sorted_by_fragment(ancestors_a.intersection(&ancestors_b).copied().collect());

        common
            .iter()
            .copied()
            .find(|&c| !common.iter().any(|&other| other != c && self.has_path(c, other)))
    }
}
