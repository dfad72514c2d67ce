use thiserror::Error;

/// Fatal conditions surfaced by the assembly pipeline.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// A FASTQ record started with a header but ran out of companion lines.
    #[error("truncated FASTQ record: {header:?} is missing its sequence/quality lines")]
    TruncatedFastqRecord { header: String },

    /// The subgraph induced by a path's node set carries no edges, so its
    /// average weight is undefined.
    #[error("path induces a subgraph with no edges; average weight is undefined")]
    EmptyPathSubgraph,

    /// A resolution loop kept finding work without shrinking the graph.
    #[error("{stage} resolution did not converge after {iterations} rounds")]
    ResolutionDidNotConverge {
        stage: &'static str,
        iterations: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
