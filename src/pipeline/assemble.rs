// src/pipeline/assemble.rs
use anyhow::{ensure, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::graph::bubble::simplify_bubbles;
use crate::graph::contig::get_contigs;
use crate::graph::debruijn::DebruijnGraph;
use crate::graph::metrics::WeightAveraging;
use crate::graph::select::{SelectionPolicy, TieBreakBound};
use crate::graph::tips::{solve_entry_tips, solve_out_tips};
use crate::io::fasta::save_contigs;
use crate::io::fastq::{open_fastq, read_sequences};
use crate::kmer::counter::count_kmers;
use crate::visualize::plot::draw_graph;

pub struct AssembleOptions {
    pub kmer_size: usize,
    pub seed: u64,
    pub averaging: WeightAveraging,
    pub tie_break: TieBreakBound,
    pub skip_tips: bool,
    pub graph_img: Option<String>,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        AssembleOptions {
            kmer_size: 22,
            seed: 9001,
            averaging: WeightAveraging::default(),
            tie_break: TieBreakBound::default(),
            skip_tips: false,
            graph_img: None,
        }
    }
}

/// Run the whole batch pipeline: read, count, build, simplify, extract,
/// write. Each phase completes before the next starts.
pub fn assemble_reads(
    input_path: &str,
    output_path: &str,
    options: &AssembleOptions,
) -> Result<()> {
    ensure!(options.kmer_size >= 1, "k-mer size must be at least 1");

    info!("Reading sequences from: {}", input_path);
    let reader = open_fastq(input_path).with_context(|| format!("opening {}", input_path))?;
    let sequences: Vec<String> = read_sequences(reader)
        .collect::<Result<_, _>>()
        .context("reading FASTQ records")?;
    info!("Loaded {} reads", sequences.len());

    let counts = count_kmers(&sequences, options.kmer_size);
    info!(
        "Counted {} distinct substrings with k={}",
        counts.len(),
        options.kmer_size
    );

    let mut graph = DebruijnGraph::from_kmer_counts(&counts, options.kmer_size);
    info!(
        "Graph built: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let policy = SelectionPolicy {
        averaging: options.averaging,
        tie_break: options.tie_break,
    };
    let mut rng = StdRng::seed_from_u64(options.seed);

    let popped = simplify_bubbles(&mut graph, policy, &mut rng)?;
    info!("Collapsed {} bubbles", popped);

    if options.skip_tips {
        info!("Tip pruning disabled");
    } else {
        let entry = solve_entry_tips(&mut graph, policy, &mut rng)?;
        let exit = solve_out_tips(&mut graph, policy, &mut rng)?;
        info!(
            "Pruned tips at {} entry and {} exit junctions",
            entry, exit
        );
    }

    let starting_nodes = graph.start_nodes();
    let ending_nodes = graph.sink_nodes();
    let contigs = get_contigs(&graph, &starting_nodes, &ending_nodes);
    info!("Extracted {} contigs", contigs.len());

    save_contigs(&contigs, output_path).with_context(|| format!("writing {}", output_path))?;
    info!("Contigs saved to {}", output_path);

    if let Some(img_path) = &options.graph_img {
        draw_graph(&graph, img_path)
            .map_err(|e| anyhow::anyhow!("rendering {}: {}", img_path, e))?;
        info!("Graph image saved to {}", img_path);
    }

    Ok(())
}
