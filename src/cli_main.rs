use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "petrel", version, about = "Graph-based de Bruijn contig assembler", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble reads into contigs
    Assemble {
        /// Input FASTQ(.gz) file
        #[arg(short, long)]
        input: String,

        /// K-mer size
        #[arg(short, long, default_value_t = 22)]
        kmer_size: usize,

        /// Output contigs FASTA(.gz) file
        #[arg(short, long, default_value = "contigs.fasta")]
        output: String,

        /// Save the final graph as an image (png)
        #[arg(short = 'f', long)]
        graph_img: Option<String>,

        /// Seed for the random tie-break
        #[arg(long, default_value_t = 9001)]
        seed: u64,

        /// Number of threads for k-mer counting
        #[arg(long, default_value_t = num_cpus::get())]
        threads: usize,

        /// Average path weights over consecutively traversed edges only
        #[arg(long)]
        consecutive_weights: bool,

        /// Use the legacy inclusive random tie-break bound (overshoots clamp)
        #[arg(long)]
        inclusive_tiebreak: bool,

        /// Skip entry/exit tip pruning
        #[arg(long)]
        skip_tips: bool,
    },

    /// Calculate statistics for assembly output
    Stats {
        /// Input FASTA(.gz) file
        #[arg(short, long)]
        input: String,

        /// Output format (json or tsv)
        #[arg(long, default_value = "json")]
        format: String,
    },
}
