use clap::Parser;
use rayon::ThreadPoolBuilder;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use petrel::cli_main::{Cli, Commands};
use petrel::graph::metrics::WeightAveraging;
use petrel::graph::select::TieBreakBound;
use petrel::pipeline::assemble::{assemble_reads, AssembleOptions};
use petrel::stats::calculate_stats;

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Setting tracing default failed");

    let cli = Cli::parse();

    match cli.command {
        Commands::Assemble {
            input,
            kmer_size,
            output,
            graph_img,
            seed,
            threads,
            consecutive_weights,
            inclusive_tiebreak,
            skip_tips,
        } => {
            ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .expect("Failed to build thread pool");

            let options = AssembleOptions {
                kmer_size,
                seed,
                averaging: if consecutive_weights {
                    WeightAveraging::Consecutive
                } else {
                    WeightAveraging::InducedSubgraph
                },
                tie_break: if inclusive_tiebreak {
                    TieBreakBound::InclusiveClamped
                } else {
                    TieBreakBound::Exclusive
                },
                skip_tips,
                graph_img,
            };

            let start = std::time::Instant::now();
            if let Err(e) = assemble_reads(&input, &output, &options) {
                eprintln!("Error during assembly: {:#}", e);
                std::process::exit(1);
            }
            info!("Assembly completed in {:.2}s", start.elapsed().as_secs_f32());
        }

        Commands::Stats { input, format } => {
            info!("Calculating assembly statistics for: {}", input);

            let stats = match calculate_stats(&input) {
                Ok(stats) => stats,
                Err(e) => {
                    eprintln!("Error reading {}: {}", input, e);
                    std::process::exit(1);
                }
            };

            match format.as_str() {
                "json" => {
                    println!("{}", serde_json::to_string_pretty(&stats).unwrap());
                }
                "tsv" => {
                    println!("contigs\ttotal_len\tavg_len\tn50");
                    println!(
                        "{}\t{}\t{:.2}\t{}",
                        stats.total_contigs, stats.total_length, stats.average_length, stats.n50
                    );
                }
                _ => {
                    eprintln!("Unsupported format: {}", format);
                    std::process::exit(1);
                }
            }
        }
    }
}
