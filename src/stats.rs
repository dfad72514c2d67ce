use serde::Serialize;
use std::io;
use std::io::BufRead;

use crate::io::fasta::open_fasta;

#[derive(Serialize)]
pub struct Stats {
    pub total_contigs: usize,
    pub total_length: usize,
    pub average_length: f64,
    pub n50: usize,
}

/// Summarize an assembly FASTA: contig count, total/average length and N50.
pub fn calculate_stats(path: &str) -> io::Result<Stats> {
    let reader = open_fasta(path)?;
    let mut lengths = vec![];
    let mut total = 0;
    let mut current_length = 0;

    for line in reader.lines() {
        let line = line?;
        if line.starts_with('>') {
            if current_length > 0 {
                total += current_length;
                lengths.push(current_length);
                current_length = 0;
            }
        } else {
            current_length += line.trim().len();
        }
    }
    if current_length > 0 {
        total += current_length;
        lengths.push(current_length);
    }

    lengths.sort_unstable();
    let total_contigs = lengths.len();
    let average_length = if total_contigs > 0 {
        total as f64 / total_contigs as f64
    } else {
        0.0
    };

    // N50: length of the shortest contig in the set covering half the total
    let mut acc = 0;
    let half_total = total / 2;
    let n50 = lengths
        .iter()
        .rev()
        .find(|&&len| {
            acc += len;
            acc >= half_total
        })
        .copied()
        .unwrap_or(0);

    Ok(Stats {
        total_contigs,
        total_length: total,
        average_length,
        n50,
    })
}
