// src/kmer/counter.rs
use ahash::AHashMap;
use rayon::prelude::*;

/// Cut a read into the substrings the occurrence table is built from.
///
/// For a read of length L the slicing window runs over `0..=k + (L mod k)`,
/// so substrings near the read end are truncated below `k` characters (down
/// to the empty string) rather than dropped. This is the table the rest of
/// the pipeline is calibrated against; the graph builder filters out the
/// short artifacts when it splits k-mers into fragments.
pub fn cut_kmers(read: &str, kmer_size: usize) -> impl Iterator<Item = &str> + '_ {
    let over = kmer_size + read.len() % kmer_size;
    (0..=over).map(move |i| {
        let start = i.min(read.len());
        let end = (i + kmer_size).min(read.len());
        &read[start..end]
    })
}

/// Count substring occurrences across all reads.
///
/// Counting runs chunk-parallel; per-chunk tables merge by summation, so the
/// final counts are independent of both read order and thread scheduling.
pub fn count_kmers(reads: &[String], kmer_size: usize) -> AHashMap<String, u32> {
    let chunk_size = (reads.len() / rayon::current_num_threads().max(1)).max(1);

    reads
        .par_chunks(chunk_size)
        .map(|chunk| {
            let mut local: AHashMap<String, u32> = AHashMap::new();
            for read in chunk {
                for kmer in cut_kmers(read, kmer_size) {
                    *local.entry(kmer.to_string()).or_insert(0) += 1;
                }
            }
            local
        })
        .reduce(AHashMap::new, |mut merged, local| {
            for (kmer, count) in local {
                *merged.entry(kmer).or_insert(0) += count;
            }
            merged
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_kmers_truncates_at_read_end() {
        let kmers: Vec<&str> = cut_kmers("AATCG", 3).collect();
        assert_eq!(kmers, vec!["AAT", "ATC", "TCG", "CG", "G", ""]);
    }

    #[test]
    fn test_count_kmers_single_read() {
        let reads = vec!["AATCG".to_string()];
        let counts = count_kmers(&reads, 3);

        assert_eq!(counts.get("AAT"), Some(&1));
        assert_eq!(counts.get("ATC"), Some(&1));
        assert_eq!(counts.get("TCG"), Some(&1));
        assert_eq!(counts.get("CG"), Some(&1));
        assert_eq!(counts.get("G"), Some(&1));
        assert_eq!(counts.get(""), Some(&1));
        assert_eq!(counts.len(), 6);
    }

    #[test]
    fn test_count_kmers_accumulates_across_reads() {
        let reads = vec![
            "AATCG".to_string(),
            "ATCGA".to_string(),
            "TCGAT".to_string(),
        ];
        let counts = count_kmers(&reads, 3);

        assert_eq!(counts.get("TCG"), Some(&3));
        assert_eq!(counts.get("ATC"), Some(&2));
        assert_eq!(counts.get("CGA"), Some(&2));
        assert_eq!(counts.get("AAT"), Some(&1));
        assert_eq!(counts.get("GAT"), Some(&1));
    }

    #[test]
    fn test_count_kmers_is_order_independent() {
        let forward = vec![
            "AATCG".to_string(),
            "ATCGA".to_string(),
            "TCGAT".to_string(),
        ];
        let shuffled = vec![
            "TCGAT".to_string(),
            "AATCG".to_string(),
            "ATCGA".to_string(),
        ];

        assert_eq!(count_kmers(&forward, 3), count_kmers(&shuffled, 3));
    }
}
