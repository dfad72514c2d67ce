//! FASTQ input and FASTA output shims around the core pipeline.

pub mod fasta;
pub mod fastq;
