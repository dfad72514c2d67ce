//! K-mer extraction and occurrence counting.

pub mod counter;
