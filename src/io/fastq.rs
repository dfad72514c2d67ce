// src/io/fastq.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use flate2::read::MultiGzDecoder;

use crate::error::AssemblyError;

/// Open a FASTQ file for reading, handles gzipped files automatically.
pub fn open_fastq(path: &str) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if path.ends_with(".gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Stream the sequence line of each four-line FASTQ record.
///
/// A record that starts (its header line is present) but runs out of
/// companion lines is a fatal format error, not a silent end of input.
pub fn read_sequences<R: BufRead>(reader: R) -> SequenceReader<io::Lines<R>> {
    SequenceReader {
        lines: reader.lines(),
    }
}

pub struct SequenceReader<I> {
    lines: I,
}

impl<I> Iterator for SequenceReader<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = Result<String, AssemblyError>;

    fn next(&mut self) -> Option<Self::Item> {
        let header = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e.into())),
        };

        let sequence = match self.lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => return Some(Err(e.into())),
            None => {
                return Some(Err(AssemblyError::TruncatedFastqRecord { header }));
            }
        };

        // plus and quality lines: required, content unused
        for _ in 0..2 {
            match self.lines.next() {
                Some(Ok(_)) => {}
                Some(Err(e)) => return Some(Err(e.into())),
                None => {
                    return Some(Err(AssemblyError::TruncatedFastqRecord {
                        header: header.clone(),
                    }));
                }
            }
        }

        Some(Ok(sequence.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_sequence_line_of_each_record() {
        let data = "@r0\nAATCG\n+\nIIIII\n@r1\nTCGAT\n+\nIIIII\n";
        let sequences: Vec<String> = read_sequences(Cursor::new(data))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(sequences, vec!["AATCG", "TCGAT"]);
    }

    #[test]
    fn test_truncated_record_is_fatal() {
        let data = "@r0\nAATCG\n+\nIIIII\n@r1\nTCGAT\n";
        let results: Vec<Result<String, AssemblyError>> =
            read_sequences(Cursor::new(data)).collect();

        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(AssemblyError::TruncatedFastqRecord { .. })
        ));
    }

    #[test]
    fn test_missing_sequence_line_is_fatal() {
        let data = "@r0\n";
        let results: Vec<Result<String, AssemblyError>> =
            read_sequences(Cursor::new(data)).collect();

        assert_eq!(results.len(), 1);
        assert!(matches!(
            results[0],
            Err(AssemblyError::TruncatedFastqRecord { .. })
        ));
    }
}
