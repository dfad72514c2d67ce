// src/io/fasta.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::graph::contig::Contig;

/// Column width contig sequences are wrapped at.
pub const LINE_WIDTH: usize = 80;

/// Open a FASTA file for reading, handles gzipped files automatically.
pub fn open_fasta(path: &str) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if path.ends_with(".gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub enum FastaWriter {
    Plain(BufWriter<File>),
    Compressed(BufWriter<GzEncoder<File>>),
}

impl FastaWriter {
    pub fn create(path: &str) -> io::Result<Self> {
        let file = File::create(path)?;
        if path.ends_with(".gz") {
            let encoder = GzEncoder::new(file, Compression::default());
            Ok(FastaWriter::Compressed(BufWriter::new(encoder)))
        } else {
            Ok(FastaWriter::Plain(BufWriter::new(file)))
        }
    }

    fn sink(&mut self) -> &mut dyn Write {
        match self {
            FastaWriter::Plain(writer) => writer,
            FastaWriter::Compressed(writer) => writer,
        }
    }

    /// Write one contig record: `>contig_<index> len=<length>` followed by
    /// the sequence wrapped at [`LINE_WIDTH`] columns.
    pub fn write_contig(&mut self, index: usize, contig: &Contig) -> io::Result<()> {
        let out = self.sink();
        writeln!(out, ">contig_{} len={}", index, contig.length)?;
        for chunk in contig.sequence.as_bytes().chunks(LINE_WIDTH) {
            out.write_all(chunk)?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn finish(self) -> io::Result<()> {
        match self {
            FastaWriter::Plain(mut writer) => writer.flush(),
            FastaWriter::Compressed(writer) => {
                let encoder = writer.into_inner().map_err(|e| e.into_error())?;
                encoder.finish().map(|_| ())
            }
        }
    }
}

/// Write all contigs to `path` in emission order.
pub fn save_contigs(contigs: &[Contig], path: &str) -> io::Result<()> {
    let mut writer = FastaWriter::create(path)?;
    for (index, contig) in contigs.iter().enumerate() {
        writer.write_contig(index, contig)?;
    }
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_record_format() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let contig = Contig {
            sequence: "AATCGAT".to_string(),
            length: 7,
        };

        save_contigs(&[contig], &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, ">contig_0 len=7\nAATCGAT\n");
    }

    #[test]
    fn test_long_sequences_wrap_at_80_columns() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let contig = Contig {
            sequence: "A".repeat(175),
            length: 175,
        };

        save_contigs(&[contig], &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        // one header plus ceil(175 / 80) sequence lines
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], ">contig_0 len=175");
        assert_eq!(lines[1].len(), 80);
        assert_eq!(lines[2].len(), 80);
        assert_eq!(lines[3].len(), 15);
    }

    #[test]
    fn test_indices_follow_emission_order() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let contigs = vec![
            Contig {
                sequence: "AATC".to_string(),
                length: 4,
            },
            Contig {
                sequence: "GGC".to_string(),
                length: 3,
            },
        ];

        save_contigs(&contigs, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, ">contig_0 len=4\nAATC\n>contig_1 len=3\nGGC\n");
    }
}
