use std::path::Path;

use anyhow::Context;
use bio::io::fasta;
use log::warn;

/// One sequence of an aligned FASTA file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedRecord {
    id:  String,
    seq: String,
}

impl AlignedRecord {
    pub fn new(
        id: String,
        seq: String,
    ) -> Self {
        Self { id, seq }
    }

    pub fn id(&self) -> &str { &self.id }

    pub fn seq(&self) -> &str { &self.seq }

    /// One `|`-separated field of the record id.
    ///
    /// Alignment headers commonly pack strain, accession and sampling
    /// metadata into the id, e.g.
    /// `EBOV|Makona-G3686|KR105217|SLE|Kailahun|2014-06-18`.
    pub fn field(
        &self,
        index: usize,
    ) -> Option<&str> {
        self.id.split('|').nth(index)
    }
}

/// Reads an aligned FASTA file into records.
///
/// Rows of one alignment set are expected to share a single length; a
/// ragged file is read anyway (length enforcement is the caller's
/// choice) but logged as a warning.
pub fn read_alignment<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<AlignedRecord>> {
    let path = path.as_ref();
    let reader = fasta::Reader::from_file(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut records = Vec::new();
    for result in reader.records() {
        let record =
            result.with_context(|| format!("failed to read {}", path.display()))?;
        let seq = std::str::from_utf8(record.seq())
            .with_context(|| {
                format!("record {:?} is not valid UTF-8", record.id())
            })?
            .to_owned();
        records.push(AlignedRecord::new(record.id().to_owned(), seq));
    }

    if let Some(first) = records.first() {
        let expected = first.seq().len();
        let ragged = records
            .iter()
            .filter(|record| record.seq().len() != expected)
            .count();
        if ragged > 0 {
            warn!(
                "{}: {} of {} records differ from the first record's length \
                 {}",
                path.display(),
                ragged,
                records.len(),
                expected
            );
        }
    }

    Ok(records)
}
