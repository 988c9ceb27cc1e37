// ============================================================
// Layer 6 — Dictionary Store
// ============================================================
// Saves a Vocabulary as CSV and reads it back.
//
// One row per token, no header:
//
//   token,index,class1:count1,class2:count2,...
//
//   hello,0,comp.graphics:4,sci.space:1
//   orbit,1,sci.space:7
//
// Class columns follow the class-title list given to `save`.
// A class the token never appeared in gets no column, and a
// class missing from the title list is not written at all, so
// it cannot come back on load.
//
// Loading is lossy-tolerant on purpose: a row with too few
// fields, a non-integer index or count, or a field without
// ':' is logged and skipped, and loading carries on.

use std::{
    fs::File,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use thiserror::Error;

use crate::domain::vocabulary::{VocabEntry, Vocabulary};

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("cannot create dictionary file '{}'", path.display())]
    Create {
        path:   PathBuf,
        source: io::Error,
    },
    #[error("cannot open dictionary file '{}'", path.display())]
    Open {
        path:   PathBuf,
        source: io::Error,
    },
    #[error("failed writing dictionary file '{}'", path.display())]
    Write {
        path:   PathBuf,
        source: csv::Error,
    },
    #[error("failed reading dictionary file '{}'", path.display())]
    Read {
        path:   PathBuf,
        source: csv::Error,
    },
}

/// Why a single row was skipped
#[derive(Error, Debug, PartialEq)]
enum RowError {
    #[error("expected at least 2 fields, found {0}")]
    TooFewFields(usize),
    #[error("index '{0}' is not a non-negative integer")]
    BadIndex(String),
    #[error("index {0} leaves no room for further tokens")]
    IndexTooLarge(usize),
    #[error("'{0}' is not a class:count pair")]
    BadPair(String),
}

/// Outcome of reading a dictionary file
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub vocab: Vocabulary,

    /// Rows that parsed into an entry
    pub rows: usize,

    /// Rows that were malformed and skipped
    pub skipped: usize,
}

/// A dictionary file on disk
pub struct DictionaryStore {
    path: PathBuf,
}

impl DictionaryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `vocab` with one count column per entry of `class_titles`.
    pub fn save(&self, vocab: &Vocabulary, class_titles: &[String]) -> Result<(), DictionaryError> {
        let file = File::create(&self.path).map_err(|source| DictionaryError::Create {
            path: self.path.clone(),
            source,
        })?;

        write_dictionary(file, vocab, class_titles).map_err(|source| DictionaryError::Write {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!(
            "Saved {} dictionary rows to '{}'",
            vocab.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Read the file back into a vocabulary, skipping malformed rows
    pub fn load(&self) -> Result<Vocabulary, DictionaryError> {
        self.load_with_report().map(|report| report.vocab)
    }

    /// Like `load`, also reporting how many rows were kept and skipped
    pub fn load_with_report(&self) -> Result<LoadReport, DictionaryError> {
        let file = File::open(&self.path).map_err(|source| DictionaryError::Open {
            path: self.path.clone(),
            source,
        })?;

        let report = read_dictionary(file).map_err(|source| DictionaryError::Read {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!(
            "Loaded {} dictionary rows from '{}' ({} skipped)",
            report.rows,
            self.path.display(),
            report.skipped
        );
        Ok(report)
    }
}

/// Write `vocab` as CSV rows, ordered by index.
pub fn write_dictionary<W: Write>(
    writer:       W,
    vocab:        &Vocabulary,
    class_titles: &[String],
) -> csv::Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(writer);

    for (token, entry) in vocab.iter_by_index() {
        let mut row = Vec::with_capacity(2 + class_titles.len());
        row.push(token.to_owned());
        row.push(entry.index.to_string());
        for title in class_titles {
            if let Some(count) = entry.counts.get(title) {
                row.push(format!("{title}:{count}"));
            }
        }
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Read CSV rows into a vocabulary.
///
/// Only an I/O failure of `reader` is an error. Malformed rows,
/// including rows that are not valid UTF-8, are skipped. When a
/// token appears on several rows the last valid one wins.
pub fn read_dictionary<R: Read>(reader: R) -> csv::Result<LoadReport> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut report = LoadReport::default();

    for result in rdr.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e),
            Err(e) => {
                tracing::warn!("Skipping unreadable dictionary row: {}", e);
                report.skipped += 1;
                continue;
            }
        };

        match parse_row(&record) {
            Ok((token, entry)) => {
                report.vocab.insert_entry(token, entry);
                report.rows += 1;
            }
            Err(e) => {
                let line = record.position().map_or(0, |p| p.line());
                tracing::warn!("Skipping dictionary row at line {}: {}", line, e);
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

fn parse_row(record: &StringRecord) -> Result<(String, VocabEntry), RowError> {
    if record.len() < 2 {
        return Err(RowError::TooFewFields(record.len()));
    }

    let index = record[1]
        .trim()
        .parse::<usize>()
        .map_err(|_| RowError::BadIndex(record[1].to_owned()))?;
    if index == usize::MAX {
        return Err(RowError::IndexTooLarge(index));
    }
    let mut entry = VocabEntry::new(index);

    for field in record.iter().skip(2) {
        // Split on the last ':' so labels may contain ':' themselves
        let (label, count) = field
            .rsplit_once(':')
            .ok_or_else(|| RowError::BadPair(field.to_owned()))?;
        let count = count
            .trim()
            .parse::<u64>()
            .map_err(|_| RowError::BadPair(field.to_owned()))?;
        entry.counts.insert(label.to_owned(), count);
    }

    Ok((record[0].to_owned(), entry))
}
