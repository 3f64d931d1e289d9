// src/batch.rs
use std::{collections::BTreeMap, fs, io, path::Path};

use crate::codes::{decode, DecodeError, ItemCode};

/// A code that did not decode, with the line it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailedCode {
    pub raw_code: String,
    pub error: DecodeError,
}

/// Outcome of decoding many codes. Failures never abort the batch.
#[derive(Clone, Debug, Default)]
pub struct Batch {
    pub decoded: Vec<ItemCode>,
    pub failures: Vec<FailedCode>,
}

impl Batch {
    pub fn total(&self) -> usize {
        self.decoded.len() + self.failures.len()
    }

    pub fn merge(&mut self, other: Batch) {
        self.decoded.extend(other.decoded);
        self.failures.extend(other.failures);
    }

    /// Decoded codes per line name, sorted by name.
    pub fn counts_by_line(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for code in &self.decoded {
            *counts.entry(code.line()).or_insert(0) += 1;
        }
        counts
    }

    pub fn registry_misses(&self) -> usize {
        self.failures.iter().filter(|f| f.error.is_registry_miss()).count()
    }
}

/// One outcome per non-blank line, in input order.
pub fn decode_lines(text: &str) -> Vec<(String, Result<ItemCode, DecodeError>)> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| (s!(l), decode(l)))
        .collect()
}

pub fn decode_text(text: &str) -> Batch {
    let mut batch = Batch::default();
    for (raw_code, outcome) in decode_lines(text) {
        match outcome {
            Ok(code) => batch.decoded.push(code),
            Err(error) => {
                loge!("Decode: {raw_code} failed on {}: {error}", error.segment());
                batch.failures.push(FailedCode { raw_code, error });
            }
        }
    }
    batch
}

pub fn decode_file(path: &Path) -> io::Result<Batch> {
    let text = fs::read_to_string(path)?;
    let batch = decode_text(&text);
    logf!(
        "Decode: {} → {} ok, {} failed",
        path.display(),
        batch.decoded.len(),
        batch.failures.len()
    );
    Ok(batch)
}
