// src/codes/error.rs
use std::fmt;

use thiserror::Error;

use super::collections::Season;

/// Portion of an item code that decoding failed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Segment {
    Line,
    Year,
    Season,
    Collection,
}

impl Segment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Line => "Line",
            Segment::Year => "Year",
            Segment::Season => "Season",
            Segment::Collection => "Collection",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input was malformed or used a token none of the registries recognise.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{segment} segment of {raw_input:?} not recognised{}", detail(.message))]
pub struct ParseFailure {
    raw_input: String,
    segment: Segment,
    message: Option<String>,
}

impl ParseFailure {
    pub fn new(raw_input: impl Into<String>, segment: Segment) -> Self {
        Self { raw_input: raw_input.into(), segment, message: None }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Re-attribute the failure to the full code it came from.
    pub(crate) fn within(mut self, raw_input: &str) -> Self {
        self.raw_input = raw_input.to_string();
        self
    }

    pub fn raw_input(&self) -> &str { &self.raw_input }
    pub fn segment(&self) -> Segment { self.segment }
    pub fn message(&self) -> Option<&str> { self.message.as_deref() }
}

fn detail(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

/// Well-formed year and season with no matching entry in the collection table.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Collection {year}{season} not found")]
pub struct CollectionNotFound {
    pub raw_input: String,
    pub year: String,
    pub season: Season,
}

impl CollectionNotFound {
    pub(crate) fn within(mut self, raw_input: &str) -> Self {
        self.raw_input = raw_input.to_string();
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Parse(#[from] ParseFailure),

    #[error(transparent)]
    MissingCollection(#[from] CollectionNotFound),
}

impl DecodeError {
    /// Segment to blame in reports. A registry miss is charged to `Collection`.
    pub fn segment(&self) -> Segment {
        match self {
            DecodeError::Parse(p) => p.segment(),
            DecodeError::MissingCollection(_) => Segment::Collection,
        }
    }

    /// The offending input. From `decode` this is the whole trimmed code.
    pub fn raw_input(&self) -> &str {
        match self {
            DecodeError::Parse(p) => p.raw_input(),
            DecodeError::MissingCollection(m) => &m.raw_input,
        }
    }

    pub fn is_registry_miss(&self) -> bool {
        matches!(self, DecodeError::MissingCollection(_))
    }
}
