// src/codes/lines.rs
//! Product lines, keyed by the two-letter prefix of every item code.
use std::fmt;

use super::error::{ParseFailure, Segment};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gender {
    Men,
    Women,
    Unisex,
    NotApplicable,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Men => "Men",
            Gender::Women => "Women",
            Gender::Unisex => "Unisex",
            Gender::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub gender: Gender,
}

const fn line(code: &'static str, name: &'static str, gender: Gender) -> LineEntry {
    LineEntry { code, name, gender }
}

use Gender::*;

static LINES: &[LineEntry] = &[
    line("BK", "Books", NotApplicable),
    line("BM", "Birkenstock", Unisex),
    line("BW", "Birkenstock", Women),
    line("CM", "Champion", Men),
    line("CW", "Champion", Women),
    line("DL", "DRKSHDW MiJ Capsule", Unisex),
    line("DS", "DRKSHDW", Women),
    line("DU", "DRKSHDW", Men),
    line("HD", "Hunrod", Women),
    line("HU", "Hunrod", Unisex),
    line("LI", "Lilies", Women),
    line("NX", "DRKSHDW Unknown", Unisex),
    line("PM", "Palais Royale", Men),
    line("PR", "Palais Royale", Women),
    line("RA", "Accessories", Unisex),
    line("RB", "Accessories", Unisex),
    line("RF", "Forever", Unisex),
    line("RM", "Precollection Adidas", Unisex),
    line("RO", "Runway", Women),
    line("RP", "Precollection", Women),
    line("RR", "Runway", Men),
    line("RU", "Precollection", Men),
    line("RV", "Collectables", Unisex),
    line("RW", "Runway Adidas", Unisex),
    line("VM", "Veja", Men),
    line("VW", "Veja", Women),
];

pub fn all() -> &'static [LineEntry] {
    LINES
}

/// Exact match only. Callers uppercase before lookup.
pub fn lookup(code: &str) -> Option<&'static LineEntry> {
    LINES.iter().find(|l| l.code == code)
}

pub fn resolve(code: &str) -> Result<&'static LineEntry, ParseFailure> {
    lookup(code).ok_or_else(|| {
        ParseFailure::new(code, Segment::Line).with_message("Unknown line code")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_code_resolves_to_its_entry() {
        for entry in all() {
            assert_eq!(entry.code.len(), 2);
            assert!(entry.code.chars().all(|c| c.is_ascii_uppercase()));
            let found = resolve(entry.code).unwrap();
            assert_eq!((found.name, found.gender), (entry.name, entry.gender));
        }
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<&str> = all().iter().map(|l| l.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all().len());
    }

    #[test]
    fn unknown_and_lowercase_codes_fail_on_line() {
        for code in ["ZZ", "rp", "R", "", "RPX"] {
            let err = resolve(code).unwrap_err();
            assert_eq!(err.segment(), Segment::Line);
            assert_eq!(err.raw_input(), code);
        }
    }

    #[test]
    fn gender_display() {
        assert_eq!(resolve("BK").unwrap().gender.to_string(), "N/A");
        assert_eq!(resolve("RP").unwrap().gender.to_string(), "Women");
    }
}
