// src/codes/collections.rs
//! Seasonal collections, newest first.
//!
//! The table is scanned in declared order and the first hit wins, so the
//! duplicate (year, season) pairs below resolve deterministically.
use std::fmt;

use super::error::{CollectionNotFound, DecodeError, ParseFailure, Segment};

/// Canonical single-letter season.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Season {
    Fall,
    Spring,
}

impl Season {
    pub fn letter(&self) -> &'static str {
        match self {
            Season::Fall => "F",
            Season::Spring => "S",
        }
    }

    pub fn long_name(&self) -> &'static str {
        match self {
            Season::Fall => "Fall",
            Season::Spring => "Spring",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "FW" | "AW" | "F" => Some(Season::Fall),
            "SS" | "S" => Some(Season::Spring),
            _ => None,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Accepts FW/AW/F and SS/S in any case.
pub fn canonicalise_season(token: &str) -> Result<Season, ParseFailure> {
    Season::from_token(token).ok_or_else(|| {
        ParseFailure::new(token, Segment::Season).with_message("Season Not Valid")
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Collection {
    pub year: &'static str,
    pub name: &'static str,
    /// Token as stored, `FW` or `SS`.
    pub season: &'static str,
}

impl Collection {
    pub fn canonical_season(&self) -> Option<Season> {
        Season::from_token(self.season)
    }
}

const fn c(year: &'static str, name: &'static str, season: &'static str) -> Collection {
    Collection { year, name, season }
}

static COLLECTIONS: &[Collection] = &[
    c("20", "PERFORMA", "FW"),
    c("20", "TECUATL", "SS"),
    c("19", "LARRY", "FW"),
    c("19", "BABEL", "SS"),
    c("18", "SISYPHUS", "FW"),
    c("18", "DIRT", "SS"),
    c("17", "GLITTER", "FW"),
    c("17", "WALRUS", "SS"),
    c("16", "MASTODON", "FW"),
    c("16", "CYCLOPS", "SS"),
    c("15", "SPHINX", "FW"),
    c("15", "FAUN", "SS"),
    c("14", "MOODY", "FW"),
    c("14", "VICIOUS", "SS"),
    c("13", "PLINTH", "FW"),
    c("13", "ISLAND", "SS"),
    c("12", "MOUNTAIN", "FW"),
    c("12", "NASKA", "SS"),
    c("11", "LIMO", "FW"),
    c("11", "ANTHEM", "SS"),
    c("10", "GLEAM", "FW"),
    c("10", "RELEASE", "SS"),
    c("09", "CRUST", "FW"),
    c("09", "STRUTTER", "SS"),
    c("08", "STAG", "FW"),
    c("08", "CREATCH", "SS"),
    c("07", "EXPLODER", "FW"),
    c("07", "WISHBONE", "SS"),
    c("06", "REVILLON", "FW"),
    c("06", "DUSTULATOR", "FW"),
    c("06", "TUNGSTEN", "SS"),
    c("05", "MOOG", "FW"),
    c("05", "SCORPIO", "SS"),
    c("04", "REVILLON", "FW"),
    c("04", "QUEEN", "FW"),
    c("04", "CITROEN", "SS"),
    c("03", "REVILLON", "FW"),
    c("03", "TRUCKER", "FW"),
    c("03", "SUKERBALL", "SS"),
    c("02", "SPARROWS", "FW"),
];

pub fn all() -> &'static [Collection] {
    COLLECTIONS
}

pub fn is_known_year(year: &str) -> bool {
    COLLECTIONS.iter().any(|c| c.year == year)
}

/// Distinct years, in table order.
pub fn valid_years() -> Vec<&'static str> {
    let mut years: Vec<&'static str> = Vec::new();
    for c in COLLECTIONS {
        if !years.contains(&c.year) {
            years.push(c.year);
        }
    }
    years
}

/// First collection for `year` whose season matches `season` after both sides
/// are canonicalised.
pub fn find(year: &str, season: &str) -> Result<&'static Collection, DecodeError> {
    let token = season;
    let season = canonicalise_season(token)?;
    COLLECTIONS
        .iter()
        .find(|c| c.year == year && c.canonical_season() == Some(season))
        .ok_or_else(|| {
            CollectionNotFound { raw_input: format!("{year}{token}"), year: s!(year), season }.into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_canonicalise_case_insensitively() {
        for t in ["FW", "aw", "F", "f", "Fw"] {
            assert_eq!(canonicalise_season(t).unwrap(), Season::Fall);
        }
        for t in ["SS", "s", "sS"] {
            assert_eq!(canonicalise_season(t).unwrap(), Season::Spring);
        }
    }

    #[test]
    fn canonicalisation_is_idempotent() {
        for t in ["FW", "AW", "F", "SS", "S", "fw", "ss"] {
            let once = canonicalise_season(t).unwrap();
            let twice = canonicalise_season(once.letter()).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn unknown_season_tokens_fail_on_season() {
        for t in ["AS", "W", "", "SW", "FALL", "1"] {
            let err = canonicalise_season(t).unwrap_err();
            assert_eq!(err.segment(), Segment::Season);
            assert_eq!(err.raw_input(), t);
        }
    }

    #[test]
    fn every_stored_season_is_canonical() {
        assert!(all().iter().all(|c| c.canonical_season().is_some()));
    }

    #[test]
    fn find_returns_larry_for_19_fall() {
        let larry = find("19", "F").unwrap();
        assert_eq!(larry.year, "19");
        assert_eq!(larry.season, "FW");
        assert_eq!(larry.name, "LARRY");
        assert_eq!(find("19", "aw").unwrap(), larry);
    }

    #[test]
    fn duplicates_resolve_to_first_declared() {
        assert_eq!(find("04", "F").unwrap().name, "REVILLON");
        assert_eq!(find("06", "FW").unwrap().name, "REVILLON");
        assert_eq!(find("03", "F").unwrap().name, "REVILLON");
    }

    #[test]
    fn missing_collection_is_a_registry_miss() {
        let err = find("00", "S").unwrap_err();
        assert!(err.is_registry_miss());
        assert_eq!(err.to_string(), "Collection 00S not found");
        assert_eq!(err.raw_input(), "00S");

        let err = find("02", "SS").unwrap_err();
        assert_eq!(err.segment(), Segment::Collection);
    }

    #[test]
    fn bad_season_in_find_is_a_parse_failure() {
        let err = find("19", "AS").unwrap_err();
        assert!(!err.is_registry_miss());
        assert_eq!(err.segment(), Segment::Season);
    }

    #[test]
    fn years_are_distinct_and_ordered() {
        let years = valid_years();
        assert_eq!(years.first(), Some(&"20"));
        assert_eq!(years.last(), Some(&"02"));
        assert_eq!(years.len(), 19);
        assert!(is_known_year("04"));
        assert!(!is_known_year("99"));
        assert!(!is_known_year("4"));
    }
}
