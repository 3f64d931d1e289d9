// src/codes/decode.rs
//! Item code decoding (FW13 Plinth and later).
//!
//! A code such as `DU15F5152-R 09` splits into six sections:
//!
//! ```text
//! DU | 15 | F | 5152 | R | 09
//! Line + Gender | Year | Season | Item | Fabric | Colour
//! ```
//!
//! Line, year and season are fixed width. The rest is split greedily by
//! character class: digits, then letters, then digits. A run only consumes
//! input when something of another class follows it, so a run that reaches
//! the end leaves the remainder for the next filter to rescan. Whatever
//! follows the colour run is dropped.
use std::{fmt, str::FromStr};

use super::{
    collections::{self, Collection},
    error::{DecodeError, ParseFailure, Segment},
    lines::{self, Gender},
};

const LINE_LEN: usize = 2;
const YEAR_LEN: usize = 2;
const SEASON_LEN: usize = 1;

/// A fully decoded item code. Only `decode` builds these.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemCode {
    raw_code: String,
    line: &'static str,
    gender: Gender,
    collection: &'static Collection,
    item_code: String,
    fabric_code: String,
    colour_code: String,
}

impl ItemCode {
    pub fn raw_code(&self) -> &str { &self.raw_code }
    pub fn line(&self) -> &'static str { self.line }
    pub fn gender(&self) -> Gender { self.gender }
    pub fn collection(&self) -> &'static Collection { self.collection }
    pub fn item_code(&self) -> &str { &self.item_code }
    pub fn fabric_code(&self) -> &str { &self.fabric_code }
    pub fn colour_code(&self) -> &str { &self.colour_code }
}

impl fmt::Display for ItemCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let season = self.collection.canonical_season().map_or("", |s| s.long_name());
        write!(
            f,
            "{} {}'s {} '{} | Item: {} | Fabric: {} | Colour: {}",
            self.collection.name,
            self.gender,
            season,
            self.collection.year,
            self.item_code,
            self.fabric_code,
            self.colour_code,
        )
    }
}

impl FromStr for ItemCode {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

/// Uppercase and keep only alphanumerics. Labels carry separators anywhere.
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .to_uppercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Decode one code. Either every segment validates or nothing is returned.
pub fn decode(raw: &str) -> Result<ItemCode, DecodeError> {
    let raw_code = raw.trim();
    let code = normalize(raw_code);
    let mut rest = code.as_str();

    let line_code = take_chars(&mut rest, LINE_LEN);
    let line = lines::resolve(line_code).map_err(|p| p.within(raw_code))?;

    let year = take_chars(&mut rest, YEAR_LEN);
    if !collections::is_known_year(year) {
        return Err(ParseFailure::new(raw_code, Segment::Year)
            .with_message(format!(
                "No collection in year {year:?} (known: {})",
                collections::valid_years().join(", ")
            ))
            .into());
    }

    let marker = take_chars(&mut rest, SEASON_LEN);
    let collection = collections::find(year, marker).map_err(|e| match e {
        DecodeError::Parse(p) => DecodeError::Parse(p.within(raw_code)),
        DecodeError::MissingCollection(m) => DecodeError::MissingCollection(m.within(raw_code)),
    })?;

    let mut builder = ItemCodeBuilder::new(raw_code, line.name, line.gender, collection);
    builder.item_code = take_run(&mut rest, |c| c.is_ascii_digit());
    builder.fabric_code = take_run(&mut rest, |c| c.is_ascii_uppercase());
    builder.colour_code = take_run(&mut rest, |c| c.is_ascii_digit());
    Ok(builder.build())
}

/// Split off up to `n` chars from the front of `rest`.
fn take_chars<'a>(rest: &mut &'a str, n: usize) -> &'a str {
    let end = rest.char_indices().nth(n).map_or(rest.len(), |(i, _)| i);
    let (head, tail) = rest.split_at(end);
    *rest = tail;
    head
}

/// Longest prefix of `rest` matching `class`; may be empty. `rest` only
/// advances past the run when a char outside `class` ends it.
fn take_run(rest: &mut &str, class: impl Fn(char) -> bool) -> String {
    match rest.find(|c: char| !class(c)) {
        Some(end) => {
            let (run, tail) = rest.split_at(end);
            *rest = tail;
            s!(run)
        }
        None => s!(*rest),
    }
}

/// Accumulates validated segments; the record only exists once all are set.
struct ItemCodeBuilder {
    raw_code: String,
    line: &'static str,
    gender: Gender,
    collection: &'static Collection,
    item_code: String,
    fabric_code: String,
    colour_code: String,
}

impl ItemCodeBuilder {
    fn new(raw_code: &str, line: &'static str, gender: Gender, collection: &'static Collection) -> Self {
        Self {
            raw_code: s!(raw_code),
            line,
            gender,
            collection,
            item_code: s!(),
            fabric_code: s!(),
            colour_code: s!(),
        }
    }

    fn build(self) -> ItemCode {
        ItemCode {
            raw_code: self.raw_code,
            line: self.line,
            gender: self.gender,
            collection: self.collection,
            item_code: self.item_code,
            fabric_code: self.fabric_code,
            colour_code: self.colour_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::collections::{find, Season};
    use pretty_assertions::assert_eq;

    fn parts(code: &ItemCode) -> (&str, &str, &str) {
        (code.item_code(), code.fabric_code(), code.colour_code())
    }

    #[test]
    fn normalize_strips_separators_everywhere() {
        assert_eq!(normalize("  du15f5152-r 09 "), "DU15F5152R09");
        assert_eq!(normalize("RA19F0493GDSTB-3409"), "RA19F0493GDSTB3409");
        assert_eq!(normalize("-- ."), "");
    }

    #[test]
    fn take_chars_counts_chars_not_bytes() {
        let mut rest = "ÅB12";
        assert_eq!(take_chars(&mut rest, 2), "ÅB");
        assert_eq!(rest, "12");
        assert_eq!(take_chars(&mut rest, 5), "12");
        assert_eq!(rest, "");
        assert_eq!(take_chars(&mut rest, 1), "");
    }

    #[test]
    fn decodes_precollection_code() {
        let code = decode("RP20S1704LLP54").unwrap();
        assert_eq!(code.line(), "Precollection");
        assert_eq!(code.gender(), Gender::Women);
        assert_eq!(code.collection(), find("20", "S").unwrap());
        assert_eq!(code.collection().name, "TECUATL");
        assert_eq!(code.collection().canonical_season(), Some(Season::Spring));
        assert_eq!(parts(&code), ("1704", "LLP", "54"));
        assert_eq!(code.raw_code(), "RP20S1704LLP54");
    }

    #[test]
    fn decodes_with_fall_season_and_separator() {
        let code = decode("DU15F5152-R 09").unwrap();
        assert_eq!(code.line(), "DRKSHDW");
        assert_eq!(code.gender(), Gender::Men);
        assert_eq!(code.collection().name, "SPHINX");
        assert_eq!(parts(&code), ("5152", "R", "09"));
    }

    #[test]
    fn runs_stop_at_first_class_change() {
        let code = decode("RA19F0493GDSTB-3409").unwrap();
        assert_eq!(parts(&code), ("0493", "GDSTB", "3409"));

        let code = decode("RR20S7424LTY 2208").unwrap();
        assert_eq!(parts(&code), ("7424", "LTY", "2208"));
    }

    #[test]
    fn trailing_characters_after_colour_are_dropped() {
        let code = decode("RP20S1704LLP54XX9").unwrap();
        assert_eq!(parts(&code), ("1704", "LLP", "54"));
    }

    #[test]
    fn all_digit_remainder_fills_item_and_colour() {
        let code = decode("CW20S0004113688-09").unwrap();
        assert_eq!(parts(&code), ("000411368809", "", "000411368809"));

        let code = decode("RP20S1704").unwrap();
        assert_eq!(parts(&code), ("1704", "", "1704"));
    }

    #[test]
    fn letters_reaching_the_end_leave_colour_empty() {
        let code = decode("RP20SLLP").unwrap();
        assert_eq!(parts(&code), ("", "LLP", ""));
    }

    #[test]
    fn take_run_keeps_rest_when_run_reaches_end() {
        let mut rest = "1704";
        assert_eq!(take_run(&mut rest, |c| c.is_ascii_digit()), "1704");
        assert_eq!(rest, "1704");

        let mut rest = "1704LLP";
        assert_eq!(take_run(&mut rest, |c| c.is_ascii_digit()), "1704");
        assert_eq!(rest, "LLP");
    }

    #[test]
    fn unknown_line_names_the_whole_code() {
        let err = decode("zz20s1704").unwrap_err();
        assert_eq!(err.segment(), Segment::Line);
        assert_eq!(err.raw_input(), "zz20s1704");
        assert!(err.to_string().contains("Unknown line code"));
    }

    #[test]
    fn unknown_year_lists_known_years() {
        let err = decode("RP9 9S1704").unwrap_err();
        assert_eq!(err.segment(), Segment::Year);
        assert!(err.to_string().contains("known: 20, 19"));
    }

    #[test]
    fn registry_miss_keeps_the_raw_code() {
        let err = decode(" RP00S1704 ").unwrap_err();
        assert!(err.is_registry_miss());
        assert_eq!(err.raw_input(), "RP00S1704");
        assert_eq!(err.to_string(), "Collection 00S not found");
    }

    #[test]
    fn remainder_may_start_with_letters() {
        let code = decode("RP20SLLP54").unwrap();
        assert_eq!(parts(&code), ("", "LLP", "54"));
    }

    #[test]
    fn nothing_after_season_gives_empty_fields() {
        let code = decode("RP20S").unwrap();
        assert_eq!(parts(&code), ("", "", ""));
    }

    #[test]
    fn raw_code_is_trimmed_not_normalized() {
        let code = decode("  rp20s1704llp-54\n").unwrap();
        assert_eq!(code.raw_code(), "rp20s1704llp-54");
    }

    #[test]
    fn season_failure_reports_the_whole_code() {
        let err = decode("RP20X1704").unwrap_err();
        assert_eq!(err.segment(), Segment::Season);
        assert_eq!(err.raw_input(), "RP20X1704");

        let err = decode("RP20").unwrap_err();
        assert_eq!(err.segment(), Segment::Season);
    }

    #[test]
    fn short_inputs_fail_on_the_segment_they_run_out_in() {
        assert_eq!(decode("").unwrap_err().segment(), Segment::Line);
        assert_eq!(decode("R").unwrap_err().segment(), Segment::Line);
        assert_eq!(decode("RP").unwrap_err().segment(), Segment::Year);
        assert_eq!(decode("RP2").unwrap_err().segment(), Segment::Year);
    }

    #[test]
    fn display_reads_like_a_label() {
        let code = decode("RP19F1704LLP54").unwrap();
        assert_eq!(
            code.to_string(),
            "LARRY Women's Fall '19 | Item: 1704 | Fabric: LLP | Colour: 54"
        );
    }

    #[test]
    fn from_str_matches_decode() {
        let parsed: ItemCode = "RP20S1704LLP54".parse().unwrap();
        assert_eq!(parsed, decode("RP20S1704LLP54").unwrap());
    }
}
