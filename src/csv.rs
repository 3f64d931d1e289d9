// src/csv.rs
use std::io::{self, Write};

use crate::batch::FailedCode;
use crate::codes::ItemCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn char(self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }
    pub fn ext(self) -> &'static str {
        match self { Delim::Csv => "csv", Delim::Tsv => "tsv" }
    }
}

pub const ITEM_HEADERS: [&str; 8] = [
    "raw_code", "item_line", "item_gender", "item_season",
    "item_year", "item_code", "item_fabric", "item_colour",
];

pub const FAILURE_HEADERS: [&str; 3] = ["raw_code", "segment", "message"];

/* ---------------- Rows ---------------- */

pub fn item_row(item: &ItemCode) -> Vec<String> {
    let collection = item.collection();
    vec![
        s!(item.raw_code()),
        s!(item.line()),
        s!(item.gender().as_str()),
        collection.canonical_season().map(|s| s!(s.letter())).unwrap_or_default(),
        s!(collection.year),
        s!(item.item_code()),
        s!(item.fabric_code()),
        s!(item.colour_code()),
    ]
}

pub fn failure_row(failed: &FailedCode) -> Vec<String> {
    vec![
        failed.raw_code.clone(),
        s!(failed.error.segment().as_str()),
        failed.error.to_string(),
    ]
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], delim: Delim) -> io::Result<()> {
    let sep = delim.char();
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

pub fn write_items<W: Write>(mut w: W, items: &[ItemCode], include_headers: bool, delim: Delim) -> io::Result<()> {
    if include_headers {
        write_row(&mut w, &ITEM_HEADERS[..], delim)?;
    }
    for item in items {
        write_row(&mut w, item_row(item).as_slice(), delim)?;
    }
    Ok(())
}

pub fn write_failures<W: Write>(mut w: W, failures: &[FailedCode], include_headers: bool, delim: Delim) -> io::Result<()> {
    if include_headers {
        write_row(&mut w, &FAILURE_HEADERS[..], delim)?;
    }
    for failed in failures {
        write_row(&mut w, failure_row(failed).as_slice(), delim)?;
    }
    Ok(())
}

/* ---------------- Convenience: whole export as a string ---------------- */

fn into_string(buf: Vec<u8>) -> String {
    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

pub fn items_to_string(items: &[ItemCode], include_headers: bool, delim: Delim) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_items(&mut buf, items, include_headers, delim);
    into_string(buf)
}

pub fn failures_to_string(failures: &[FailedCode], include_headers: bool, delim: Delim) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_failures(&mut buf, failures, include_headers, delim);
    into_string(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::decode;
    use pretty_assertions::assert_eq;

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["a", "b,c", "say \"hi\"", "x\ny"][..], Delim::Csv).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,\"b,c\",\"say \"\"hi\"\"\",\"x\ny\"\n");

        let mut buf = Vec::new();
        write_row(&mut buf, &["b,c", "d"][..], Delim::Tsv).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "b,c\td\n");
    }

    #[test]
    fn item_row_uses_canonical_season() {
        let item = decode("RP20S1704LLP 54").unwrap();
        assert_eq!(
            item_row(&item),
            ["RP20S1704LLP 54", "Precollection", "Women", "S", "20", "1704", "LLP", "54"]
        );
    }

    #[test]
    fn items_export_with_headers() {
        let items = vec![decode("DU15F5152-R 09").unwrap()];
        let out = items_to_string(&items, true, Delim::Csv);
        assert_eq!(
            out,
            "raw_code,item_line,item_gender,item_season,item_year,item_code,item_fabric,item_colour\n\
             DU15F5152-R 09,DRKSHDW,Men,F,15,5152,R,09\n"
        );
    }

    #[test]
    fn failure_rows_name_the_segment() {
        let failures = vec![FailedCode {
            raw_code: s!("RP02S1"),
            error: decode("RP02S1").unwrap_err(),
        }];
        let out = failures_to_string(&failures, false, Delim::Tsv);
        assert_eq!(out, "RP02S1\tCollection\tCollection 02S not found\n");
    }
}
