// src/codes/mod.rs
//! # Item code decoding
//!
//! Label codes are a fixed grammar over two compiled-in tables:
//! - `lines` maps the two-letter prefix to a product line and gender.
//! - `collections` lists every seasonal release, newest first, and owns
//!   season canonicalisation (`FW`/`AW`/`F` → `F`, `SS`/`S` → `S`).
//!
//! `decode` walks the code left to right, consuming fixed-width line, year
//! and season segments before splitting the remainder by character class.
//! Failures name the segment responsible. A year/season pair that parses but
//! has no table entry is a `CollectionNotFound`, kept apart from
//! `ParseFailure` so a gap in the table is not mistaken for a bad label.
//!
//! Everything here is pure and works on `'static` data, so decoding can be
//! fanned out across threads without coordination.
pub mod collections;
pub mod decode;
pub mod error;
pub mod lines;

pub use collections::{canonicalise_season, Collection, Season};
pub use decode::{decode, normalize, ItemCode};
pub use error::{CollectionNotFound, DecodeError, ParseFailure, Segment};
pub use lines::{Gender, LineEntry};
