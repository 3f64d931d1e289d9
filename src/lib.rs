// src/lib.rs
//! Decode garment label item codes into line, gender, collection and the
//! free-form item/fabric/colour sub-codes, plus the glue around it: batch
//! decoding, CSV/TSV export, and a polite page fetcher.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

pub mod codes;
pub mod config;

pub mod batch;
pub mod cli;
pub mod csv;
pub mod fetch;
pub mod file;
pub mod progress;

pub use codes::{decode, DecodeError, ItemCode, ParseFailure, Segment};
