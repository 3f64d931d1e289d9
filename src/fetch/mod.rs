// src/fetch/mod.rs
//! # Page fetcher
//!
//! Downloads item pages listed one URL per line. Retries work by absence:
//! a page already under `fetched/` is never requested again, and a page with a
//! marker under `failed/` is skipped until the marker is older than the retry
//! window. Nothing else is remembered between runs.
//!
//! ```text
//! urls file → fill_queue (store filters) → run_pool (N workers) → PageSource
//!                                              ↘ store.save / store.mark_failed
//! ```
mod net;
mod pool;
mod store;

pub use net::{HttpSource, Page, PageSource};
pub use pool::{run_pool, FetchSummary};
pub use store::{code_from_url, fill_queue, FetchStore};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
