// src/progress.rs

/// Status hooks for the fetch pool. Every method has a no-op default,
/// so callers only override what they display.
pub trait Progress {
    /// Queue size, sent once before any page is requested.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line.
    fn log(&mut self, _msg: &str) {}

    /// A page was saved under `code`.
    fn item_done(&mut self, _code: &str) {}

    /// A page could not be fetched; `reason` is already human readable.
    fn item_failed(&mut self, _code: &str, _reason: &str) {}

    fn finish(&mut self) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NullProgress;
impl Progress for NullProgress {}
