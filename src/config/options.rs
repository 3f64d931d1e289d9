// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;
use crate::csv::Delim;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub urls_file: PathBuf,
    pub store_dir: PathBuf,
    pub workers: usize,
    pub retry_after: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            urls_file: PathBuf::from("codes.txt"),
            store_dir: PathBuf::from(STORE_DIR),
            workers: WORKERS,
            retry_after: Duration::from_secs(RETRY_AFTER_SECS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: Delim,
    out_path: OutputPath,
    pub include_headers: bool,
    /// Failed codes go here when set; otherwise they are only logged.
    pub failures_path: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: Delim::Csv,
            out_path: OutputPath::default(),
            include_headers: false,
            failures_path: None,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; the format picks the extension unless the user gave one.
    pub fn out_path(&self) -> PathBuf {
        let mut name = self.out_path.file_stem.clone();
        name.push(".");
        match &self.out_path.ext {
            Some(ext) => name.push(ext),
            None => name.push(self.format.ext()),
        }
        self.out_path.dir.join(name)
    }

    /// Parse user text into dir + stem (+ extension, if typed).
    /// A trailing separator or an existing directory keeps the default file name.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            return;
        }
        let p = Path::new(s);
        if looks_like_dir_hint(p) || p.is_dir() {
            self.out_path.dir = p.to_path_buf();
            return;
        }
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
    }
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}
