// src/fetch/store.rs
use std::{
    collections::HashSet,
    fs::{self, OpenOptions},
    io,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use crate::config::consts::{FAILED_SUBDIR, FETCHED_EXT, FETCHED_SUBDIR};

/// Last path segment of a URL; pages are stored under this name.
pub fn code_from_url(url: &str) -> &str {
    let url = url.trim().trim_end_matches('/');
    url.rsplit('/').next().unwrap_or(url)
}

/// On-disk record of what has been fetched and what failed.
#[derive(Clone, Debug)]
pub struct FetchStore {
    root: PathBuf,
}

impl FetchStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path { &self.root }

    pub fn fetched_dir(&self) -> PathBuf { self.root.join(FETCHED_SUBDIR) }
    pub fn failed_dir(&self) -> PathBuf { self.root.join(FAILED_SUBDIR) }

    pub fn fetched_path(&self, code: &str) -> PathBuf {
        self.fetched_dir().join(format!("{code}.{FETCHED_EXT}"))
    }

    pub fn failed_path(&self, code: &str) -> PathBuf {
        self.failed_dir().join(code)
    }

    pub fn prepare(&self) -> io::Result<()> {
        fs::create_dir_all(self.fetched_dir())?;
        fs::create_dir_all(self.failed_dir())
    }

    pub fn is_fetched(&self, url: &str) -> bool {
        self.fetched_path(code_from_url(url)).exists()
    }

    /// A failure marker younger than `retry_after` (or dated in the future).
    pub fn failed_recently(&self, url: &str, retry_after: Duration, now: SystemTime) -> bool {
        let Ok(mtime) = fs::metadata(self.failed_path(code_from_url(url))).and_then(|m| m.modified()) else {
            return false;
        };
        match now.duration_since(mtime) {
            Ok(age) => age <= retry_after,
            Err(_) => true,
        }
    }

    pub fn needs_fetch(&self, url: &str, retry_after: Duration, now: SystemTime) -> bool {
        !self.is_fetched(url) && !self.failed_recently(url, retry_after, now)
    }

    /// Store a fetched body and clear any stale failure marker.
    pub fn save(&self, url: &str, body: &[u8]) -> io::Result<PathBuf> {
        let code = code_from_url(url);
        let path = self.fetched_path(code);
        fs::write(&path, body)?;
        match fs::remove_file(self.failed_path(code)) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => return Err(e),
            _ => {}
        }
        Ok(path)
    }

    /// Touch the failure marker so the retry window restarts now.
    pub fn mark_failed(&self, url: &str) -> io::Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.failed_path(code_from_url(url)))?;
        file.set_modified(SystemTime::now())
    }
}

/// URLs from `text` that still need fetching, in file order, without repeats.
pub fn fill_queue(text: &str, store: &FetchStore, retry_after: Duration, now: SystemTime) -> Vec<String> {
    let mut seen = HashSet::new();
    let queue: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .filter(|url| seen.insert(*url))
        .filter(|url| {
            let needed = store.needs_fetch(url, retry_after, now);
            if !needed {
                logd!("Fetch: skipping {url}");
            }
            needed
        })
        .map(String::from)
        .collect();
    logf!("Fetch: {} items added to queue", queue.len());
    queue
}
