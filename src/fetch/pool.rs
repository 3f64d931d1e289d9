// src/fetch/pool.rs
use std::{
    sync::{atomic::{AtomicUsize, Ordering}, mpsc},
    thread,
};

use super::{code_from_url, FetchStore, PageSource};
use crate::progress::{NullProgress, Progress};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

enum Outcome {
    Saved { url: String },
    Failed { url: String, reason: String },
}

/// Fetch every URL with at most `workers` threads pulling from a shared index.
/// Results come back over a channel; one bad page never stops the others.
pub fn run_pool(
    urls: &[String],
    source: &dyn PageSource,
    store: &FetchStore,
    workers: usize,
    progress: Option<&mut dyn Progress>,
) -> FetchSummary {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let workers = workers.min(urls.len()).max(1);
    progress.begin(urls.len());
    progress.log(&s!("Fetching {} pages with {} workers", urls.len(), workers));

    let next = AtomicUsize::new(0);
    let (res_tx, res_rx) = mpsc::channel::<Outcome>();
    let mut summary = FetchSummary::default();

    thread::scope(|scope| {
        for _ in 0..workers {
            let next = &next;
            let tx = res_tx.clone();
            scope.spawn(move || {
                loop {
                    let i = next.fetch_add(1, Ordering::Relaxed);
                    let Some(url) = urls.get(i) else { break };
                    let _ = tx.send(fetch_one(url, source, store));
                }
            });
        }
        drop(res_tx); // this thread is sole receiver now

        for outcome in res_rx {
            match outcome {
                Outcome::Saved { url } => {
                    summary.succeeded += 1;
                    progress.item_done(code_from_url(&url));
                }
                Outcome::Failed { url, reason } => {
                    summary.failed += 1;
                    progress.item_failed(code_from_url(&url), &reason);
                }
            }
        }
    });

    progress.finish();
    logf!("Fetch: done, {} succeeded, {} failed", summary.succeeded, summary.failed);
    summary
}

fn fetch_one(url: &str, source: &dyn PageSource, store: &FetchStore) -> Outcome {
    let reason = match source.get(url) {
        Ok(page) if page.is_ok() => match store.save(url, &page.body) {
            Ok(_) => {
                logf!("Succeeded: {url} {}", page.status);
                return Outcome::Saved { url: s!(url) };
            }
            Err(e) => format!("could not save page: {e}"),
        },
        Ok(page) => format!("HTTP {}", page.status),
        Err(e) => e.to_string(),
    };

    loge!("Failed: {url} {reason}");
    if let Err(e) = store.mark_failed(url) {
        loge!("Fetch: could not mark {url} as failed: {e}");
    }
    Outcome::Failed { url: s!(url), reason }
}
