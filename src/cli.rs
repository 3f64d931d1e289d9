// src/cli.rs
use std::{error::Error, fs, path::PathBuf, time::{Duration, SystemTime}};

use crate::{
    batch::{self, Batch},
    codes::{collections, lines},
    config::options::AppOptions,
    csv::Delim,
    fetch::{self, FetchStore, HttpSource},
    file,
    progress::Progress,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Decode { files: Vec<PathBuf>, summary: bool },
    Fetch,
    Lines,
    Collections,
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub command: Command,
    pub options: AppOptions,
}

pub fn run(params: Params) -> Result<(), Box<dyn Error>> {
    match params.command {
        Command::Decode { files, summary } => decode(&params.options, &files, summary),
        Command::Fetch => fetch(&params.options),
        Command::Lines => {
            for l in lines::all() {
                println!("{},{},{}", l.code, l.name, l.gender);
            }
            Ok(())
        }
        Command::Collections => {
            for c in collections::all() {
                println!("{},{},{}", c.year, c.season, c.name);
            }
            Ok(())
        }
        Command::Help => {
            eprintln!(include_str!("cli_help.txt"));
            Ok(())
        }
    }
}

fn decode(options: &AppOptions, files: &[PathBuf], summary: bool) -> Result<(), Box<dyn Error>> {
    let mut all = Batch::default();
    for path in files {
        all.merge(batch::decode_file(path)?);
    }

    let export = &options.export;
    let out = file::write_export(export, &all.decoded)?;
    println!("Wrote {} codes to {}", all.decoded.len(), out.display());

    match &export.failures_path {
        Some(path) => {
            file::write_failure_report(export, path, &all.failures)?;
            println!("Wrote {} failures to {}", all.failures.len(), path.display());
        }
        None => {
            for f in &all.failures {
                eprintln!("{} {}", f.raw_code, f.error.segment());
            }
        }
    }

    if summary {
        for (line, n) in all.counts_by_line() {
            println!("{line}: {n}");
        }
        println!(
            "{} decoded, {} failed ({} missing collections)",
            all.decoded.len(),
            all.failures.len(),
            all.registry_misses()
        );
    }
    Ok(())
}

fn fetch(options: &AppOptions) -> Result<(), Box<dyn Error>> {
    let opts = &options.fetch;
    let store = FetchStore::new(&opts.store_dir);
    store.prepare()?;
    println!("Page store: {}", store.root().display());

    let text = fs::read_to_string(&opts.urls_file)?;
    let queue = fetch::fill_queue(&text, &store, opts.retry_after, SystemTime::now());
    println!("{} items added to queue", queue.len());
    if queue.is_empty() {
        return Ok(());
    }

    let source = HttpSource::new()?;
    let mut progress = ConsoleProgress::default();
    let summary = fetch::run_pool(&queue, &source, &store, opts.workers, Some(&mut progress as &mut dyn Progress));
    println!("Fetched {}, failed {}", summary.succeeded, summary.failed);
    Ok(())
}

/// Prints one line per page.
#[derive(Default)]
struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) { self.total = total; }

    fn log(&mut self, msg: &str) { println!("{msg}"); }

    fn item_done(&mut self, code: &str) {
        self.done += 1;
        println!("[{}/{}] Succeeded: {code}", self.done, self.total);
    }

    fn item_failed(&mut self, code: &str, reason: &str) {
        self.done += 1;
        println!("[{}/{}] Failed: {code} ({reason})", self.done, self.total);
    }
}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<Params, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut options = AppOptions::default();
    let mut args = args.into_iter();

    let command = match args.next().as_deref() {
        None | Some("-h") | Some("--help") => Command::Help,
        Some("lines") => Command::Lines,
        Some("collections") => Command::Collections,
        Some("decode") => {
            let mut files = Vec::new();
            let mut summary = false;
            while let Some(a) = args.next() {
                match a.as_str() {
                    "-o" | "--out" => {
                        let v = args.next().ok_or("Missing output path")?;
                        options.export.set_path(&v);
                    }
                    "--format" => {
                        let v = args.next().ok_or("Missing value for --format")?;
                        options.export.format = match v.to_ascii_lowercase().as_str() {
                            "csv" => Delim::Csv,
                            "tsv" => Delim::Tsv,
                            other => return Err(format!("Unknown format: {}", other).into()),
                        };
                    }
                    "--include-headers" => options.export.include_headers = true,
                    "--failures" => {
                        let v = args.next().ok_or("Missing failures path")?;
                        options.export.failures_path = Some(PathBuf::from(v));
                    }
                    "--summary" => summary = true,
                    "-h" | "--help" => return Ok(Params { command: Command::Help, options }),
                    s if s.starts_with('-') => return Err(format!("Unknown arg: {}", a).into()),
                    _ => files.push(PathBuf::from(&a)),
                }
            }
            if files.is_empty() {
                return Err("decode needs at least one input file".into());
            }
            Command::Decode { files, summary }
        }
        Some("fetch") => {
            let mut urls_file = None;
            while let Some(a) = args.next() {
                match a.as_str() {
                    "--store" => {
                        let v = args.next().ok_or("Missing store dir")?;
                        options.fetch.store_dir = PathBuf::from(v);
                    }
                    "--workers" => {
                        let v: usize = args.next().ok_or("Missing worker count")?.parse()?;
                        if v == 0 { return Err("Worker count must be at least 1".into()); }
                        options.fetch.workers = v;
                    }
                    "--retry-hours" => {
                        let v: u64 = args.next().ok_or("Missing value for --retry-hours")?.parse()?;
                        let secs = v.checked_mul(60 * 60).ok_or("--retry-hours too large")?;
                        options.fetch.retry_after = Duration::from_secs(secs);
                    }
                    "-h" | "--help" => return Ok(Params { command: Command::Help, options }),
                    s if s.starts_with('-') => return Err(format!("Unknown arg: {}", a).into()),
                    _ if urls_file.is_none() => urls_file = Some(PathBuf::from(&a)),
                    _ => return Err(format!("Unexpected arg: {}", a).into()),
                }
            }
            options.fetch.urls_file = urls_file.ok_or("fetch needs a URLs file")?;
            Command::Fetch
        }
        Some(other) => return Err(format!("Unknown command: {}", other).into()),
    };

    Ok(Params { command, options })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn parse(args: &[&str]) -> Result<Params, Box<dyn Error>> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_args_is_help() {
        assert_eq!(parse(&[]).unwrap().command, Command::Help);
    }

    #[test]
    fn decode_flags() {
        let p = parse(&["decode", "a.txt", "--format", "TSV", "--include-headers", "-o", "res/codes", "b.txt", "--summary"]).unwrap();
        assert_eq!(
            p.command,
            Command::Decode { files: vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")], summary: true }
        );
        assert_eq!(p.options.export.format, Delim::Tsv);
        assert!(p.options.export.include_headers);
        assert_eq!(p.options.export.out_path(), Path::new("res").join("codes.tsv"));
    }

    #[test]
    fn decode_requires_files() {
        assert!(parse(&["decode"]).is_err());
        assert!(parse(&["decode", "--bogus", "a.txt"]).is_err());
    }

    #[test]
    fn fetch_flags() {
        let p = parse(&["fetch", "urls.txt", "--workers", "4", "--store", "pages", "--retry-hours", "2"]).unwrap();
        assert_eq!(p.command, Command::Fetch);
        assert_eq!(p.options.fetch.urls_file, PathBuf::from("urls.txt"));
        assert_eq!(p.options.fetch.workers, 4);
        assert_eq!(p.options.fetch.store_dir, PathBuf::from("pages"));
        assert_eq!(p.options.fetch.retry_after, Duration::from_secs(7200));
    }

    #[test]
    fn fetch_rejects_zero_workers_and_missing_file() {
        assert!(parse(&["fetch", "urls.txt", "--workers", "0"]).is_err());
        assert!(parse(&["fetch"]).is_err());
    }

    #[test]
    fn huge_retry_hours_is_an_error_not_a_panic() {
        let err = parse(&["fetch", "u.txt", "--retry-hours", "18446744073709551615"]).unwrap_err();
        assert_eq!(err.to_string(), "--retry-hours too large");
        assert!(parse(&["fetch", "u.txt", "--retry-hours", "5124095576030431"]).is_ok());
    }
}
