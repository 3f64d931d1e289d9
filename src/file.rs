// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::batch::FailedCode;
use crate::codes::ItemCode;
use crate::config::options::ExportOptions;
use crate::csv;

/// Write decoded items to the file named by `export`. Returns the path written.
pub fn write_export(export: &ExportOptions, items: &[ItemCode]) -> io::Result<PathBuf> {
    let path = export.out_path();
    ensure_parent(&path)?;

    let mut out = BufWriter::new(File::create(&path)?); // truncate/overwrite
    csv::write_items(&mut out, items, export.include_headers, export.format)?;
    out.flush()?;
    Ok(path)
}

/// Failure report next to the export, same delimiter and header policy.
pub fn write_failure_report(
    export: &ExportOptions,
    path: &Path,
    failures: &[FailedCode],
) -> io::Result<()> {
    ensure_parent(path)?;
    let mut out = BufWriter::new(File::create(path)?);
    csv::write_failures(&mut out, failures, export.include_headers, export.format)?;
    out.flush()
}

fn ensure_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
