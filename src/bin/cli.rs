// src/bin/cli.rs
use std::path::Path;

use color_eyre::eyre::eyre;
use item_codes::{cli, config::consts::LOG_FILE, logging};
use log::LevelFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    if let Err(e) = logging::init(Path::new(LOG_FILE), LevelFilter::Info) {
        eprintln!("Warning: logging disabled: {e}");
    }

    let params = cli::parse_args(std::env::args().skip(1)).map_err(|e| eyre!("{e}"))?;
    cli::run(params).map_err(|e| eyre!("{e}"))
}
