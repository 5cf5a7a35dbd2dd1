mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

use cli::Cli;
use imginfo::{Decision, FeedOptions, ImageInfo};

#[derive(Serialize)]
struct Report<'a> {
    file: &'a Path,
    #[serde(flatten)]
    info: ImageInfo,
    mime: &'static str,
    bytes_read: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let options = FeedOptions::default()
        .with_chunk_size(cli.chunk_size)
        .context("Invalid --chunk-size")?;

    let results: Vec<(&PathBuf, imginfo::Result<Decision<ImageInfo>>)> = cli
        .files
        .par_iter()
        .map(|path| (path, imginfo::get_info_from_file(path, &options)))
        .collect();

    let mut failures = 0usize;
    for (path, result) in results {
        match result {
            Ok(Decision {
                value: Some(info),
                consumed,
                ..
            }) => print_info(path, info, consumed, cli.json)?,
            Ok(decision) => {
                failures += 1;
                tracing::debug!(
                    file = %path.display(),
                    consumed = decision.consumed,
                    "rejected by every parser"
                );
                eprintln!("{}: not a recognised image", path.display());
            }
            Err(e) => {
                failures += 1;
                eprintln!("{}: {e}", path.display());
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} files could not be identified", cli.files.len());
    }
    Ok(())
}

fn print_info(path: &Path, info: ImageInfo, consumed: usize, json: bool) -> Result<()> {
    if json {
        let report = Report {
            file: path,
            info,
            mime: info.format.mime_type(),
            bytes_read: consumed,
        };
        let line = serde_json::to_string(&report).context("Failed to serialize report")?;
        println!("{line}");
    } else {
        println!("File:\t{}", path.display());
        println!("Type:\t{}", info.format);
        println!("Size:\t{}", info.dimensions);
        println!("Mime:\t{}", info.format.mime_type());
        println!("Read:\t{consumed} bytes");
    }
    Ok(())
}
