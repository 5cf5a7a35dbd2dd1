use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "imginfo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the format and dimensions of image files", long_about = None)]
pub struct Cli {
    /// Image files to inspect
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Bytes requested from the file per read (1 to 1048576)
    #[arg(short, long, default_value_t = imginfo::io::DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Print one JSON object per file
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,
}

impl Cli {
    pub fn log_level(&self) -> tracing::Level {
        if self.debug {
            tracing::Level::TRACE
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}
