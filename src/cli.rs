use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "alpine-explorer")]
#[command(about = "Summarize per-geography results from an ALPINE run", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing one subdirectory of results per geography
    #[arg(short = 'd', long = "results-dir", default_value = ".")]
    pub results_dir: PathBuf,
}
