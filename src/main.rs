use alpine_explorer::cli::Cli;
use alpine_explorer::commands::{run, SummarizeOptions};
use clap::Parser;

// Main orchestrator function
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let opts = SummarizeOptions {
        results_dir: cli.results_dir,
    };

    if let Err(err) = run(opts) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
