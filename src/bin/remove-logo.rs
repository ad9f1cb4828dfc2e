use std::process;

use clap::Parser;
use log::LevelFilter;

use template_logo_eraser::{run, tool_dir, OUTPUT_PATH, TEMPLATE_PATH};

#[derive(Parser)]
#[command(
    name = "remove-logo",
    about = "Paint over the logo/URL strip at the bottom of the news template",
    version,
    after_help = "Reads ../public/template-news.png relative to the directory holding\n\
                  this executable, writes ../public/template-news-clean.png and\n\
                  overwrites the original. Under `cargo run` the crate directory is used."
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet {
        LevelFilter::Error
    } else if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .init();

    let dir = match tool_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::error!("Cannot locate tool directory: {e}");
            process::exit(1);
        }
    };
    log::debug!("Input: {TEMPLATE_PATH}, clean copy: {OUTPUT_PATH}");

    process::exit(run(&dir));
}
