use clap::Parser;
use log::{error, info};

use openimages2manifest::config::Args;
use openimages2manifest::dataset;

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    info!("Starting manifest construction...");
    match dataset::run(&args) {
        Ok(stats) => info!(
            "Wrote {} manifest entries to {}",
            stats.images_written,
            args.output_path.display()
        ),
        Err(e) => {
            error!("Manifest construction failed: {}", e);
            std::process::exit(1);
        }
    }
}
