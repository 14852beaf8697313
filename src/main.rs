use std::env;
use std::path::Path;
use std::time::Duration;

use anyhow::bail;
use indicatif::{ProgressBar, ProgressStyle};

mod cli;
mod config;
mod file_system;
mod output;
mod units;
mod utils;

use crate::config::Config;
use crate::file_system::build::build;
use crate::output::report::print_report;

fn main() -> anyhow::Result<()> {
    let config = Config::parse(env::args())?;

    let target_path = Path::new(&config.dir);
    if !target_path.exists() {
        bail!("\"{}\" was not found", config.dir);
    }
    if !target_path.is_dir() {
        bail!("\"{}\" is not a directory", config.dir);
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} Scanning... [{elapsed_precise}]")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = build(target_path, config.traversal_depth);
    pb.finish_and_clear();
    let root = result?;

    print_report(&root, root.size, config.unit_system, config.output_depth)?;

    Ok(())
}
