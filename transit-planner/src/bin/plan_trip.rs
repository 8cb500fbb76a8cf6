//! Interactive trip planner.
//!
//! Usage: `plan-trip [DATA_DIR]`. The data directory defaults to
//! `$TRANSIT_DATA_DIR`, then `data`.

use std::error::Error;
use std::io;
use std::path::PathBuf;

use transit_planner::cli::Prompt;
use transit_planner::config::DATA_DIR_VAR;
use transit_planner::data::load_data_dir;
use transit_planner::fare::FareSession;
use transit_planner::logging::init_logging;

fn main() -> Result<(), Box<dyn Error>> {
    // Keep the prompt readable unless RUST_LOG asks for more
    init_logging("warn");

    let dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(DATA_DIR_VAR).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("data"));

    let data = load_data_dir(&dir)?;

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());
    prompt.run(&data.network, &data.rules, FareSession::Inactive)?;
    Ok(())
}
