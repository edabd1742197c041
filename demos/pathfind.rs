//! Terminal pathfinding demo: load an ASCII map, search, print the result.
//!
//! Run: cargo run --bin pathfind -- [--dual] [--budget N] [MAP_FILE]
//!
//! Set `GRIDPATH_LOG=debug` (or `trace`) to see search diagnostics.

use gridpath_demos::{Options, StderrLogger, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    StderrLogger::init_from_env("GRIDPATH_LOG")?;
    let options = Options::parse(std::env::args().skip(1))?;
    let text = match &options.map_file {
        Some(path) => std::fs::read_to_string(path)?,
        None => gridpath_demos::DEFAULT_MAP.to_string(),
    };
    print!("{}", run(&text, &options)?);
    Ok(())
}
