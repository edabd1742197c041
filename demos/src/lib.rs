//! Shared code for the gridpath demos.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use gridpath_core::{MapError, ObstacleMap};
use gridpath_search::{PathRequest, RequestError, SearchConfig, SearchMode};
use log::{LevelFilter, Log, Metadata, Record};

/// Map used when no file is given: the goal sits behind a wall with a gap
/// at the bottom.
pub const DEFAULT_MAP: &str = "\
....................
..S.......#.........
..........#.........
....#######.........
..........#.....G...
..........#.........
..........#.........
....................";

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Demo command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub mode: SearchMode,
    pub budget: usize,
    pub map_file: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        let config = SearchConfig::default();
        Self {
            mode: config.mode,
            budget: config.iteration_budget,
            map_file: None,
        }
    }
}

impl Options {
    /// Parse `[--dual] [--budget N] [MAP_FILE]`.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, DemoError> {
        let mut opts = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--dual" => opts.mode = SearchMode::Dual,
                "--single" => opts.mode = SearchMode::Single,
                "--budget" => {
                    let value = args.next().ok_or(DemoError::MissingValue("--budget"))?;
                    opts.budget = value
                        .parse()
                        .map_err(|_| DemoError::InvalidValue("--budget", value))?;
                }
                s if s.starts_with("--") => return Err(DemoError::UnknownFlag(arg)),
                _ => opts.map_file = Some(PathBuf::from(arg)),
            }
        }
        Ok(opts)
    }

    fn config(&self) -> SearchConfig {
        SearchConfig {
            mode: self.mode,
            iteration_budget: self.budget,
            ..SearchConfig::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Running
// ---------------------------------------------------------------------------

/// Search the map in `text` from its `S` to its `G` and return the rendered
/// map followed by a one-line summary.
pub fn run(text: &str, options: &Options) -> Result<String, DemoError> {
    let map = ObstacleMap::parse(text)?;
    let start = map.start().ok_or(DemoError::MissingMarker('S'))?;
    let goal = map.goal().ok_or(DemoError::MissingMarker('G'))?;
    let request = PathRequest::new(map.bounds(), start, goal)?.with_config(options.config())?;

    let result = request.search(&map);

    let mut out = map.render(&result.path, &result.explored);
    out.push('\n');
    out.push_str(&format!(
        "{:?}: {} cells, cost {:.2}, {} explored, {} iterations\n",
        result.outcome,
        result.path.len(),
        result.cost(),
        result.explored.len(),
        result.forward.iterations,
    ));
    Ok(out)
}

/// Errors reported by the demo binary.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoError {
    Map(MapError),
    Request(RequestError),
    /// The map lacks an `S` or `G` marker.
    MissingMarker(char),
    MissingValue(&'static str),
    InvalidValue(&'static str, String),
    UnknownFlag(String),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Map(e) => write!(f, "{e}"),
            Self::Request(e) => write!(f, "{e}"),
            Self::MissingMarker(ch) => write!(f, "map has no '{ch}' marker"),
            Self::MissingValue(flag) => write!(f, "{flag} needs a value"),
            Self::InvalidValue(flag, v) => write!(f, "invalid value for {flag}: {v}"),
            Self::UnknownFlag(flag) => write!(f, "unknown flag {flag}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Map(e) => Some(e),
            Self::Request(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MapError> for DemoError {
    fn from(e: MapError) -> Self {
        Self::Map(e)
    }
}

impl From<RequestError> for DemoError {
    fn from(e: RequestError) -> Self {
        Self::Request(e)
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Minimal `log` backend writing `LEVEL target: message` lines to stderr.
pub struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl StderrLogger {
    /// Install the logger with the level named by environment variable
    /// `var` (`off`, `error`, `warn`, `info`, `debug`, `trace`); `warn` if
    /// unset or unrecognised.
    pub fn init_from_env(var: &str) -> Result<(), log::SetLoggerError> {
        let level = std::env::var(var)
            .ok()
            .and_then(|v| LevelFilter::from_str(&v).ok())
            .unwrap_or(LevelFilter::Warn);
        log::set_logger(&LOGGER)?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &[&str]) -> Vec<String> {
        s.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn parse_defaults() {
        let o = Options::parse(args(&[])).unwrap();
        assert_eq!(o, Options::default());
        assert_eq!(o.budget, 1000);
        assert_eq!(o.mode, SearchMode::Single);
    }

    #[test]
    fn parse_flags_and_file() {
        let o = Options::parse(args(&["--dual", "--budget", "250", "maps/room.txt"])).unwrap();
        assert_eq!(o.mode, SearchMode::Dual);
        assert_eq!(o.budget, 250);
        assert_eq!(o.map_file, Some(PathBuf::from("maps/room.txt")));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Options::parse(args(&["--budget"])),
            Err(DemoError::MissingValue("--budget"))
        );
        assert_eq!(
            Options::parse(args(&["--budget", "-3"])),
            Err(DemoError::InvalidValue("--budget", "-3".to_string()))
        );
        assert_eq!(
            Options::parse(args(&["--fast"])),
            Err(DemoError::UnknownFlag("--fast".to_string()))
        );
    }

    #[test]
    fn default_map_is_solved() {
        let out = run(DEFAULT_MAP, &Options::default()).unwrap();
        assert!(out.contains("Reached"));
        assert!(out.contains('*'));
    }

    #[test]
    fn walled_off_goal_falls_back_in_both_modes() {
        let map = "\
S..#...
...#.G.
...#...";
        for mode in [SearchMode::Single, SearchMode::Dual] {
            let options = Options {
                mode,
                ..Options::default()
            };
            let out = run(map, &options).unwrap();
            assert!(out.contains("Fallback"), "{out}");
        }
    }

    #[test]
    fn logger_installs_once_and_errors_box() {
        // The only test that touches the global logger.
        assert!(StderrLogger::init_from_env("GRIDPATH_TEST_LOG_UNSET").is_ok());
        assert_eq!(log::max_level(), LevelFilter::Warn);
        let err = StderrLogger::init_from_env("GRIDPATH_TEST_LOG_UNSET").unwrap_err();
        let boxed: Box<dyn std::error::Error> = err.into();
        assert!(!boxed.to_string().is_empty());
    }

    #[test]
    fn missing_marker_is_reported() {
        assert_eq!(
            run("S..\n...", &Options::default()),
            Err(DemoError::MissingMarker('G'))
        );
        assert!(matches!(
            run("S.x\n..G", &Options::default()),
            Err(DemoError::Map(_))
        ));
    }
}
