//! Scenario files for the chase demo.
//!
//! A scenario is a TOML document. Every key is optional; missing keys fall
//! back to [`ScenarioConfig::default`].
//!
//! ```toml
//! adjacency = "four"        # or "eight"
//! max_search_depth = 4
//! seed = 42                 # omit for an OS-seeded run
//! max_ticks = 100
//! map = """
//! #######
//! #@.E.>#
//! #######
//! """
//!
//! [selector]
//! tie_break = "tied"        # or "any_candidate"
//! on_no_moves = "error"     # or "stay"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use evade_grid::Adjacency;
use evade_paths::SelectorConfig;
use serde::Deserialize;

const DEFAULT_MAP: &str = "\
####################
#@.......#.........#
#.######.#.######..#
#......#...#....#..#
#.####.#####.##.#..#
#....#...E...#.....#
####.#.#####.#.###.#
#......#.........#>#
####################";

/// Errors raised while loading a scenario.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid scenario: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("max_search_depth must be non-negative, got {0}")]
    NegativeDepth(i32),
}

/// Everything needed to run one chase.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Map text with `@`, `E` and `>` markers.
    pub map: String,
    pub adjacency: Adjacency,
    /// Upper bound for the adversary horizon drawn each tick.
    pub max_search_depth: i32,
    pub seed: Option<u64>,
    pub max_ticks: u32,
    pub selector: SelectorConfig,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            map: DEFAULT_MAP.to_string(),
            adjacency: Adjacency::Four,
            max_search_depth: 4,
            seed: None,
            max_ticks: 200,
            selector: SelectorConfig::default(),
        }
    }
}

impl ScenarioConfig {
    /// Load a scenario from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse a scenario from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(s)?;
        if cfg.max_search_depth < 0 {
            return Err(ConfigError::NegativeDepth(cfg.max_search_depth));
        }
        Ok(cfg)
    }
}
