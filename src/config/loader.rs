use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::core::{ChainConfig, PageScoreConfig};
use super::scoring::ScoringConfig;
use super::thresholds::ThresholdsConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".pagescore.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse a TOML document and validate each section.
///
/// A section that fails validation is replaced by its defaults with a
/// warning; only a document that is not valid TOML is an error.
pub fn parse_and_validate_config(contents: &str) -> Result<PageScoreConfig> {
    let mut config = toml::from_str::<PageScoreConfig>(contents).map_err(|e| {
        Error::Configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
    })?;

    if let Err(e) = config.scoring.validate() {
        warn!("Invalid scoring curves: {}. Using defaults.", e);
        config.scoring = ScoringConfig::default();
    }

    if let Err(e) = config.thresholds.validate() {
        warn!("Invalid thresholds: {}. Using defaults.", e);
        config.thresholds = ThresholdsConfig::default();
    }

    if let Err(e) = config.chains.validate() {
        warn!("Invalid chain settings: {}. Using defaults.", e);
        config.chains = ChainConfig::default();
    }

    Ok(config)
}

/// Read and parse a specific config file
pub fn load_config_file(path: &Path) -> Result<PageScoreConfig> {
    let contents = fs::read_to_string(path)?;
    parse_and_validate_config(&contents)
}

fn try_load_config_from_path(config_path: &Path) -> Option<PageScoreConfig> {
    match load_config_file(config_path) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(Error::Io(e)) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            None
        }
        Err(e) => {
            warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Generate `start` and its ancestors, nearest first, up to `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest `.pagescore.toml` at or above `start`
pub fn load_config_from(start: &Path) -> PageScoreConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            PageScoreConfig::default()
        })
}

/// Find the nearest `.pagescore.toml` starting from the working directory
pub fn load_config() -> PageScoreConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            PageScoreConfig::default()
        }
    }
}
