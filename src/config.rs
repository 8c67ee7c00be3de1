use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Upper bound on the worker pool size accepted from configuration.
pub const MAX_JOBS: usize = 1024;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dispatch: DispatchConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Parallel clean jobs (0 = auto)
    pub jobs: usize,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the per-user file under the
    /// platform config directory is used when present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.is_file() => p,
                _ => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// `~/.config/sweep-all/config.toml` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("sweep-all").join("config.toml"))
    }

    /// Pool size for this run: `cli_jobs` when given, else `dispatch.jobs`.
    /// Either source is held to [`MAX_JOBS`].
    pub fn effective_jobs(&self, cli_jobs: Option<usize>) -> Result<usize> {
        let jobs = cli_jobs.unwrap_or(self.dispatch.jobs);
        check_jobs(jobs)?;
        Ok(jobs)
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        check_jobs(self.dispatch.jobs)
    }
}

fn check_jobs(jobs: usize) -> std::result::Result<(), ConfigError> {
    if jobs > MAX_JOBS {
        return Err(ConfigError::Invalid(format!(
            "jobs must be at most {}, got {}",
            MAX_JOBS, jobs
        )));
    }
    Ok(())
}
