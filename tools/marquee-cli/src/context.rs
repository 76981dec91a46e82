//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use marquee_catalog::{load_movies, Movie};

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self {
            config,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some(config),
                        Err(e) => {
                            tracing::warn!(path = %config_path.display(), "ignoring config: {:#}", e)
                        }
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Read movie records, warning about records with blank required fields.
    pub fn load_movies(&self, path: &str) -> Result<Vec<Movie>> {
        let resolved = self.resolve_path(path);
        let movies = load_movies(&resolved)
            .with_context(|| format!("Failed to load movies from {}", resolved.display()))?;

        for movie in &movies {
            if let Err(e) = movie.check_required() {
                tracing::warn!(movie_id = %movie.id, "{}", e);
                self.output
                    .warn(&format!("{}: {}", display_id(movie), e));
            }
        }

        self.output
            .debug(&format!("Loaded {} movie(s) from {}", movies.len(), resolved.display()));
        Ok(movies)
    }
}

fn display_id(movie: &Movie) -> String {
    if movie.id.as_str().is_empty() {
        "<no id>".to_string()
    } else {
        movie.id.to_string()
    }
}
