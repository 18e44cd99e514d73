//! Finds and reads the `AppConfig` for a run.
//!
//! `--config` wins. Otherwise the first existing file among
//! `lineage/config.toml` in the working directory and `config.toml` in the
//! platform config directory is used. With neither, the defaults apply.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use lineage::{LineageError, config::AppConfig};

#[derive(Debug, Error)]
enum ConfigError {
    #[error("cannot read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("`{}` is not a valid configuration: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl From<ConfigError> for LineageError {
    fn from(err: ConfigError) -> Self {
        LineageError::Config(err.to_string())
    }
}

pub fn load_config(explicit: Option<impl AsRef<Path>>) -> Result<AppConfig, LineageError> {
    let path = match explicit {
        Some(path) => path.as_ref().to_path_buf(),
        None => match locate() {
            Some(path) => path,
            None => {
                debug!("No configuration file, using defaults");
                return Ok(AppConfig::default());
            }
        },
    };

    info!(path:% = path.display(); "Reading configuration");
    Ok(read(&path)?)
}

/// The first implicit config file that exists.
fn locate() -> Option<PathBuf> {
    let local = PathBuf::from("lineage").join("config.toml");
    let platform = ProjectDirs::from("org", "lineage", "lineage")
        .map(|dirs| dirs.config_dir().join("config.toml"));

    std::iter::once(local)
        .chain(platform)
        .find(|candidate| candidate.is_file())
}

fn read(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
