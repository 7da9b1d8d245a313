//! Runtime configuration: database location and rendering settings.
//!
//! Loaded once by the binary and handed to every operation explicitly.

use crate::error::AppError;
use crate::infra::CityDb;
use crate::render::RenderOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "city-map";
const MAX_IMAGE_SIDE: u32 = 8192;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub font_path: Option<PathBuf>,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_database() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR).join("cities.db")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_width() -> u32 {
    RenderOptions::default().width
}

fn default_height() -> u32 {
    RenderOptions::default().height
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            output_dir: default_output_dir(),
            font_path: None,
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Config {
    /// `<config_dir>/city-map/config.json`
    pub fn get_config_path() -> Result<PathBuf, AppError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AppError::Config("could not determine config directory".into()))?;
        Ok(config_dir.join(APP_DIR).join("config.json"))
    }

    /// Load from the default location, falling back to defaults if absent.
    pub fn load() -> Result<Self, AppError> {
        let path = Self::get_config_path()?;
        if !path.exists() {
            log::info!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load_from_path(&path)
    }

    /// Load from a specific file. A missing file is an error here.
    pub fn load_from_path(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("read {}: {}", path.display(), e)))?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("parse {}: {}", path.display(), e)))?;
        config.validate()?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.database.as_os_str().is_empty() {
            return Err(AppError::Config("database path is empty".into()));
        }
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_IMAGE_SIDE {
                return Err(AppError::Config(format!(
                    "{} must be between 1 and {}, got {}",
                    name, MAX_IMAGE_SIDE, value
                )));
            }
        }
        Ok(())
    }

    pub fn db(&self) -> CityDb {
        CityDb::new(&self.database)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            height: self.height,
            output_dir: self.output_dir.clone(),
            font_path: self.font_path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "database": "/tmp/x/cities.db", "output_dir": "out", "width": 800 }"#,
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.database, PathBuf::from("/tmp/x/cities.db"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 640);
        assert!(config.font_path.is_none());
        assert_eq!(config.db().path(), Path::new("/tmp/x/cities.db"));
        assert_eq!(
            config.render_options().distance_map_path(),
            PathBuf::from("out/distance_map.png")
        );
    }

    #[test]
    fn empty_object_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();
        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.database.ends_with("city-map/cities.db"));
    }

    #[test]
    fn missing_file_is_config_error() {
        let dir = tempdir().unwrap();
        let err = Config::load_from_path(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }

    #[test]
    fn malformed_json_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ database: ").unwrap();
        assert_eq!(Config::load_from_path(&path).unwrap_err().code(), "CONFIG_ERROR");
    }

    #[test]
    fn zero_width_rejected() {
        let config = Config {
            width: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
