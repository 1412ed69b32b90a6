use std::{fs, path::PathBuf};

use duelchess::ui::renderer::{Glyphs, RenderOptions};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphStyle {
    #[default]
    Unicode,
    Ascii,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub glyphs: GlyphStyle,
    pub coordinates: bool,
    pub flipped: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            glyphs: GlyphStyle::Unicode,
            coordinates: true,
            flipped: false,
        }
    }
}

impl Config {
    /// Defaults when no path is given or the file does not exist.
    pub fn load(path: Option<&PathBuf>) -> Result<Self, ConfigError> {
        let Some(p) = path.filter(|p| p.exists()) else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(p).map_err(|source| ConfigError::Read {
            path: p.clone(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: p.clone(),
            source,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            glyphs: match self.glyphs {
                GlyphStyle::Unicode => Glyphs::Unicode,
                GlyphStyle::Ascii => Glyphs::Ascii,
            },
            coordinates: self.coordinates,
            flipped: self.flipped,
        }
    }
}
