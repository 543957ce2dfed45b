use std::{
    io,
    path::{Path, PathBuf},
};

use binpack::{
    FitPolicy, IndexRect, Pack, PackOptions, Rect, SortKey, SortOrder, SplitPolicy, Vec2,
};
use fs_err as fs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Describes one packing run, contained in a TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PackConfig {
    /// The extent the packed layout is normalized into.
    #[serde(default = "default_output_size")]
    pub output_size: (f64, f64),

    #[serde(default)]
    pub sort_key: SortKey,

    #[serde(default)]
    pub sort_order: SortOrder,

    #[serde(default)]
    pub fit: FitPolicy,

    #[serde(default)]
    pub split: SplitPolicy,

    /// If specified, rectangles are ordered by their sort key modulo this
    /// value instead of by the key itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modulus: Option<f64>,

    /// The rectangles to pack. Kept last so that TOML output stays valid.
    #[serde(default)]
    pub rects: Vec<RectConfig>,

    /// The path that this config came from, if any.
    #[serde(skip)]
    pub file_path: PathBuf,
}

impl PackConfig {
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;

        let mut config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_owned(),
            source,
        })?;
        config.file_path = path.to_owned();
        config.validate()?;

        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Toml {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;

        Ok(config)
    }

    pub fn options(&self) -> PackOptions {
        PackOptions::new()
            .sort_key(self.sort_key)
            .sort_order(self.sort_order)
            .fit(self.fit)
            .split(self.split)
    }

    pub fn output_size(&self) -> Vec2 {
        Vec2::from(self.output_size)
    }

    /// Creates a `Pack` loaded with every rectangle of this config, not yet
    /// sorted or packed.
    pub fn build(&self) -> Pack {
        let mut pack = Pack::with_options(self.options());

        for (position, rect) in self.rects.iter().enumerate() {
            let placed = rect.to_index_rect(position as u32);
            pack.push_indexed(placed.index, placed.param, placed.rect);
        }

        pack
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = self.output_size;
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(ConfigError::InvalidOutputSize {
                width,
                height,
                path: self.file_path.clone(),
            });
        }

        for (position, rect) in self.rects.iter().enumerate() {
            if !(rect.width > 0.0 && rect.height > 0.0)
                || !(rect.width.is_finite() && rect.height.is_finite())
            {
                return Err(ConfigError::InvalidRect {
                    position,
                    width: rect.width,
                    height: rect.height,
                    path: self.file_path.clone(),
                });
            }
        }

        Ok(())
    }
}

fn default_output_size() -> (f64, f64) {
    (512.0, 512.0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct RectConfig {
    pub width: f64,
    pub height: f64,

    /// Sort key used when `sort-key = "param"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<f64>,

    /// Identity reported in the output. Defaults to the rectangle's position
    /// in the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}

impl RectConfig {
    fn to_index_rect(&self, position: u32) -> IndexRect {
        IndexRect::with_param(
            self.index.unwrap_or(position),
            self.param.unwrap_or(0.0),
            Rect::from_size(Vec2::new(self.width, self.height)),
        )
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error deserializing TOML from path {}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("I/O error in path {}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Output size must be positive, got ({width}, {height}) in {}", .path.display())]
    InvalidOutputSize {
        width: f64,
        height: f64,
        path: PathBuf,
    },

    #[error(
        "Rect #{position} has invalid size ({width}, {height}) in {}",
        .path.display()
    )]
    InvalidRect {
        position: usize,
        width: f64,
        height: f64,
        path: PathBuf,
    },
}
