//! Demo settings, overridable from the page's query string.

use std::str::FromStr;

use log::Level;
use thiserror::Error;

use crate::frame::QUADRANT_PERIOD;
use crate::mesh::TexelMapping;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for `{key}`")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Id of the `<canvas>` element to draw into.
    pub canvas_id: String,
    /// Canvas width and height in pixels.
    pub canvas_size: u32,
    /// Atlas image, relative to the page.
    pub texture_url: String,
    /// Fixed seed for the phase offsets; random when unset.
    pub seed: Option<u64>,
    pub quadrant_period: u64,
    pub texel_mapping: TexelMapping,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_id: "canvas".into(),
            canvas_size: 640,
            texture_url: "assets/texture_sheet00.png".into(),
            seed: None,
            quadrant_period: QUADRANT_PERIOD,
            texel_mapping: TexelMapping::Planar,
            log_level: Level::Info,
        }
    }
}

impl FromStr for TexelMapping {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "planar" => Ok(TexelMapping::Planar),
            "horizontal" => Ok(TexelMapping::Horizontal),
            _ => Err(()),
        }
    }
}

impl Config {
    /// Applies `key=value` pairs from a query string (leading `?` optional).
    ///
    /// Unknown keys are skipped. A malformed value leaves that setting at its
    /// default and is reported in the returned error list.
    pub fn from_query(query: &str) -> (Self, Vec<ConfigError>) {
        let mut config = Config::default();
        let mut errors = Vec::new();

        let pairs = query
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")));

        for (key, value) in pairs {
            let applied = match key {
                "canvas" if !value.is_empty() => {
                    config.canvas_id = value.to_owned();
                    Ok(())
                }
                "texture" if !value.is_empty() => {
                    config.texture_url = value.to_owned();
                    Ok(())
                }
                "size" => parse(value, "size").and_then(|size: u32| {
                    if size == 0 {
                        return Err(invalid("size", value));
                    }
                    config.canvas_size = size;
                    Ok(())
                }),
                "seed" => parse(value, "seed").map(|seed| config.seed = Some(seed)),
                "period" => parse(value, "period").and_then(|period: u64| {
                    if period == 0 {
                        return Err(invalid("period", value));
                    }
                    config.quadrant_period = period;
                    Ok(())
                }),
                "texels" => value
                    .parse()
                    .map(|mapping| config.texel_mapping = mapping)
                    .map_err(|_| invalid("texels", value)),
                "log" => value
                    .parse()
                    .map(|level| config.log_level = level)
                    .map_err(|_| invalid("log", value)),
                "canvas" => Err(invalid("canvas", value)),
                "texture" => Err(invalid("texture", value)),
                _ => Ok(()),
            };
            if let Err(e) = applied {
                errors.push(e);
            }
        }

        (config, errors)
    }
}

fn parse<T: FromStr>(value: &str, key: &'static str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| invalid(key, value))
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_owned(),
    }
}
