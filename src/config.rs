use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use jiff::civil::Weekday;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::layout::Metrics;
use crate::palette::{Color, Palette};
use crate::schedule::ScheduleOptions;
use crate::weekday::{DayOrder, deserialize_weekday, serialize_weekday};

pub const DEFAULT_CONFIG_FILE: &str = "timegrid.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bind_address: String,
    #[serde(
        serialize_with = "serialize_weekday",
        deserialize_with = "deserialize_weekday"
    )]
    pub week_start: Weekday,
    pub palette: Vec<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuffle_seed: Option<u64>,
    pub layout: Metrics,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            week_start: Weekday::Monday,
            palette: Palette::default().colors().to_vec(),
            shuffle_seed: None,
            layout: Metrics::default(),
        }
    }
}

impl Config {
    /// Defaults, overridden by the TOML file at `path` (if present), overridden by
    /// `TIMEGRID_*` environment variables (`__` separates nested keys).
    pub fn load(path: impl AsRef<Path>) -> Result<Config, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("TIMEGRID_").split("__"))
            .extract()
    }

    pub fn palette(&self) -> Palette {
        let palette = Palette::new(self.palette.clone()).unwrap_or_else(|| {
            warn!("configured palette is empty, using the default one");
            Palette::default()
        });
        match self.shuffle_seed {
            Some(seed) => palette.shuffled(seed),
            None => palette,
        }
    }

    pub fn schedule_options(&self) -> ScheduleOptions {
        ScheduleOptions {
            palette: self.palette(),
            order: DayOrder::new(self.week_start),
        }
    }
}
