use crate::models::{BoundingBox, Region, Regions};
use anyhow::Result;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub feed: Feed,
    #[serde(default)]
    pub database: Database,
    #[serde(default)]
    pub filter: Filter,
    #[serde(default)]
    pub regions: Vec<RegionBounds>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Feed {
    #[serde(default = "meteorite_feed::default_url")]
    pub url: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Database {
    #[serde(default = "default_dsn")]
    pub dsn: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Filter {
    #[serde(default = "default_maxid")]
    pub maxid: i64,
}

/// A named box given as `[min_long, min_lat, max_long, max_lat]`.
#[derive(Deserialize, Debug, Clone)]
pub struct RegionBounds {
    pub name: String,
    pub bounds: [f64; 4],
}

impl Default for Feed {
    fn default() -> Self {
        Self {
            url: meteorite_feed::default_url(),
        }
    }
}

impl Default for Database {
    fn default() -> Self {
        Self { dsn: default_dsn() }
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            maxid: default_maxid(),
        }
    }
}

fn default_dsn() -> String {
    "sqlite://meteorite_db.db?mode=rwc".into()
}

fn default_maxid() -> i64 {
    1000
}

impl Config {
    /// Validates the configured boxes. Falls back to the continent
    /// set if none are configured.
    pub fn regions(&self) -> Result<Regions> {
        if self.regions.is_empty() {
            return Ok(Regions::continents());
        }

        let regions = self
            .regions
            .iter()
            .map(|r| {
                let [min_long, min_lat, max_long, max_lat] = r.bounds;
                Region::new(
                    &r.name,
                    BoundingBox::new(min_long, min_lat, max_long, max_lat),
                )
            })
            .collect();

        Regions::new(regions)
    }
}
