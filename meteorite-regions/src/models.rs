use anyhow::{bail, Result};
use std::collections::HashSet;

/// Extent of a region in degrees, given as
/// `(min_long, min_lat, max_long, max_lat)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_long: f64,
    pub min_lat: f64,
    pub max_long: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub const fn new(min_long: f64, min_lat: f64, max_long: f64, max_lat: f64) -> Self {
        Self {
            min_long,
            min_lat,
            max_long,
            max_lat,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub name: String,
    pub bounds: BoundingBox,
}

impl Region {
    pub fn new(name: &str, bounds: BoundingBox) -> Self {
        Self {
            name: name.to_owned(),
            bounds,
        }
    }
}

/// An ordered set of uniquely named regions.
#[derive(Debug, Clone, PartialEq)]
pub struct Regions(Vec<Region>);

const CONTINENTS: [(&str, BoundingBox); 7] = [
    ("Africa_MiddleEast", BoundingBox::new(-17.8, -35.2, 62.2, 37.6)),
    ("Europe", BoundingBox::new(-24.1, 36.0, 32.0, 71.1)),
    ("Upper_Asia", BoundingBox::new(32.2, 35.8, 190.4, 72.7)),
    ("Lower_Asia", BoundingBox::new(58.2, -9.9, 154.0, 38.6)),
    ("Australia", BoundingBox::new(112.9, -43.8, 154.3, -11.1)),
    ("North_America", BoundingBox::new(-168.2, 12.8, -52.0, 71.5)),
    ("South_America", BoundingBox::new(-81.2, -55.8, -34.4, 12.6)),
];

impl Regions {
    pub fn new(regions: Vec<Region>) -> Result<Self> {
        validate(&regions)?;
        Ok(Self(regions))
    }

    /// The default continent-scale boxes.
    pub fn continents() -> Self {
        Self(
            CONTINENTS
                .iter()
                .map(|(name, bounds)| Region::new(name, *bounds))
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.0.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

fn validate(regions: &[Region]) -> Result<()> {
    let mut seen = HashSet::new();
    for region in regions {
        let b = &region.bounds;
        if region.name.trim().is_empty() {
            bail!("region names must not be empty");
        }
        if !seen.insert(region.name.as_str()) {
            bail!("region {} is defined more than once", region.name);
        }
        if ![b.min_long, b.min_lat, b.max_long, b.max_lat]
            .iter()
            .all(|v| v.is_finite())
        {
            bail!("region {} has a non-finite bound", region.name);
        }
        if b.min_long > b.max_long || b.min_lat > b.max_lat {
            bail!("region {} has a minimum bound above its maximum", region.name);
        }
    }

    Ok(())
}

/// A classified record as it is stored for a region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub name: Option<String>,
    pub mass: Option<String>,
    pub reclat: String,
    pub reclong: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    pub region: String,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub records: usize,
    pub geolocated: usize,
    pub unparseable: usize,
    pub classified: usize,
}

/// Rows per region, in region order.
#[derive(Debug, Clone, PartialEq)]
pub struct Partitions {
    pub partitions: Vec<Partition>,
    pub stats: Stats,
}

impl Partitions {
    #[cfg(test)]
    pub fn get(&self, region: &str) -> Option<&[Row]> {
        self.partitions
            .iter()
            .find(|p| p.region == region)
            .map(|p| p.rows.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Partition> {
        self.partitions.iter()
    }
}
