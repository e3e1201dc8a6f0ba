use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

use crate::numeric::{coerce, Numeric};

/// A raw value of a catalog record field.
///
/// The catalog encodes most values as strings, though numbers and nested
/// objects (like `geolocation`) occur as well.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Field {
    Text(String),
    Number(Number),
    Other(Value),
}

impl Field {
    /// Parses the field into an integer or float, see [`coerce`].
    pub fn coerce(&self) -> Numeric {
        coerce(Some(self))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Text(s) => f.write_str(s),
            Field::Number(n) => write!(f, "{n}"),
            Field::Other(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Text(s.to_owned())
    }
}

/// A single meteorite landing as delivered by the catalog.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Record {
    pub name: Option<Field>,
    pub id: Option<Field>,
    pub nametype: Option<Field>,
    pub recclass: Option<Field>,
    pub mass: Option<Field>,
    pub fall: Option<Field>,
    pub year: Option<Field>,
    pub reclat: Option<Field>,
    pub reclong: Option<Field>,
    pub geolocation: Option<Field>,
    #[serde(rename = ":@computed_region_cbhk_fwbd")]
    pub states: Option<Field>,
    #[serde(rename = ":@computed_region_nnqa_25f4")]
    pub counties: Option<Field>,
}

/// Numeric latitude and longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub long: f64,
}

impl Record {
    /// Returns true if both `reclat` and `reclong` carry a value.
    ///
    /// This only checks presence; the values may still fail to parse.
    pub fn has_geolocation(&self) -> bool {
        self.reclat.is_some() && self.reclong.is_some()
    }

    /// Returns the parsed coordinates of the record, or `None` if either of
    /// them is missing or not a number.
    pub fn coordinates(&self) -> Option<Coordinates> {
        let lat = coerce(self.reclat.as_ref()).as_f64()?;
        let long = coerce(self.reclong.as_ref()).as_f64()?;
        Some(Coordinates { lat, long })
    }
}

#[derive(Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default, alias = "errorCode")]
    pub code: Option<String>,
    pub message: String,
}
