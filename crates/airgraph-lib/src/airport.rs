//! Airport nodes keyed by IATA code and weighted by great-circle distance.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::geo::GeoLocation;
use crate::node::{Node, NodeId};

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]\w+(\s\w+)*$").expect("valid name pattern"));
static CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}$").expect("valid code pattern"));

/// Whether `value` is an acceptable airport or country name: an initial
/// capital followed by word characters, words separated by single
/// whitespace characters.
pub fn is_valid_name(value: &str) -> bool {
    NAME_PATTERN.is_match(value)
}

/// Whether `value` is a three-letter uppercase IATA code.
pub fn is_valid_code(value: &str) -> bool {
    CODE_PATTERN.is_match(value)
}

/// An airport participating in a route graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub name: String,
    pub country: String,
    pub code: String,
    pub location: GeoLocation,
}

impl Airport {
    /// Create a validated airport.
    ///
    /// Coordinates are checked first, then the name, country and code.
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        code: impl Into<String>,
        lat: f64,
        long: f64,
    ) -> Result<Self> {
        let location = GeoLocation::new(lat, long)?;
        let (name, country, code) = (name.into(), country.into(), code.into());

        if !is_valid_name(&name) {
            return Err(Error::InvalidAirport {
                field: "name",
                value: name,
            });
        }
        if !is_valid_name(&country) {
            return Err(Error::InvalidAirport {
                field: "country",
                value: country,
            });
        }
        if !is_valid_code(&code) {
            return Err(Error::InvalidAirport {
                field: "code",
                value: code,
            });
        }

        Ok(Self {
            name,
            country,
            code,
            location,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.location.lat.value
    }

    pub fn longitude(&self) -> f64 {
        self.location.long.value
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_to(&self, other: &Airport) -> f64 {
        self.location.distance(&other.location)
    }
}

impl Node for Airport {
    fn id(&self) -> NodeId {
        NodeId::new(self.code.as_str())
    }

    fn cost(&self, other: &Self) -> f64 {
        self.distance_to(other)
    }
}
