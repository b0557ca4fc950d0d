//! Compiled-in city list

use crate::CityRequest;

/// Cities covered by every run, as `(name, country_code)` pairs
pub const DEFAULT_CITY_TABLE: &[(&str, &str)] = &[
    ("New York", "us"),
    ("Cairo", "eg"),
    ("Tokyo", "jp"),
    ("Sydney", "au"),
    ("Mumbai", "in"),
];

/// Build the requests for the compiled-in city list, in table order
pub fn default_cities() -> Vec<CityRequest> {
    DEFAULT_CITY_TABLE
        .iter()
        .map(|(name, code)| CityRequest::new_unchecked(name, code))
        .collect()
}
