//! Value objects for the Stratus domain

mod geo_location;

pub use geo_location::GeoLocation;
