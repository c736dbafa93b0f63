#![doc = include_str!("../README.md")]
#![deny(clippy::unwrap_used, rustdoc::broken_intra_doc_links)]

mod download;
mod error;
mod location;
mod map;
mod marker;
mod path;
mod query;
pub mod signing;

pub use download::{Fetch, HeaderValue, HttpFetch, HttpOptions};
pub use error::{Error, TransportError, ValidationError};
pub use location::{lat_lon, MapLocation, Position};
pub use map::{GoogleStaticMap, ImageFormat, MapType, Protocol, Proxy, StyleRule};
pub use marker::{MapMarker, MarkerSize};
pub use path::{MapPath, MapPolygon, Shape};
