//! Errors returned while building URLs and downloading maps.

use crate::signing::InvalidPrivateKey;

/// Map description can not be turned into a URL. Nothing was sent over the network.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("need to specify either a center, markers, or a path")]
    MissingTarget,

    #[error("need to set either latitude and longitude, or address")]
    IncompleteLocation,

    #[error("need a location for the marker")]
    MarkerWithoutLocation,

    #[error("marker label must be a single alphanumeric character, got '{0}'")]
    InvalidLabel(char),

    #[error("need more than one point for the path, or an encoded polyline")]
    NotEnoughPoints,

    #[error("API key and client ID can not be used together")]
    ConflictingCredentials,

    #[error("client ID requires a private key")]
    MissingPrivateKey,

    #[error("invalid zoom level {0}, must be between 0 and 21")]
    InvalidZoom(u8),

    #[error("invalid scale {0}, must be 1, 2 or 4")]
    InvalidScale(u8),

    #[error(transparent)]
    InvalidPrivateKey(#[from] InvalidPrivateKey),
}

/// Static map could not be downloaded.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("could not create the HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("no response from the server: {0}")]
    NoResponse(#[source] reqwest::Error),

    #[error(
        "error encountered while retrieving the map, code {status}, text {}",
        .body.as_deref().unwrap_or("<unreadable>")
    )]
    Status {
        status: reqwest::StatusCode,
        /// `None` if the body could not be read.
        body: Option<String>,
    },
}

/// Any error which might happen in [`crate::GoogleStaticMap::get_map`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("could not write the map: {0}")]
    Io(#[from] std::io::Error),
}
