//! URL signing for the Google Maps business (premium) accounts.
//! <https://developers.google.com/maps/documentation/maps-static/digital-signature>

use base64::Engine as _;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE};
use base64::engine::DecodePaddingMode;
use hmac::{Hmac, Mac};
use sha1::Sha1;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("private key is not valid base64")]
pub struct InvalidPrivateKey;

impl From<base64::DecodeError> for InvalidPrivateKey {
    fn from(_: base64::DecodeError) -> Self {
        Self
    }
}

impl From<hmac::digest::InvalidLength> for InvalidPrivateKey {
    fn from(_: hmac::digest::InvalidLength) -> Self {
        Self
    }
}

/// Keys copied from the Google console are URL-safe, but padding is not always there.
const KEY_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &base64::alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Sign the path and query part of the URL (starting with `/`) using the URL-safe base64
/// encoded private key. Returns the URL-safe base64 encoded signature.
pub fn sign(path: &str, private_key: &str) -> Result<String, InvalidPrivateKey> {
    let private_key = private_key.trim().replace('+', "-").replace('/', "_");
    let key = KEY_ENGINE.decode(private_key)?;

    let mut mac = Hmac::<Sha1>::new_from_slice(&key)?;
    mac.update(path.as_bytes());

    Ok(URL_SAFE.encode(mac.finalize().into_bytes()))
}
