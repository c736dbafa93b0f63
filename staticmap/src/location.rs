//! Types and functions for working with locations.

use crate::error::ValidationError;
use crate::query::escape;

/// Geographical position with latitude and longitude.
pub type Position = geo_types::Point;

/// Construct `Position` from latitude and longitude.
pub fn lat_lon(lat: f64, lon: f64) -> Position {
    Position::new(lon, lat)
}

/// Location on the map. Either latitude and longitude, or an address.
///
/// Address can be anything Google is able to geocode: a full street address, city name, zip
/// code, etc. It is ignored if both latitude and longitude are set and finite.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapLocation {
    /// Decimal degrees, positive is north.
    pub latitude: Option<f64>,
    /// Decimal degrees, positive is east.
    pub longitude: Option<f64>,
    pub address: Option<String>,
}

impl MapLocation {
    pub fn lat_lon(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            address: None,
        }
    }

    pub fn address(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            ..Default::default()
        }
    }

    /// Render as a single token which is safe to put in the query.
    pub fn render(&self) -> Result<String, ValidationError> {
        match (self.latitude, self.longitude, &self.address) {
            (Some(latitude), Some(longitude), _)
                if latitude.is_finite() && longitude.is_finite() =>
            {
                Ok(format!(
                    "{},{}",
                    escape(&latitude.to_string()),
                    escape(&longitude.to_string())
                ))
            }
            (_, _, Some(address)) => Ok(escape(address)),
            _ => Err(ValidationError::IncompleteLocation),
        }
    }
}

impl From<Position> for MapLocation {
    fn from(position: Position) -> Self {
        Self::lat_lon(position.y(), position.x())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_without_anything_is_invalid() {
        assert_eq!(
            Err(ValidationError::IncompleteLocation),
            MapLocation::default().render()
        );
    }

    #[test]
    fn location_with_only_latitude_is_invalid() {
        let location = MapLocation {
            latitude: Some(39.),
            ..Default::default()
        };
        assert_eq!(Err(ValidationError::IncompleteLocation), location.render());
    }

    #[test]
    fn location_with_address() {
        let location = MapLocation::address("Washington, DC");
        assert_eq!("Washington%2C+DC", location.render().unwrap());
    }

    #[test]
    fn location_with_latitude_and_longitude() {
        assert_eq!("39,-77", MapLocation::lat_lon(39., -77.).render().unwrap());
        assert_eq!(
            "38.8,-77.5",
            MapLocation::lat_lon(38.8, -77.5).render().unwrap()
        );
    }

    #[test]
    fn coordinates_take_precedence_over_address() {
        let location = MapLocation {
            latitude: Some(51.1),
            longitude: Some(17.03),
            address: Some("Wrocław".to_owned()),
        };
        assert_eq!("51.1,17.03", location.render().unwrap());
    }

    #[test]
    fn non_finite_coordinates_are_not_usable() {
        assert_eq!(
            Err(ValidationError::IncompleteLocation),
            MapLocation::lat_lon(f64::NAN, 1.).render()
        );
        assert_eq!(
            Err(ValidationError::IncompleteLocation),
            MapLocation::lat_lon(1., f64::INFINITY).render()
        );

        let location = MapLocation {
            address: Some("Wrocław".to_owned()),
            ..MapLocation::lat_lon(f64::NAN, 17.03)
        };
        assert_eq!("Wroc%C5%82aw", location.render().unwrap());
    }

    #[test]
    fn location_from_position() {
        let location = MapLocation::from(lat_lon(51.1044, 17.0751));
        assert_eq!(Some(51.1044), location.latitude);
        assert_eq!(Some(17.0751), location.longitude);
        assert_eq!("51.1044,17.0751", location.render().unwrap());
    }
}
