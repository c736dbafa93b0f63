use crate::error::ValidationError;
use crate::location::MapLocation;
use crate::query::{Attributes, SEPARATOR};

/// Size of the marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MarkerSize {
    Tiny,
    Small,
    /// Used by Google when size is not specified.
    Mid,
}

impl MarkerSize {
    fn api_slug(&self) -> &'static str {
        match self {
            Self::Tiny => "tiny",
            Self::Small => "small",
            Self::Mid => "mid",
        }
    }
}

/// A single marker to place on the map.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapMarker {
    /// A 24-bit color (e.g. `0xFFFFCC`) or a predefined color from the set
    /// {black, brown, green, purple, yellow, blue, gray, orange, red, white}.
    pub color: Option<String>,

    /// Position of the marker, required.
    pub location: Option<MapLocation>,

    pub size: Option<MarkerSize>,

    /// A single uppercase alphanumeric character. Not displayed for tiny and small markers.
    pub label: Option<char>,

    /// URL of the custom icon. Only characters which can not appear in the query are escaped,
    /// because Google does not understand fully escaped icon URLs.
    pub icon: Option<String>,

    /// Whether Google should draw a shadow for a custom icon.
    pub shadow: Option<bool>,

    /// Anchor point of a custom icon, e.g. `center`, `topleft` or `8,32`.
    pub anchor: Option<String>,
}

impl MapMarker {
    /// Marker with default style placed at `location`.
    pub fn new(location: MapLocation) -> Self {
        Self {
            location: Some(location),
            ..Default::default()
        }
    }

    /// Render as the value of the `markers` parameter.
    pub fn render(&self) -> Result<String, ValidationError> {
        let location = self
            .location
            .as_ref()
            .ok_or(ValidationError::MarkerWithoutLocation)?
            .render()?;

        if let Some(label) = self.label {
            if !label.is_ascii_alphanumeric() {
                return Err(ValidationError::InvalidLabel(label));
            }
        }

        let mut attributes = Attributes::default();
        attributes.push("anchor", self.anchor.as_ref());
        attributes.push("color", self.color.as_ref());
        attributes.push_url("icon", self.icon.as_deref());
        attributes.push("label", self.label);
        attributes.push("shadow", self.shadow);
        attributes.push("size", self.size.map(|size| size.api_slug()));

        let mut tokens = attributes.into_tokens();
        tokens.push(location);
        Ok(tokens.join(SEPARATOR))
    }
}
