//! Lines and polygons drawn over the map.

use crate::error::ValidationError;
use crate::location::MapLocation;
use crate::query::{escape, Attributes, SEPARATOR};

/// A line going through a number of points.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapPath {
    /// Thickness of the line in pixels. Google defaults to 5.
    pub weight: Option<u32>,

    /// Either a 24-bit (e.g. `0xFFFFCC`) or a 32-bit (e.g. `0xFFFFCCFF`) hexadecimal value, or
    /// one of {black, brown, green, purple, yellow, blue, gray, orange, red, white}. The last
    /// two characters of a 32-bit value are the alpha channel.
    pub color: Option<String>,

    pub points: Vec<MapLocation>,

    /// Points in the
    /// [encoded polyline](https://developers.google.com/maps/documentation/utilities/polylinealgorithm)
    /// format. When set, `points` are ignored.
    pub encoded_polyline: Option<String>,
}

impl MapPath {
    /// Render as the value of the `path` parameter.
    pub fn render(&self) -> Result<String, ValidationError> {
        render_path(self, None)
    }
}

/// Filled area. Last point does not need to be the same as the first one, Google closes the
/// shape automatically.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapPolygon {
    /// Outline of the polygon.
    pub path: MapPath,

    /// Same format as [`MapPath::color`].
    pub fill_color: Option<String>,
}

impl MapPolygon {
    /// Render as the value of the `path` parameter.
    pub fn render(&self) -> Result<String, ValidationError> {
        render_path(&self.path, self.fill_color.as_deref())
    }
}

/// Anything which ends up in the `path` parameter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Shape {
    Path(MapPath),
    Polygon(MapPolygon),
}

impl Shape {
    pub fn render(&self) -> Result<String, ValidationError> {
        match self {
            Self::Path(path) => path.render(),
            Self::Polygon(polygon) => polygon.render(),
        }
    }
}

impl From<MapPath> for Shape {
    fn from(path: MapPath) -> Self {
        Self::Path(path)
    }
}

impl From<MapPolygon> for Shape {
    fn from(polygon: MapPolygon) -> Self {
        Self::Polygon(polygon)
    }
}

fn render_path(path: &MapPath, fill_color: Option<&str>) -> Result<String, ValidationError> {
    if path.encoded_polyline.is_none() && path.points.len() < 2 {
        return Err(ValidationError::NotEnoughPoints);
    }

    let mut attributes = Attributes::default();
    attributes.push("color", path.color.as_ref());
    attributes.push("fillcolor", fill_color);
    attributes.push("weight", path.weight);

    let mut tokens = attributes.into_tokens();

    if let Some(encoded_polyline) = &path.encoded_polyline {
        tokens.push(format!("enc:{}", escape(encoded_polyline)));
    } else {
        for point in &path.points {
            tokens.push(point.render()?);
        }
    }

    Ok(tokens.join(SEPARATOR))
}
