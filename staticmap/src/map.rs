use crate::error::ValidationError;
use crate::location::MapLocation;
use crate::marker::MapMarker;
use crate::path::Shape;
use crate::query::{escape, Params, SEPARATOR};
use crate::signing::sign;

pub(crate) const HOST: &str = "maps.googleapis.com";
pub(crate) const PATH: &str = "/maps/api/staticmap";

/// Type of the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MapType {
    #[default]
    /// Default Google Maps style, which is a streets view
    Roadmap,
    /// Satellite view
    Satellite,
    /// Physical relief with vegetation and water
    Terrain,
    /// Satellite imagery with roads and labels
    Hybrid,
}

impl MapType {
    fn api_slug(&self) -> &'static str {
        match self {
            Self::Roadmap => "roadmap",
            Self::Satellite => "satellite",
            Self::Terrain => "terrain",
            Self::Hybrid => "hybrid",
        }
    }
}

/// Format of the resulting image. Google defaults to [`ImageFormat::Png8`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ImageFormat {
    /// 8-bit PNG
    Png8,
    /// 32-bit PNG
    Png32,
    Gif,
    /// Progressive JPEG
    Jpg,
    /// Non-progressive JPEG
    JpgBaseline,
}

impl ImageFormat {
    fn api_slug(&self) -> &'static str {
        match self {
            Self::Png8 => "png8",
            Self::Png32 => "png32",
            Self::Gif => "gif",
            Self::Jpg => "jpg",
            Self::JpgBaseline => "jpg-baseline",
        }
    }
}

/// Scheme of the URL returned by [`GoogleStaticMap::url`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Http,
    Https,
    /// Scheme-relative URL (`//maps.googleapis.com/...`), so the browser uses the same scheme
    /// as the page embedding it.
    Auto,
}

impl Protocol {
    fn prefix(&self) -> &'static str {
        match self {
            Self::Http => "http:",
            Self::Https => "https:",
            Self::Auto => "",
        }
    }
}

/// HTTP proxy used by [`GoogleStaticMap::get_map`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct Proxy {
    pub host: String,
    pub port: u16,
}

/// Styling rule, e.g. `feature:road.local|element:geometry|color:0x00ff00`.
/// <https://developers.google.com/maps/documentation/maps-static/styling>
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct StyleRule(pub Vec<(String, String)>);

impl StyleRule {
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((property.into(), value.into()));
        self
    }

    fn render(&self) -> String {
        self.0
            .iter()
            .map(|(property, value)| format!("{property}:{value}"))
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }
}

impl<P: Into<String>, V: Into<String>> FromIterator<(P, V)> for StyleRule {
    fn from_iter<T: IntoIterator<Item = (P, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(property, value)| (property.into(), value.into()))
                .collect(),
        )
    }
}

/// Description of a static map. Set the fields, then call [`GoogleStaticMap::url`] to get the
/// URL of the image, or [`GoogleStaticMap::get_map`] to download it.
///
/// At least one of [`GoogleStaticMap::center`], [`GoogleStaticMap::markers`] or
/// [`GoogleStaticMap::paths`] must be set. Without the center, Google fits the map to
/// markers and paths.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GoogleStaticMap {
    /// Width of the image in pixels, 500 by default. Google caps it at 640.
    pub width: Option<u32>,

    /// Height of the image in pixels, 350 by default. Google caps it at 640.
    pub height: Option<u32>,

    /// Pixel density multiplier: 1, 2 or 4 (premium accounts only).
    pub scale: Option<u8>,

    /// From 0 (the whole world) to 21 (individual buildings).
    pub zoom: Option<u8>,

    pub center: Option<MapLocation>,
    pub markers: Vec<MapMarker>,
    pub paths: Vec<Shape>,

    /// Whether the application determines the location via a sensor. Legacy.
    pub sensor: bool,

    pub format: Option<ImageFormat>,
    pub map_type: MapType,

    /// Not a part of the URL, used only when downloading.
    pub proxy: Option<Proxy>,

    /// Standard API key. Can not be used together with `client_id`.
    pub api_key: Option<String>,

    /// Business account client ID. Requires `private_key`.
    pub client_id: Option<String>,

    /// URL-safe base64 encoded key used to sign the URL.
    pub private_key: Option<String>,

    pub channel: Option<String>,
    pub language: Option<String>,
    pub styles: Vec<StyleRule>,

    /// Appended to the query as is, it must be escaped already.
    pub plain_string: Option<String>,
}

impl Default for GoogleStaticMap {
    fn default() -> Self {
        Self {
            width: Some(500),
            height: Some(350),
            scale: None,
            zoom: None,
            center: None,
            markers: Vec::new(),
            paths: Vec::new(),
            sensor: false,
            format: None,
            map_type: MapType::default(),
            proxy: None,
            api_key: None,
            client_id: None,
            private_key: None,
            channel: None,
            language: None,
            styles: Vec::new(),
            plain_string: None,
        }
    }
}

impl GoogleStaticMap {
    /// Full URL of the map image, suitable e.g. as `src` of an `img` tag.
    pub fn url(&self, protocol: Protocol) -> Result<String, ValidationError> {
        Ok(format!(
            "{}//{HOST}{}",
            protocol.prefix(),
            self.relative_url()?
        ))
    }

    /// URL of the map image relative to the host, e.g. `/maps/api/staticmap?...`.
    pub fn relative_url(&self) -> Result<String, ValidationError> {
        self.validate()?;

        let mut url = format!("{PATH}?{}", self.query()?);

        if let Some(plain_string) = &self.plain_string {
            url.push('&');
            url.push_str(plain_string);
        }

        // Private key is meaningless without credentials it would sign.
        let authenticated = self.api_key.is_some() || self.client_id.is_some();
        if let Some(private_key) = self.private_key.as_ref().filter(|_| authenticated) {
            let signature = sign(&url, private_key)?;
            url.push_str("&signature=");
            url.push_str(&signature);
        }

        log::trace!("Built static map URL: {url}");
        Ok(url)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.center.is_none() && self.markers.is_empty() && self.paths.is_empty() {
            return Err(ValidationError::MissingTarget);
        }

        if self.api_key.is_some() && self.client_id.is_some() {
            return Err(ValidationError::ConflictingCredentials);
        }

        if self.client_id.is_some() && self.private_key.is_none() {
            return Err(ValidationError::MissingPrivateKey);
        }

        if let Some(zoom) = self.zoom.filter(|zoom| *zoom > 21) {
            return Err(ValidationError::InvalidZoom(zoom));
        }

        if let Some(scale) = self.scale.filter(|scale| ![1, 2, 4].contains(scale)) {
            return Err(ValidationError::InvalidScale(scale));
        }

        Ok(())
    }

    /// Scalar parameters sorted by name, followed by overlays (also sorted by name, but
    /// markers, paths and styles keep the order they were added in).
    fn query(&self) -> Result<String, ValidationError> {
        let mut scalars = Params::default();

        if let Some(channel) = &self.channel {
            scalars.push("channel", escape(channel));
        }
        if let Some(format) = self.format {
            scalars.push("format", format.api_slug().to_owned());
        }
        if let Some(language) = &self.language {
            scalars.push("language", escape(language));
        }
        scalars.push("maptype", self.map_type.api_slug().to_owned());
        if let Some(scale) = self.scale {
            scalars.push("scale", scale.to_string());
        }
        scalars.push("sensor", self.sensor.to_string());
        if let Some(zoom) = self.zoom {
            scalars.push("zoom", zoom.to_string());
        }
        if let (Some(width), Some(height)) = (self.width, self.height) {
            scalars.push("size", format!("{width}x{height}"));
        }
        if let Some(api_key) = &self.api_key {
            scalars.push("key", escape(api_key));
        }
        if let Some(client_id) = &self.client_id {
            scalars.push("client", escape(client_id));
        }

        let mut overlays = Params::default();

        for marker in &self.markers {
            overlays.push("markers", marker.render()?);
        }
        for path in &self.paths {
            overlays.push("path", path.render()?);
        }
        if let Some(center) = &self.center {
            overlays.push("center", center.render()?);
        }
        for style in self.styles.iter().filter(|style| !style.0.is_empty()) {
            overlays.push("style", escape(&style.render()));
        }

        let scalars = scalars.sorted();
        let overlays = overlays.sorted();

        if overlays.is_empty() {
            Ok(scalars.join())
        } else {
            Ok(format!("{}&{}", scalars.join(), overlays.join()))
        }
    }
}
