use std::path::Path;

use bytes::Bytes;

use crate::error::{Error, TransportError};
use crate::map::{GoogleStaticMap, Proxy, HOST};

pub use reqwest::header::HeaderValue;

/// Controls how [`HttpFetch`] uses the HTTP protocol.
pub struct HttpOptions {
    /// Scheme and host the relative URL of the map is appended to.
    pub base_url: String,

    /// User agent to be sent to Google.
    pub user_agent: Option<HeaderValue>,

    /// HTTP proxy. Proxy settings from the environment are not used.
    pub proxy: Option<Proxy>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            base_url: format!("https://{HOST}"),
            user_agent: Some(HeaderValue::from_static(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION"),
            ))),
            proxy: None,
        }
    }
}

/// Something able to download the map, given its relative URL.
pub trait Fetch {
    fn fetch(
        &self,
        relative_url: &str,
    ) -> impl Future<Output = Result<Bytes, TransportError>> + Send;
}

/// [`Fetch`] implementation using `reqwest`.
pub struct HttpFetch {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetch {
    pub fn new() -> Result<Self, TransportError> {
        Self::with_options(HttpOptions::default())
    }

    pub fn with_options(http_options: HttpOptions) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();

        if let Some(user_agent) = http_options.user_agent {
            builder = builder.user_agent(user_agent);
        }

        builder = match http_options.proxy {
            Some(proxy) => builder.proxy(
                reqwest::Proxy::all(format!("http://{}:{}", proxy.host, proxy.port))
                    .map_err(TransportError::Client)?,
            ),
            None => builder.no_proxy(),
        };

        Ok(Self {
            client: builder.build().map_err(TransportError::Client)?,
            base_url: http_options.base_url,
        })
    }
}

impl Fetch for HttpFetch {
    async fn fetch(&self, relative_url: &str) -> Result<Bytes, TransportError> {
        let url = format!("{}{relative_url}", self.base_url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(TransportError::NoResponse)?;

        let status = response.status();
        log::debug!("Downloaded {status:?}.");

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => Some(body),
                Err(e) => {
                    log::debug!("Could not read the error response: {e}.");
                    None
                }
            };
            return Err(TransportError::Status { status, body });
        }

        response.bytes().await.map_err(TransportError::NoResponse)
    }
}

impl GoogleStaticMap {
    /// Download the map from Google and return the bytes of the image. If `output_file` is
    /// given, the image is written there as well.
    pub async fn get_map(&self, output_file: Option<&Path>) -> Result<Bytes, Error> {
        let fetch = HttpFetch::with_options(HttpOptions {
            proxy: self.proxy.clone(),
            ..Default::default()
        })?;
        self.get_map_with(&fetch, output_file).await
    }

    /// Same as [`GoogleStaticMap::get_map`], but using supplied [`Fetch`].
    pub async fn get_map_with(
        &self,
        fetch: &impl Fetch,
        output_file: Option<&Path>,
    ) -> Result<Bytes, Error> {
        let relative_url = self.relative_url()?;
        let image = fetch.fetch(&relative_url).await?;

        if let Some(output_file) = output_file {
            log::debug!("Writing {} bytes to {}.", image.len(), output_file.display());
            tokio::fs::write(output_file, &image).await?;
        }

        Ok(image)
    }
}
