use std::time::Duration;

use flagdash_core::catalog::{FlagCatalog, FlagImage};
use flagdash_core::config::CountrySpec;

use crate::config::FetcherConfig;

/// Why a flag could not be resolved.
#[derive(Debug)]
pub enum FetchError {
    /// Transport-level failure (connection, timeout).
    Request(String),
    /// Server answered with a non-success status.
    Status(u16),
    /// Body bytes were not a decodable image.
    Decode(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Request(m) => write!(f, "request failed: {m}"),
            Self::Status(code) => write!(f, "server returned status {code}"),
            Self::Decode(m) => write!(f, "image decode failed: {m}"),
        }
    }
}

/// Fetches and decodes flag images, one HTTP request per country.
pub struct FlagFetcher {
    config: FetcherConfig,
    client: reqwest::Client,
}

impl FlagFetcher {
    pub fn new(config: FetcherConfig) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("flagdash/0.1")
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");
        Self { config, client }
    }

    /// URL of a country's flag image.
    pub fn flag_url(&self, code: &str) -> String {
        format!("{}/{}.png", self.config.base_url, code.to_lowercase())
    }

    /// Fetch and decode a single flag.
    pub async fn fetch_flag(&self, code: &str) -> Result<FlagImage, FetchError> {
        let url = self.flag_url(code);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status().as_u16()));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        decode_flag(&bytes)
    }

    /// Resolve every configured country sequentially into a catalog.
    ///
    /// A failed resolution keeps the country in the catalog with no image:
    /// it still comes up as a question and renders as a blank flag area.
    pub async fn build_catalog(&self, countries: &[CountrySpec]) -> FlagCatalog {
        let mut entries = Vec::with_capacity(countries.len());
        for country in countries {
            let image = match self.fetch_flag(&country.code).await {
                Ok(image) => Some(image),
                Err(e) => {
                    tracing::warn!(country = %country.name, error = %e, "Failed to resolve flag");
                    None
                },
            };
            entries.push((country.name.clone(), image));
        }
        FlagCatalog::new(entries)
    }
}

/// Decode image bytes into raw RGBA pixels.
fn decode_flag(bytes: &[u8]) -> Result<FlagImage, FetchError> {
    let decoded =
        image::load_from_memory(bytes).map_err(|e| FetchError::Decode(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(FlagImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn url_lowercases_the_code() {
        let fetcher = FlagFetcher::new(FetcherConfig::default());
        assert_eq!(
            fetcher.flag_url("JP"),
            "https://flagpedia.net/data/flags/normal/jp.png"
        );
    }

    #[test]
    fn url_respects_configured_base() {
        let fetcher = FlagFetcher::new(FetcherConfig {
            base_url: "http://localhost:9000/flags".to_string(),
            ..FetcherConfig::default()
        });
        assert_eq!(fetcher.flag_url("ca"), "http://localhost:9000/flags/ca.png");
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = decode_flag(b"not an image").expect_err("must not decode");
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn png_bytes_decode_to_rgba() {
        let mut png = Vec::new();
        image::RgbaImage::from_pixel(2, 1, image::Rgba([10, 20, 30, 255]))
            .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
            .expect("encode test image");

        let flag = decode_flag(&png).expect("decode test image");
        assert_eq!((flag.width, flag.height), (2, 1));
        assert_eq!(flag.rgba.len(), 2 * 4);
        assert_eq!(&flag.rgba[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn error_messages_name_the_failure() {
        assert_eq!(
            FetchError::Status(404).to_string(),
            "server returned status 404"
        );
        assert!(
            FetchError::Decode("bad header".to_string())
                .to_string()
                .contains("bad header")
        );
    }
}
