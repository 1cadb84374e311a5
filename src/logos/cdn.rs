use super::{LogoSource, logo_slug};
use crate::config::Config;
use crate::constants::logos::LOGO_SIZE_PX;
use crate::data_fetcher::api::fetch_utils::fetch_bytes;
use crate::data_fetcher::api::{build_logo_url, create_http_client_with_timeout};
use crate::error::AppError;
use image::RgbaImage;
use image::imageops::FilterType;
use reqwest::Client;
use tracing::{debug, instrument};

/// Logo source backed by the ESPN logo CDN.
#[derive(Debug, Clone)]
pub struct CdnLogoSource {
    client: Client,
    cdn_domain: String,
}

impl CdnLogoSource {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::with_client(client, &config.logo_cdn_domain))
    }

    pub fn with_client(client: Client, cdn_domain: &str) -> Self {
        Self {
            client,
            cdn_domain: cdn_domain.to_string(),
        }
    }
}

impl LogoSource for CdnLogoSource {
    #[instrument(skip(self))]
    async fn fetch_logo(&self, abbreviation: &str) -> Result<RgbaImage, AppError> {
        let url = build_logo_url(&self.cdn_domain, &logo_slug(abbreviation));
        let bytes = fetch_bytes(&self.client, &url).await?;
        let decoded = image::load_from_memory(&bytes)?;
        debug!(
            "Decoded {abbreviation} logo, {}x{}",
            decoded.width(),
            decoded.height()
        );

        Ok(decoded
            .resize(LOGO_SIZE_PX, LOGO_SIZE_PX, FilterType::Lanczos3)
            .to_rgba8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use image::{DynamicImage, ImageFormat, Rgba};
    use std::io::Cursor;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba([200, 16, 46, 255]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(image)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[tokio::test]
    async fn test_fetch_logo_uses_slug_and_scales() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/i/teamlogos/nba/500/utah.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(png_bytes(8, 4)))
            .mount(&mock_server)
            .await;

        let source = CdnLogoSource::with_client(create_test_http_client(), &mock_server.uri());
        let logo = source.fetch_logo("UTA").await.unwrap();

        assert_eq!(logo.dimensions(), (LOGO_SIZE_PX, LOGO_SIZE_PX / 2));
    }

    #[tokio::test]
    async fn test_fetch_logo_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let source = CdnLogoSource::with_client(create_test_http_client(), &mock_server.uri());
        let error = source.fetch_logo("BOS").await.unwrap_err();
        assert!(matches!(error, AppError::ApiNotFound { .. }));
    }

    #[tokio::test]
    async fn test_fetch_logo_non_image_payload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/i/teamlogos/nba/500/bos.png"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>moved</html>"))
            .mount(&mock_server)
            .await;

        let source = CdnLogoSource::with_client(create_test_http_client(), &mock_server.uri());
        let error = source.fetch_logo("BOS").await.unwrap_err();
        assert!(matches!(error, AppError::ImageDecode(_)));
    }
}
