//! Generic HTTP fetching utilities with status-code aware error handling

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches `url` and parses the body as JSON into `T`.
///
/// No caching and no retries: a failed request is reported once with the
/// most specific [`AppError`] variant for its status code or payload.
#[instrument(skip(client))]
pub async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = send(client, url).await?;

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(1024).collect();
    debug!("Response text (first 1024 chars): {preview}");

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);

            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                // Valid JSON but unexpected structure
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

/// Fetches `url` and returns the raw body.
#[instrument(skip(client))]
pub async fn fetch_bytes(client: &Client, url: &str) -> Result<Vec<u8>, AppError> {
    debug!("Fetching bytes from URL: {url}");

    let response = send(client, url).await?;
    let body = response.bytes().await.map_err(AppError::ApiFetch)?;

    if body.is_empty() {
        return Err(AppError::api_no_data("Response body is empty", url));
    }

    Ok(body.to_vec())
}

async fn send(client: &Client, url: &str) -> Result<Response, AppError> {
    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else if e.is_connect() {
            AppError::network_connection(url, e.to_string())
        } else {
            AppError::ApiFetch(e)
        }
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use serde::Deserialize;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    #[derive(Debug, Deserialize)]
    struct Payload {
        value: i32,
    }

    async fn server_responding(template: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data"))
            .respond_with(template)
            .mount(&mock_server)
            .await;
        mock_server
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let server =
            server_responding(ResponseTemplate::new(200).set_body_string(r#"{"value": 7}"#)).await;
        let client = create_test_http_client();

        let payload: Payload = fetch(&client, &format!("{}/data", server.uri()))
            .await
            .unwrap();
        assert_eq!(payload.value, 7);
    }

    #[tokio::test]
    async fn test_fetch_status_mapping() {
        let client = create_test_http_client();
        for status in [404u16, 429, 400, 503, 500] {
            let server = server_responding(ResponseTemplate::new(status)).await;
            let error = fetch::<Payload>(&client, &format!("{}/data", server.uri()))
                .await
                .unwrap_err();

            let mapped = match status {
                404 => matches!(error, AppError::ApiNotFound { .. }),
                429 => matches!(error, AppError::ApiRateLimit { .. }),
                400 => matches!(error, AppError::ApiClientError { status: 400, .. }),
                503 => matches!(error, AppError::ApiServiceUnavailable { status: 503, .. }),
                _ => matches!(error, AppError::ApiServerError { status: 500, .. }),
            };
            assert!(mapped, "Unexpected error for {status}: {error:?}");
        }
    }

    #[tokio::test]
    async fn test_fetch_payload_errors() {
        let client = create_test_http_client();

        let server = server_responding(ResponseTemplate::new(200).set_body_string("")).await;
        let error = fetch::<Payload>(&client, &format!("{}/data", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::ApiNoData { .. }));

        let server =
            server_responding(ResponseTemplate::new(200).set_body_string("<html></html>")).await;
        let error = fetch::<Payload>(&client, &format!("{}/data", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::ApiMalformedJson { .. }));

        let server =
            server_responding(ResponseTemplate::new(200).set_body_string(r#"{"other": 1}"#)).await;
        let error = fetch::<Payload>(&client, &format!("{}/data", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::ApiUnexpectedStructure { .. }));
    }

    #[tokio::test]
    async fn test_fetch_bytes() {
        let client = create_test_http_client();

        let server =
            server_responding(ResponseTemplate::new(200).set_body_bytes(vec![1u8, 2, 3])).await;
        let body = fetch_bytes(&client, &format!("{}/data", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, vec![1, 2, 3]);

        let server = server_responding(ResponseTemplate::new(404)).await;
        let error = fetch_bytes(&client, &format!("{}/data", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::ApiNotFound { .. }));
    }
}
