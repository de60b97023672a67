use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use log::error;

use crate::errors::ProviderError;
use crate::providers::Provider;

/// Client for the unauthenticated Google translate web endpoint
///
/// This is the same `translate_a/single` endpoint that browser extensions
/// use: no API key, one text per call, plain source/target codes.
#[derive(Debug)]
pub struct Google {
    /// HTTP client for API requests
    client: Client,
    /// Endpoint base URL
    endpoint: String,
}

/// A single translation request
#[derive(Debug, Clone)]
pub struct GoogleRequest {
    /// Text to translate
    pub text: String,
    /// Source language code
    pub source_language: String,
    /// Target language code
    pub target_language: String,
}

/// Response carrying the translated text
#[derive(Debug, Clone)]
pub struct GoogleResponse {
    /// The translated text
    pub text: String,
}

impl Google {
    /// Create a new client against the given endpoint base URL
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }

    fn api_url(&self) -> String {
        let base = if self.endpoint.is_empty() {
            "https://translate.googleapis.com"
        } else {
            self.endpoint.trim_end_matches('/')
        };
        format!("{}/translate_a/single", base)
    }

    /// The endpoint answers with nested arrays; the first element is a list
    /// of segments whose first member is the translated chunk.
    fn parse_segments(body: &Value) -> Result<String, ProviderError> {
        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ProviderError::ParseError("Missing translation segments in response".to_string())
            })?;

        let mut text = String::new();
        for segment in segments {
            if let Some(chunk) = segment.get(0).and_then(Value::as_str) {
                text.push_str(chunk);
            }
        }
        Ok(text)
    }
}

#[async_trait]
impl Provider for Google {
    type Request = GoogleRequest;
    type Response = GoogleResponse;

    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError> {
        // The endpoint rejects empty payloads; an empty input translates to
        // an empty output without a round trip.
        if request.text.trim().is_empty() {
            return Ok(GoogleResponse {
                text: String::new(),
            });
        }

        let response = self
            .client
            .get(self.api_url())
            .query(&[
                ("client", "gtx"),
                ("sl", request.source_language.as_str()),
                ("tl", request.target_language.as_str()),
                ("dt", "t"),
                ("q", request.text.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Google translate error ({}): {}", status, body);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: body,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(GoogleResponse {
            text: Self::parse_segments(&body)?,
        })
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let request = GoogleRequest {
            text: "hello".to_string(),
            source_language: "en".to_string(),
            target_language: "sk".to_string(),
        };
        self.complete(request).await?;
        Ok(())
    }

    fn extract_text(response: &Self::Response) -> String {
        response.text.clone()
    }
}
