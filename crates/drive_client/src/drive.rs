use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::DriveConfig;
use crate::models::DocumentSummary;

/// Failure modes of one round trip to the document backend.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The backend answered with a non-success status. The status is
    /// reported to the caller verbatim.
    #[error("document source returned {status}: {message}")]
    Http { status: u16, message: String },

    /// The request never produced a response (connect failure, timeout,
    /// malformed response body).
    #[error("request to document source failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The exported body is not valid UTF-8. Surfaced rather than lossily
    /// replaced.
    #[error("exported content is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Deserialize)]
struct FileListResponse {
    // A backend with no matching files may omit the key entirely.
    #[serde(default)]
    files: Vec<DocumentSummary>,
}

/// Google Drive v3 REST client. One blocking round trip per call; no
/// caching, retries, or rate limiting.
pub struct DriveClient {
    config: DriveConfig,
    client: Client,
}

impl DriveClient {
    pub fn new(config: DriveConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Lists PDF documents, id and name only, in the order the backend
    /// returns them.
    pub async fn list_pdf_documents(&self) -> Result<Vec<DocumentSummary>, SourceError> {
        let response = self
            .client
            .get(format!("{}/drive/v3/files", self.config.base_url))
            .bearer_auth(&self.config.token)
            .query(&[
                ("q", "mimeType='application/pdf'"),
                ("fields", "files(id, name)"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(SourceError::Http { status, message });
        }

        let listing: FileListResponse = response.json().await?;
        debug!("listed {} pdf documents", listing.files.len());
        Ok(listing.files)
    }

    /// Exports one document as plain text. A document the backend does not
    /// know yields its not-found status, not a generic failure.
    pub async fn export_text(&self, id: &str) -> Result<String, SourceError> {
        let response = self
            .client
            .get(format!(
                "{}/drive/v3/files/{}/export",
                self.config.base_url, id
            ))
            .bearer_auth(&self.config.token)
            .query(&[("mimeType", "text/plain")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(SourceError::Http { status, message });
        }

        let body = response.bytes().await?;
        let content = String::from_utf8(body.to_vec())?;
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_client_with_default_config() {
        let config = DriveConfig::default();
        let client = DriveClient::new(config);

        assert!(client.is_ok());
        let client = client.unwrap();
        assert_eq!(client.config.base_url, "https://www.googleapis.com");
        assert_eq!(client.config.timeout_secs, 30);
    }

    #[test]
    fn should_create_client_with_custom_config() {
        let config = DriveConfig {
            token: "test-token".to_string(), // pragma: allowlist secret
            base_url: "http://localhost:9999".to_string(),
            timeout_secs: 2,
        };

        let client = DriveClient::new(config).unwrap();
        assert_eq!(client.config.base_url, "http://localhost:9999");
        assert_eq!(client.config.timeout_secs, 2);
    }

    #[tokio::test]
    async fn should_report_transport_error_when_backend_is_unreachable() {
        let config = DriveConfig {
            token: "test-token".to_string(), // pragma: allowlist secret
            // Reserved TEST-NET-1 address, nothing listens there.
            base_url: "http://192.0.2.1:1".to_string(),
            timeout_secs: 1,
        };
        let client = DriveClient::new(config).unwrap();

        let result = client.list_pdf_documents().await;
        assert!(matches!(result, Err(SourceError::Transport(_))));
    }

    #[test]
    fn should_treat_missing_files_key_as_empty_listing() {
        let listing: FileListResponse = serde_json::from_str("{}").unwrap();
        assert!(listing.files.is_empty());
    }

    #[test]
    fn should_parse_file_listing_in_order() {
        let json = r#"{"files":[{"id":"a1","name":"report.pdf"},{"id":"b2","name":"notes.pdf"}]}"#;
        let listing: FileListResponse = serde_json::from_str(json).unwrap();

        assert_eq!(listing.files.len(), 2);
        assert_eq!(listing.files[0].id, "a1");
        assert_eq!(listing.files[0].name, "report.pdf");
        assert_eq!(listing.files[1].id, "b2");
    }

    #[test]
    fn should_format_http_error_with_status_and_message() {
        let err = SourceError::Http {
            status: 404,
            message: "File not found".to_string(),
        };

        let rendered = err.to_string();
        assert!(rendered.contains("404"));
        assert!(rendered.contains("File not found"));
    }
}
