use std::sync::Arc;

use drive_client::{DocumentSource, DocumentSummary};

use crate::errors::GatewayError;

/// Bridges the HTTP boundary to the remote document backend. Every call is a
/// single round trip; no local state is read or written.
pub struct RetrievalService {
    source: Arc<dyn DocumentSource>,
}

impl RetrievalService {
    pub fn new(source: Arc<dyn DocumentSource>) -> Self {
        Self { source }
    }

    /// Lists the backend's PDF documents in the order the backend returns
    /// them.
    pub async fn list_pdf_documents(&self) -> Result<Vec<DocumentSummary>, GatewayError> {
        let documents = self.source.list_pdf_documents().await?;
        Ok(documents)
    }

    /// Fetches the plain-text body of one document by its backend id.
    pub async fn fetch_document_text(&self, id: &str) -> Result<String, GatewayError> {
        let content = self.source.export_text(id).await?;
        Ok(content)
    }
}
