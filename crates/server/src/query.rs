use std::sync::Arc;

use drive_client::DocumentSummary;
use index_store::ContentIndex;

use crate::errors::GatewayError;

/// Executes substring queries against the document index. Matching is a
/// literal case-insensitive containment test, nothing more.
pub struct QueryService {
    index: Arc<dyn ContentIndex>,
}

impl QueryService {
    pub fn new(index: Arc<dyn ContentIndex>) -> Self {
        Self { index }
    }

    /// Returns id and name of every indexed document whose content contains
    /// `query`. An empty query is rejected before the index is touched.
    pub async fn search(&self, query: &str) -> Result<Vec<DocumentSummary>, GatewayError> {
        if query.is_empty() {
            return Err(GatewayError::Validation("Query is required.".to_string()));
        }

        let records = self.index.find_by_content_substring(query).await?;

        let documents = records
            .into_iter()
            .map(|record| DocumentSummary {
                id: record.id.to_string(),
                name: record.name,
            })
            .collect();

        Ok(documents)
    }
}
