//! In-memory collaborators for exercising the services without a Drive
//! backend or a database.
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use drive_client::{DocumentSource, DocumentSummary, ExportFuture, ListFuture, SourceError};
use index_store::{ContentIndex, DocumentRecord, FindFuture, StoreError};

/// Serves a fixed listing and a fixed id -> content map. Unknown ids get the
/// backend's not-found shape.
pub struct StaticDocumentSource {
    summaries: Vec<DocumentSummary>,
    contents: HashMap<String, String>,
}

impl StaticDocumentSource {
    pub fn new(summaries: Vec<DocumentSummary>, contents: Vec<(String, String)>) -> Self {
        Self {
            summaries,
            contents: contents.into_iter().collect(),
        }
    }
}

impl DocumentSource for StaticDocumentSource {
    fn list_pdf_documents(&self) -> ListFuture<'_> {
        let summaries = self.summaries.clone();
        Box::pin(async move { Ok(summaries) })
    }

    fn export_text<'a>(&'a self, id: &'a str) -> ExportFuture<'a> {
        Box::pin(async move {
            self.contents
                .get(id)
                .cloned()
                .ok_or_else(|| SourceError::Http {
                    status: 404,
                    message: format!("File not found: {}", id),
                })
        })
    }
}

/// Fails every call with a fixed remote status.
pub struct FailingDocumentSource {
    pub status: u16,
    pub message: String,
}

impl DocumentSource for FailingDocumentSource {
    fn list_pdf_documents(&self) -> ListFuture<'_> {
        Box::pin(async move {
            Err(SourceError::Http {
                status: self.status,
                message: self.message.clone(),
            })
        })
    }

    fn export_text<'a>(&'a self, _id: &'a str) -> ExportFuture<'a> {
        Box::pin(async move {
            Err(SourceError::Http {
                status: self.status,
                message: self.message.clone(),
            })
        })
    }
}

/// In-memory document index with the same match semantics as the store, plus
/// a lookup counter so tests can assert that validation short-circuits.
pub struct MemoryIndex {
    records: Vec<DocumentRecord>,
    lookups: AtomicUsize,
}

impl MemoryIndex {
    pub fn new(records: Vec<DocumentRecord>) -> Self {
        Self {
            records,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl ContentIndex for MemoryIndex {
    fn find_by_content_substring<'a>(&'a self, needle: &'a str) -> FindFuture<'a> {
        Box::pin(async move {
            self.lookups.fetch_add(1, Ordering::SeqCst);

            let needle = needle.to_lowercase();
            let matches = self
                .records
                .iter()
                .filter(|record| record.content.to_lowercase().contains(&needle))
                .cloned()
                .collect();

            Ok(matches)
        })
    }
}

/// Fails every lookup, standing in for an unreachable database.
pub struct FailingIndex;

impl ContentIndex for FailingIndex {
    fn find_by_content_substring<'a>(&'a self, _needle: &'a str) -> FindFuture<'a> {
        Box::pin(async {
            Err(StoreError::Migration(
                "database connection timed out".to_string(),
            ))
        })
    }
}
