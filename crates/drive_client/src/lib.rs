pub mod config;
pub mod drive;
pub mod models;

pub use config::DriveConfig;
pub use drive::{DriveClient, SourceError};
pub use models::DocumentSummary;

pub type ListFuture<'a> =
    std::pin::Pin<Box<dyn std::future::Future<Output = Result<Vec<DocumentSummary>, SourceError>> + Send + 'a>>;

pub type ExportFuture<'a> =
    std::pin::Pin<Box<dyn std::future::Future<Output = Result<String, SourceError>> + Send + 'a>>;

/// Seam between the services and the remote document backend. The production
/// implementation is [`DriveClient`]; tests substitute in-memory sources.
pub trait DocumentSource: Send + Sync {
    fn list_pdf_documents(&self) -> ListFuture<'_>;
    fn export_text<'a>(&'a self, id: &'a str) -> ExportFuture<'a>;
}

impl DocumentSource for DriveClient {
    fn list_pdf_documents(&self) -> ListFuture<'_> {
        Box::pin(self.list_pdf_documents())
    }

    fn export_text<'a>(&'a self, id: &'a str) -> ExportFuture<'a> {
        Box::pin(self.export_text(id))
    }
}
