pub mod migrations;
pub mod models;
pub mod store;

pub use migrations::run_migrations;
pub use models::DocumentRecord;
pub use store::{IndexStore, StoreError};

pub type FindFuture<'a> =
    std::pin::Pin<Box<dyn std::future::Future<Output = Result<Vec<DocumentRecord>, StoreError>> + Send + 'a>>;

/// Read seam over the document index. The production implementation is
/// [`IndexStore`]; tests substitute in-memory indexes.
pub trait ContentIndex: Send + Sync {
    fn find_by_content_substring<'a>(&'a self, needle: &'a str) -> FindFuture<'a>;
}

impl ContentIndex for IndexStore {
    fn find_by_content_substring<'a>(&'a self, needle: &'a str) -> FindFuture<'a> {
        Box::pin(self.find_by_content_substring(needle))
    }
}
