use serde::{Deserialize, Serialize};

/// One row of the `documents` table: the full exported plain-text body of a
/// document, keyed by a stable integer id. Rows are written by an external
/// process; this crate only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DocumentRecord {
    pub id: i32,
    pub name: String,
    pub content: String,
}
