use serde::{Deserialize, Serialize};

/// One entry of a document listing: the `id` is the backend's opaque file
/// identifier, `name` the display file name. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_document_summary() {
        let summary = DocumentSummary {
            id: "a1".to_string(),
            name: "report.pdf".to_string(),
        };

        let json = serde_json::to_string(&summary).unwrap();
        let expected = r#"{"id":"a1","name":"report.pdf"}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn should_deserialize_document_summary() {
        let json = r#"{"id":"a1","name":"report.pdf"}"#;
        let summary: DocumentSummary = serde_json::from_str(json).unwrap();

        assert_eq!(summary.id, "a1");
        assert_eq!(summary.name, "report.pdf");
    }
}
