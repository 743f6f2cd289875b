//! Append-only record of documents generated during the session.

use uuid::Uuid;

use crate::models::document::GeneratedDocument;

#[derive(Debug, Default)]
pub struct HistoryStore {
    documents: Vec<GeneratedDocument>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, document: GeneratedDocument) {
        self.documents.push(document);
    }

    /// Documents in generation order.
    pub fn list(&self) -> &[GeneratedDocument] {
        &self.documents
    }

    pub fn get(&self, id: Uuid) -> Option<&GeneratedDocument> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn clear(&mut self) {
        self.documents.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::DocumentKind;

    fn doc(body: &str) -> GeneratedDocument {
        GeneratedDocument::new(
            DocumentKind::Resume,
            "Jane Doe",
            "Backend Engineer",
            "Acme",
            body.to_string(),
        )
    }

    #[test]
    fn test_append_preserves_generation_order() {
        let mut history = HistoryStore::new();
        history.append(doc("first"));
        history.append(doc("second"));
        history.append(doc("first"));

        let bodies: Vec<_> = history.list().iter().map(|d| d.body_text.as_str()).collect();
        assert_eq!(bodies, vec!["first", "second", "first"]);
    }

    #[test]
    fn test_get_by_id() {
        let mut history = HistoryStore::new();
        let document = doc("body");
        let id = document.id;
        history.append(document);

        assert_eq!(history.get(id).map(|d| d.body_text.as_str()), Some("body"));
        assert!(history.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_clear() {
        let mut history = HistoryStore::new();
        history.append(doc("x"));
        history.clear();
        assert!(history.is_empty());
    }
}
