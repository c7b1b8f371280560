use serde::{Deserialize, Serialize};
use std::fmt;

use super::STATUS_AVAILABLE;

/// One book entry extracted from a catalog result page.
///
/// `available` is derived from `status_raw` at construction time and cannot be
/// set on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawBookRecord")]
pub struct BookRecord {
    pub title: String,
    pub author: Option<String>,
    pub library: Option<String>,
    pub status_raw: String,
    available: bool,
    pub call_number: Option<String>,
    pub cover_image: Option<String>,
}

// Deserialization goes through here so a stored `available` never overrides
// the one derived from `status_raw`.
#[derive(Deserialize)]
struct RawBookRecord {
    title: String,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    library: Option<String>,
    #[serde(default)]
    status_raw: String,
    #[serde(default)]
    call_number: Option<String>,
    #[serde(default)]
    cover_image: Option<String>,
}

impl From<RawBookRecord> for BookRecord {
    fn from(raw: RawBookRecord) -> Self {
        BookRecord::new(raw.title, raw.library, raw.status_raw)
            .with_author(raw.author)
            .with_call_number(raw.call_number)
            .with_cover_image(raw.cover_image)
    }
}

/// Identity used for cross-page deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey(pub String, pub Option<String>);

impl BookRecord {
    pub fn new(
        title: impl Into<String>,
        library: Option<String>,
        status_raw: impl Into<String>,
    ) -> Self {
        let status_raw = status_raw.into();
        Self {
            title: title.into(),
            author: None,
            library,
            available: status_to_available(&status_raw),
            status_raw,
            call_number: None,
            cover_image: None,
        }
    }

    pub fn with_author(mut self, author: Option<String>) -> Self {
        self.author = author;
        self
    }

    pub fn with_call_number(mut self, call_number: Option<String>) -> Self {
        self.call_number = call_number;
        self
    }

    pub fn with_cover_image(mut self, cover_image: Option<String>) -> Self {
        self.cover_image = cover_image;
        self
    }

    pub fn available(&self) -> bool {
        self.available
    }

    pub fn key(&self) -> RecordKey {
        RecordKey(self.title.clone(), self.library.clone())
    }
}

/// True iff the status phrase carries the "loan available" keyword.
pub fn status_to_available(status_raw: &str) -> bool {
    status_raw.contains(STATUS_AVAILABLE)
}

impl fmt::Display for BookRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {} [{}]",
            self.title,
            self.library.as_deref().unwrap_or("?"),
            if self.status_raw.is_empty() { "-" } else { self.status_raw.as_str() }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_follows_status_keyword() {
        assert!(BookRecord::new("책", None, "대출가능").available());
        assert!(BookRecord::new("책", None, "대출가능(비치자료)").available());
        assert!(!BookRecord::new("책", None, "대출중").available());
        assert!(!BookRecord::new("책", None, "").available());
    }

    #[test]
    fn deserialized_available_is_rederived() {
        let line = r#"{"title":"어린 왕자","library":"글빛도서관","status_raw":"대출중","available":true}"#;
        let record: BookRecord = serde_json::from_str(line).unwrap();
        assert!(!record.available());
        assert_eq!(record.library.as_deref(), Some("글빛도서관"));
    }

    #[test]
    fn serializes_all_fields_with_raw_hangul() {
        let record = BookRecord::new("어린 왕자", Some("글빛도서관".into()), "대출가능");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"title":"어린 왕자","author":null,"library":"글빛도서관","status_raw":"대출가능","available":true,"call_number":null,"cover_image":null}"#
        );
    }
}
