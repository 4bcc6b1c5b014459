use serde::{Deserialize, Serialize};

/// A single gallery entry.
///
/// `filepath` doubles as the record's identity: it is the storage-relative
/// file name in browser-hosted contexts and the full native URI in hybrid
/// contexts, and it is unique within the active list. The persisted field
/// name for `webview_path` is `webviewPath`, matching the gallery's stored
/// JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub filepath: String,

    /// A location the view can render directly (URL or data URI).
    /// Absent until resolved.
    #[serde(rename = "webviewPath", default, skip_serializing_if = "Option::is_none")]
    pub webview_path: Option<String>,
}

impl PhotoRecord {
    pub fn new(filepath: impl Into<String>, webview_path: Option<String>) -> Self {
        Self {
            filepath: filepath.into(),
            webview_path,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.webview_path.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_stored_field_names() {
        let record = PhotoRecord::new("1700000000000.jpeg", Some("blob:cam/1".to_string()));
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"filepath":"1700000000000.jpeg","webviewPath":"blob:cam/1"}"#
        );
    }

    #[test]
    fn unresolved_record_omits_webview_path() {
        let record = PhotoRecord::new("a.jpeg", None);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"filepath":"a.jpeg"}"#);

        let parsed: PhotoRecord = serde_json::from_str(&json).unwrap();
        assert!(!parsed.is_resolved());
    }

    #[test]
    fn roundtrips_through_json() {
        let record = PhotoRecord::new("a.jpeg", Some("file:///data/a.jpeg".to_string()));
        let parsed: PhotoRecord =
            serde_json::from_str(&serde_json::to_string(&record).unwrap()).unwrap();
        assert_eq!(parsed, record);
    }
}
