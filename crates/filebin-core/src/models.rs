//! Domain models.

use serde::{Deserialize, Serialize};

/// Privacy value assigned when the upload supplies none.
pub const DEFAULT_PRIVACY: &str = "private";

/// One uploaded file's metadata.
///
/// `id` is generated at upload time as a fresh UUID with the original
/// filename's extension appended, and doubles as the blob filename on disk.
/// It is unique across the store and immutable once created. `privacy` is a
/// free-form string (any client-supplied value is accepted) and is the only
/// mutable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: String,
    /// Client-supplied filename at upload time; free-form, not sanitized.
    pub original_name: String,
    /// Byte length of the stored blob at upload time. Not re-validated
    /// against disk state on later reads.
    pub size: u64,
    /// Client-declared content type; not validated.
    pub mimetype: String,
    pub privacy: String,
}

/// Response body for a successful upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub file: FileRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> FileRecord {
        FileRecord {
            id: "7b1f3c6e-1f2a-4e5b-9c8d-0a1b2c3d4e5f.txt".to_string(),
            original_name: "a.txt".to_string(),
            size: 2,
            mimetype: "text/plain".to_string(),
            privacy: DEFAULT_PRIVACY.to_string(),
        }
    }

    #[test]
    fn test_record_json_shape() {
        let json = serde_json::to_value(sample_record()).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "id": "7b1f3c6e-1f2a-4e5b-9c8d-0a1b2c3d4e5f.txt",
                "originalName": "a.txt",
                "size": 2,
                "mimetype": "text/plain",
                "privacy": "private"
            })
        );
    }

    #[test]
    fn test_record_roundtrip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).expect("serialize");
        let back: FileRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(record, back);
    }

    #[test]
    fn test_upload_response_wraps_record_under_file_key() {
        let json = serde_json::to_value(UploadResponse {
            file: sample_record(),
        })
        .expect("serialize");
        assert!(json.get("file").is_some());
        assert_eq!(
            json["file"]["originalName"],
            serde_json::Value::String("a.txt".to_string())
        );
    }
}
