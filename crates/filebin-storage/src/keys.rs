//! Blob filename generation.
//!
//! Format: `{uuid-v4}{extension}` where the extension (dot included) comes
//! from the client-supplied filename, or nothing when it has none. The
//! result is also the record id.

use uuid::Uuid;

/// Generate a fresh blob filename for an upload.
pub fn blob_filename(original_name: &str) -> String {
    format!("{}{}", Uuid::new_v4(), file_extension(original_name))
}

/// Extension of `name` with the leading dot, or empty when there is none.
fn file_extension(name: &str) -> String {
    std::path::Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}
