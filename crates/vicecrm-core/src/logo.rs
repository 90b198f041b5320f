//! Logo asset handling: type and size validation plus data-URI encoding.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::path::Path;

use crate::error::SettingsError;

/// Maximum accepted logo size in bytes (2 MiB).
pub const MAX_LOGO_BYTES: u64 = 2 * 1024 * 1024;

/// Accepted upload types, keyed by file extension.
const ACCEPTED_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("svg", "image/svg+xml"),
];

/// MIME type for an accepted logo file name, if any.
pub fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    ACCEPTED_TYPES
        .iter()
        .find(|(accepted, _)| *accepted == ext)
        .map(|(_, mime)| *mime)
}

/// Read a logo file into a `data:` URI after type and size checks.
///
/// The size check runs against file metadata before the contents are read.
pub fn data_uri_from_file(path: &Path) -> Result<String, SettingsError> {
    let Some(mime) = mime_for(path) else {
        return Err(SettingsError::Validation(
            "Unsupported logo type. Choose a PNG, JPG or SVG file".to_string(),
        ));
    };

    let metadata = std::fs::metadata(path).map_err(|err| {
        SettingsError::Validation(format!("Cannot read logo file {}: {err}", path.display()))
    })?;
    if metadata.len() > MAX_LOGO_BYTES {
        return Err(SettingsError::Validation(
            "Logo file is too large. The maximum size is 2 MiB".to_string(),
        ));
    }

    let bytes = std::fs::read(path).map_err(|err| {
        SettingsError::Validation(format!("Cannot read logo file {}: {err}", path.display()))
    })?;
    Ok(data_uri(mime, &bytes))
}

/// Assemble a data URI from a MIME type and raw bytes.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}
