//! Checks applied to user input before anything is sent to the backend.

use std::path::Path;

use swaggerbuddy_api::types::SwaggerFile;
use url::Url;

use crate::error::SwaggerBuddyError;

/// Largest Swagger document accepted for upload (10 MiB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

pub const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "application/json",
    "text/yaml",
    "application/x-yaml",
    "text/x-yaml",
    "application/yaml",
];

pub const ALLOWED_EXTENSIONS: &[&str] = &[".json", ".yaml", ".yml"];

pub const INVALID_FILE_TYPE: &str = "Please upload a JSON or YAML file";
pub const FILE_TOO_LARGE: &str = "File size must be less than 10MB";
pub const INVALID_URL: &str = "Please enter a valid URL";

/// Lowercased extension including the dot. A name without a dot is returned
/// whole, so it never matches an allowed extension.
fn file_extension(file_name: &str) -> String {
    let lower = file_name.to_lowercase();
    match lower.rfind('.') {
        Some(idx) => lower[idx..].to_string(),
        None => lower,
    }
}

/// Content type without parameters (`application/json; charset=utf-8` -> `application/json`).
fn content_type_essence(content_type: &str) -> String {
    content_type
        .parse::<mime::Mime>()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_else(|_| content_type.trim().to_lowercase())
}

/// Validate file metadata: an allowed MIME type or an allowed extension, and
/// a size of at most [`MAX_FILE_SIZE`].
pub fn validate_file(file_name: &str, content_type: &str, size: u64) -> Result<(), SwaggerBuddyError> {
    let essence = content_type_essence(content_type);
    let extension = file_extension(file_name);
    if !ALLOWED_CONTENT_TYPES.contains(&essence.as_str())
        && !ALLOWED_EXTENSIONS.contains(&extension.as_str())
    {
        return Err(SwaggerBuddyError::InvalidInput(INVALID_FILE_TYPE.to_string()));
    }
    if size > MAX_FILE_SIZE {
        return Err(SwaggerBuddyError::InvalidInput(FILE_TOO_LARGE.to_string()));
    }
    Ok(())
}

/// Validate a Swagger document selected for upload.
pub fn validate_swagger_file(file: &SwaggerFile) -> Result<(), SwaggerBuddyError> {
    validate_file(&file.file_name, &file.content_type, file.size())
}

/// Validate an absolute URL, returning it parsed.
pub fn validate_url(input: &str) -> Result<Url, SwaggerBuddyError> {
    Url::parse(input).map_err(|_| SwaggerBuddyError::InvalidInput(INVALID_URL.to_string()))
}

/// MIME type reported for a local file, guessed from its extension.
pub fn content_type_for(file_name: &str) -> String {
    match file_extension(file_name).as_str() {
        ".json" => mime::APPLICATION_JSON.to_string(),
        ".yaml" | ".yml" => "application/x-yaml".to_string(),
        _ => mime::APPLICATION_OCTET_STREAM.to_string(),
    }
}

/// Load a Swagger document from disk. Type and size are checked from the
/// file metadata before any bytes are read.
pub fn load_swagger_file(path: &Path) -> Result<SwaggerFile, SwaggerBuddyError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            SwaggerBuddyError::InvalidInput(format!("'{}' is not a file", path.display()))
        })?
        .to_string();
    let content_type = content_type_for(&file_name);
    let size = std::fs::metadata(path)?.len();
    validate_file(&file_name, &content_type, size)?;

    let bytes = std::fs::read(path)?;
    tracing::debug!("Loaded {} ({} bytes)", file_name, bytes.len());
    Ok(SwaggerFile {
        file_name,
        content_type,
        bytes,
    })
}
