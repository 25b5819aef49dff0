//! Inline `data:` URI encoding of image files.
//!
//! Every file of a batch is read on its own tokio task; the batch only
//! succeeds when all reads succeed, and results keep the input order.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::future::Future;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, error};

/// Failure encoding a batch of files.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file read task was interrupted: {0}")]
    Interrupted(String),
}

impl EncodeError {
    /// Path of the file that could not be read, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            EncodeError::Read { path, .. } => Some(path),
            EncodeError::Interrupted(_) => None,
        }
    }
}

/// MIME type for a file, derived from its extension.
pub fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" | "jfif" | "pjpeg" | "pjp" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" | "svgz" => "image/svg+xml",
        "bmp" => "image/bmp",
        "ico" => "image/x-icon",
        "avif" => "image/avif",
        "tif" | "tiff" => "image/tiff",
        "heic" => "image/heic",
        "heif" => "image/heif",
        _ => "application/octet-stream",
    }
}

/// Build a base64 `data:` URI from raw bytes.
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Read one file and return it as a `data:` URI.
pub async fn read_as_data_url(path: PathBuf) -> Result<String, EncodeError> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| EncodeError::Read {
            path: path.clone(),
            source,
        })?;
    debug!("Read {} ({} bytes)", path.display(), bytes.len());
    Ok(to_data_url(mime_type_for(&path), &bytes))
}

/// Encode every file concurrently, preserving input order.
pub async fn encode_files(paths: &[PathBuf]) -> Result<Vec<String>, EncodeError> {
    encode_with(paths.iter().cloned(), read_as_data_url).await
}

/// Run `read` for every item on its own task and join them all-or-nothing.
///
/// Outputs are returned in input order regardless of completion order. Reads
/// are collected as they finish, so the first failure aborts the remaining
/// reads right away and its error is returned.
pub async fn encode_with<I, F, Fut>(items: I, read: F) -> Result<Vec<String>, EncodeError>
where
    I: IntoIterator,
    F: Fn(I::Item) -> Fut,
    Fut: Future<Output = Result<String, EncodeError>> + Send + 'static,
{
    let mut reads = JoinSet::new();
    for (index, item) in items.into_iter().enumerate() {
        let read_one = read(item);
        reads.spawn(async move { (index, read_one.await) });
    }

    let mut slots: Vec<Option<String>> = vec![None; reads.len()];
    while let Some(joined) = reads.join_next().await {
        let outcome = match joined {
            Ok((index, result)) => result.map(|data_url| (index, data_url)),
            Err(e) => Err(EncodeError::Interrupted(e.to_string())),
        };

        match outcome {
            Ok((index, data_url)) => slots[index] = Some(data_url),
            Err(e) => {
                error!("Image encoding failed: {}", e);
                reads.abort_all();
                return Err(e);
            }
        }
    }

    debug!("Encoded {} files", slots.len());
    Ok(slots.into_iter().flatten().collect())
}
