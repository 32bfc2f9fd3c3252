/// Batch image loader
///
/// Reads every file of a selection and verifies the bytes decode as an
/// image before anything is shown in the gallery. The batch is
/// all-or-nothing: one unreadable or undecodable file rejects the whole
/// selection and the gallery is left untouched.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::task;

use crate::state::data::LoadedImage;

/// Extensions offered in the file picker filter
pub const IMAGE_EXTENSIONS: [&str; 8] = [
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff",
];

/// Errors that can reject an import batch
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("{path} is not a supported image: {source}")]
    Decode {
        path: String,
        source: image::ImageError,
    },

    #[error("Task join error: {0}")]
    Join(#[from] task::JoinError),
}

/// Load a batch of image files.
///
/// Each file is read by its own task; results are merged in selection
/// order once all of them complete, so concurrency never reorders the
/// batch. Any single failure fails the whole batch.
pub async fn load_batch(paths: Vec<PathBuf>) -> Result<Vec<LoadedImage>, IngestError> {
    let mut handles = Vec::with_capacity(paths.len());
    for path in paths {
        handles.push(task::spawn(load_one(path)));
    }

    let mut batch = Vec::with_capacity(handles.len());
    for handle in handles {
        batch.push(handle.await??);
    }

    println!("🖼️  Loaded batch of {} images", batch.len());
    Ok(batch)
}

/// Read one file and verify it decodes as an image
async fn load_one(path: PathBuf) -> Result<LoadedImage, IngestError> {
    let filename = display_name(&path);

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| IngestError::Read {
            path: path.display().to_string(),
            source,
        })?;

    // Full decode on a blocking thread because decoding is CPU-bound
    let display = path.display().to_string();
    task::spawn_blocking(move || {
        let format = image::guess_format(&bytes).map_err(|source| IngestError::Decode {
            path: display.clone(),
            source,
        })?;

        image::load_from_memory_with_format(&bytes, format).map_err(|source| {
            IngestError::Decode {
                path: display,
                source,
            }
        })?;

        Ok(LoadedImage {
            filename,
            bytes,
            format,
        })
    })
    .await?
}

/// Filename component of a path, falling back to the full path
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    /// Encode a 1x1 PNG so tests have bytes that really decode
    fn tiny_png() -> Vec<u8> {
        let img = image::DynamicImage::ImageRgba8(image::RgbaImage::new(1, 1));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    /// Write test bytes to a unique file in the system temp directory
    fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "snapgrid-loader-test-{}-{}",
            std::process::id(),
            name
        ));
        fs::write(&path, bytes).unwrap();
        path
    }

    #[tokio::test]
    async fn test_empty_batch_is_ok() {
        let batch = load_batch(Vec::new()).await.unwrap();
        assert!(batch.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_fails() {
        let result = load_batch(vec![PathBuf::from("/nonexistent/photo.png")]).await;
        assert!(matches!(result, Err(IngestError::Read { .. })));
    }

    #[tokio::test]
    async fn test_batch_preserves_selection_order() {
        let a = temp_file("a.png", &tiny_png());
        let b = temp_file("b.png", &tiny_png());

        let batch = load_batch(vec![a.clone(), b.clone()]).await.unwrap();

        assert_eq!(batch.len(), 2);
        assert!(batch[0].filename.ends_with("a.png"));
        assert!(batch[1].filename.ends_with("b.png"));
        assert_eq!(batch[0].format, image::ImageFormat::Png);

        let _ = fs::remove_file(a);
        let _ = fs::remove_file(b);
    }

    #[tokio::test]
    async fn test_one_bad_file_rejects_whole_batch() {
        let good = temp_file("good.png", &tiny_png());
        let bad = temp_file("bad.png", b"this is not an image");

        let result = load_batch(vec![good.clone(), bad.clone()]).await;
        assert!(matches!(result, Err(IngestError::Decode { .. })));

        let _ = fs::remove_file(good);
        let _ = fs::remove_file(bad);
    }
}
