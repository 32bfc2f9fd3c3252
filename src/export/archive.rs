/// Zip archive assembly
///
/// Packs every gallery entry, in display order, into a zip archive.
/// Entries are named by 1-based position with the extension of their
/// detected format (1.png, 2.jpg, ...). Payloads go in as-is; no
/// re-encoding happens here.

use std::io::{Cursor, Write};
use std::path::PathBuf;

use thiserror::Error;
use tokio::task;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::state::data::ImageEntry;

/// Default filename offered in the save dialog
pub const DEFAULT_ARCHIVE_NAME: &str = "images.zip";

/// Errors that can fail an export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Nothing to export: the gallery is empty")]
    EmptyGallery,

    #[error("Failed to assemble archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Failed to write archive entry: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write {path}: {source}")]
    Save {
        path: String,
        source: std::io::Error,
    },

    #[error("Task join error: {0}")]
    Join(#[from] task::JoinError),
}

/// What an export produced, for the status line
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Number of images packed into the archive
    pub file_count: usize,
    /// Size of the archive on disk, in bytes
    pub archive_bytes: usize,
    /// Where the archive was written
    pub destination: PathBuf,
}

/// Assemble the zip archive in memory.
///
/// Files appear in the archive in list order, named by 1-based
/// position. Rejects an empty list before any work happens.
pub fn build_archive(entries: &[ImageEntry]) -> Result<Vec<u8>, ExportError> {
    if entries.is_empty() {
        return Err(ExportError::EmptyGallery);
    }

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (index, entry) in entries.iter().enumerate() {
        let name = format!("{}.{}", index + 1, entry.extension());
        writer.start_file(name, options)?;
        writer.write_all(&entry.bytes)?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

/// Assemble the archive and write it to `destination`.
///
/// Runs on a blocking thread because compression is CPU-bound.
pub async fn export_archive(
    entries: Vec<ImageEntry>,
    destination: PathBuf,
) -> Result<ExportSummary, ExportError> {
    task::spawn_blocking(move || export_archive_blocking(entries, destination)).await?
}

/// Blocking implementation of the export
fn export_archive_blocking(
    entries: Vec<ImageEntry>,
    destination: PathBuf,
) -> Result<ExportSummary, ExportError> {
    let archive = build_archive(&entries)?;

    std::fs::write(&destination, &archive).map_err(|source| ExportError::Save {
        path: destination.display().to_string(),
        source,
    })?;

    println!(
        "📦 Exported {} images to {} ({} bytes)",
        entries.len(),
        destination.display(),
        archive.len()
    );

    Ok(ExportSummary {
        file_count: entries.len(),
        archive_bytes: archive.len(),
        destination,
    })
}
