/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the ingestion layer and the UI layer.

use iced::widget::image::Handle;
use image::ImageFormat;

/// A file that was read and decode-checked, before it joins the gallery.
///
/// Produced by the ingestion layer; the gallery assigns the identifier
/// when the batch is appended.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// Original filename (e.g., "IMG_0042.jpg")
    pub filename: String,
    /// Raw file bytes, exactly as read from disk
    pub bytes: Vec<u8>,
    /// Image format detected from the bytes
    pub format: ImageFormat,
}

/// One image in the gallery
#[derive(Debug, Clone)]
pub struct ImageEntry {
    /// Unique identifier, stable across reorders
    pub id: u64,
    /// Original filename
    pub filename: String,
    /// Raw file bytes (the export payload)
    pub bytes: Vec<u8>,
    /// Detected image format
    pub format: ImageFormat,
    /// Render handle for the thumbnail widget
    pub handle: Handle,
}

impl ImageEntry {
    /// File extension for the detected format (e.g., "png", "jpg")
    pub fn extension(&self) -> &'static str {
        self.format.extensions_str().first().copied().unwrap_or("img")
    }
}
