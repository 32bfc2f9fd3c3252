/// File ingestion module
///
/// This module handles:
/// - Reading batches of user-selected image files
/// - Verifying each file decodes as a supported image
/// - Handing validated batches to the gallery state

pub mod loader;
