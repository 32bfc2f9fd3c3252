/// Archive export module
///
/// This module handles:
/// - Packing the gallery into a zip archive in display order
/// - Writing the archive to a user-chosen destination

pub mod archive;
