/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The ordered gallery list and reordering (gallery.rs)

pub mod data;
pub mod gallery;
