/// UI widgets module
///
/// This module builds the widget tree pieces that are too involved to
/// live inline in the main view:
/// - `grid.rs` - the drag-and-drop thumbnail grid

pub mod grid;
