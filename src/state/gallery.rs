/// The ordered gallery list
///
/// Holds every imported image in display order. Order is the only thing
/// that ever changes after an entry is created; entries themselves are
/// immutable and leave the list only when the whole gallery is cleared.

use iced::widget::image::Handle;

use super::data::{ImageEntry, LoadedImage};

/// The in-memory gallery: an ordered list of image entries.
#[derive(Debug, Default)]
pub struct ImageList {
    entries: Vec<ImageEntry>,
    /// Next identifier to hand out. Never reused, not even after clear(),
    /// so ids stay unique for the life of the process.
    next_id: u64,
}

impl ImageList {
    /// Create an empty gallery
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of images in the gallery
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the gallery holds no images
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries in display order
    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    /// Append a loaded batch to the end of the list.
    ///
    /// Each image gets the next identifier; the relative order of the
    /// batch (the user's selection order) is preserved. Returns the
    /// number of entries appended.
    pub fn append_batch(&mut self, batch: Vec<LoadedImage>) -> usize {
        let appended = batch.len();
        self.entries.reserve(appended);

        for loaded in batch {
            let id = self.next_id;
            self.next_id += 1;

            let handle = Handle::from_bytes(loaded.bytes.clone());
            self.entries.push(ImageEntry {
                id,
                filename: loaded.filename,
                bytes: loaded.bytes,
                format: loaded.format,
                handle,
            });
        }

        appended
    }

    /// Move the entry at `from` to position `to`, shifting the entries
    /// in between.
    ///
    /// All other entries keep their relative order. Returns false (and
    /// leaves the list untouched) when `from == to` or either index is
    /// out of bounds.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.entries.len() || to >= self.entries.len() {
            return false;
        }

        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        true
    }

    /// Discard every entry. The identifier counter keeps counting.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;

    fn loaded(name: &str) -> LoadedImage {
        LoadedImage {
            filename: name.to_string(),
            bytes: name.as_bytes().to_vec(),
            format: ImageFormat::Png,
        }
    }

    fn names(list: &ImageList) -> Vec<&str> {
        list.entries().iter().map(|e| e.filename.as_str()).collect()
    }

    #[test]
    fn test_append_preserves_selection_order() {
        let mut list = ImageList::new();
        let count = list.append_batch(vec![loaded("a"), loaded("b"), loaded("c")]);

        assert_eq!(count, 3);
        assert_eq!(names(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_append_ids_are_unique_and_increasing() {
        let mut list = ImageList::new();
        list.append_batch(vec![loaded("a"), loaded("b")]);
        list.append_batch(vec![loaded("c")]);

        let ids: Vec<u64> = list.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_second_batch_appends_at_end() {
        let mut list = ImageList::new();
        list.append_batch(vec![loaded("a"), loaded("b")]);
        list.append_batch(vec![loaded("c"), loaded("d")]);

        assert_eq!(names(&list), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_reorder_moves_forward() {
        let mut list = ImageList::new();
        list.append_batch(vec![loaded("a"), loaded("b"), loaded("c"), loaded("d")]);

        assert!(list.reorder(0, 2));
        assert_eq!(names(&list), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_reorder_moves_backward() {
        let mut list = ImageList::new();
        list.append_batch(vec![loaded("a"), loaded("b"), loaded("c"), loaded("d")]);

        assert!(list.reorder(3, 1));
        assert_eq!(names(&list), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_reorder_same_position_is_noop() {
        let mut list = ImageList::new();
        list.append_batch(vec![loaded("a"), loaded("b")]);

        assert!(!list.reorder(1, 1));
        assert_eq!(names(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_reorder_out_of_bounds_is_noop() {
        let mut list = ImageList::new();
        list.append_batch(vec![loaded("a"), loaded("b")]);

        assert!(!list.reorder(0, 2));
        assert!(!list.reorder(5, 0));
        assert_eq!(names(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_reorder_keeps_ids_with_entries() {
        let mut list = ImageList::new();
        list.append_batch(vec![loaded("a"), loaded("b"), loaded("c")]);

        list.reorder(2, 0);

        let pairs: Vec<(u64, &str)> = list
            .entries()
            .iter()
            .map(|e| (e.id, e.filename.as_str()))
            .collect();
        assert_eq!(pairs, vec![(2, "c"), (0, "a"), (1, "b")]);
    }

    #[test]
    fn test_clear_does_not_reset_ids() {
        let mut list = ImageList::new();
        list.append_batch(vec![loaded("a"), loaded("b")]);
        list.clear();

        assert!(list.is_empty());

        list.append_batch(vec![loaded("c")]);
        assert_eq!(list.entries()[0].id, 2);
    }
}
