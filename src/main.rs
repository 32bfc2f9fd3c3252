use iced::widget::{button, column, container, mouse_area, row, scrollable, text};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::FileDialog;

// Declare the application modules
mod export;
mod ingest;
mod state;
mod ui;

use export::archive::{self, ExportSummary};
use ingest::loader;
use state::data::LoadedImage;
use state::gallery::ImageList;
use ui::grid::{self, DragState};

/// Main application state
struct SnapGrid {
    /// The ordered gallery of imported images
    gallery: ImageList,
    /// In-progress drag, if the user is holding a tile
    drag: Option<DragState>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the "Add Images" button
    AddImages,
    /// Background batch load completed
    BatchLoaded(Result<Vec<LoadedImage>, String>),
    /// User pressed a tile, starting a drag from that index
    DragStarted(usize),
    /// Cursor moved over a tile mid-drag
    DragEntered(usize),
    /// User released over a tile
    DroppedOn(usize),
    /// User released outside any tile
    DragCancelled,
    /// User clicked the "Clear" button
    ClearGallery,
    /// User clicked the "Export Zip" button
    ExportArchive,
    /// Background archive export completed
    ExportFinished(Result<ExportSummary, String>),
}

impl SnapGrid {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        (
            SnapGrid {
                gallery: ImageList::new(),
                drag: None,
                status: String::from("Ready. Add some images to get started."),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AddImages => {
                // Show the native multi-file picker, filtered to images
                let picked = FileDialog::new()
                    .set_title("Select Images")
                    .add_filter("Images", &loader::IMAGE_EXTENSIONS)
                    .pick_files();

                if let Some(paths) = picked {
                    if paths.is_empty() {
                        return Task::none();
                    }

                    self.status = format!("Loading {} images...", paths.len());

                    // Launch async batch load
                    return Task::perform(loader::load_batch(paths), |result| {
                        Message::BatchLoaded(result.map_err(|e| e.to_string()))
                    });
                }

                Task::none()
            }
            Message::BatchLoaded(Ok(batch)) => {
                let appended = self.gallery.append_batch(batch);
                self.status = format!(
                    "✅ Added {} images. {} in gallery.",
                    appended,
                    self.gallery.len()
                );
                Task::none()
            }
            Message::BatchLoaded(Err(error)) => {
                // The whole batch is rejected; the gallery is unchanged
                eprintln!("⚠️  Import failed: {}", error);
                self.status = format!("⚠️ Import failed: {}", error);
                Task::none()
            }
            Message::DragStarted(index) => {
                self.drag = Some(DragState {
                    source: index,
                    hover: None,
                });
                Task::none()
            }
            Message::DragEntered(index) => {
                if let Some(drag) = &mut self.drag {
                    // Hovering the source tile is not a drop target
                    drag.hover = if index == drag.source {
                        None
                    } else {
                        Some(index)
                    };
                }
                Task::none()
            }
            Message::DroppedOn(target) => {
                if let Some(drag) = self.drag.take() {
                    if self.gallery.reorder(drag.source, target) {
                        self.status = format!(
                            "Moved image from position {} to {}.",
                            drag.source + 1,
                            target + 1
                        );
                    }
                }
                Task::none()
            }
            Message::DragCancelled => {
                self.drag = None;
                Task::none()
            }
            Message::ClearGallery => {
                self.gallery.clear();
                self.drag = None;
                self.status = String::from("Gallery cleared.");
                Task::none()
            }
            Message::ExportArchive => {
                // The button is disabled when empty, but guard anyway
                if self.gallery.is_empty() {
                    return Task::none();
                }

                // Show the native save dialog with the fixed default name
                let destination = FileDialog::new()
                    .set_title("Save Archive")
                    .set_file_name(archive::DEFAULT_ARCHIVE_NAME)
                    .save_file();

                if let Some(destination) = destination {
                    self.status = format!("Exporting {} images...", self.gallery.len());

                    // Snapshot the current order; later reorders don't
                    // affect an export already in flight
                    let entries = self.gallery.entries().to_vec();

                    return Task::perform(
                        archive::export_archive(entries, destination),
                        |result| Message::ExportFinished(result.map_err(|e| e.to_string())),
                    );
                }

                Task::none()
            }
            Message::ExportFinished(Ok(summary)) => {
                self.status = format!(
                    "✅ Exported {} images to {} ({:.1} KB)",
                    summary.file_count,
                    summary.destination.display(),
                    summary.archive_bytes as f64 / 1024.0
                );
                Task::none()
            }
            Message::ExportFinished(Err(error)) => {
                eprintln!("⚠️  Export failed: {}", error);
                self.status = format!("⚠️ Export failed: {}", error);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let add = button("Add Images").on_press(Message::AddImages).padding(10);

        // Export and Clear only make sense with images present
        let mut export = button("Export Zip").padding(10);
        let mut clear = button("Clear").padding(10);
        if !self.gallery.is_empty() {
            export = export.on_press(Message::ExportArchive);
            clear = clear.on_press(Message::ClearGallery);
        }

        let toolbar = row![add, export, clear]
            .spacing(10)
            .align_y(Alignment::Center);

        let body: Element<Message> = if self.gallery.is_empty() {
            container(text("No images yet. Click \"Add Images\" to get started.").size(16))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into()
        } else {
            let grid = grid::image_grid(self.gallery.entries(), self.drag);

            // Releasing outside any tile lands here and cancels the drag
            mouse_area(
                scrollable(container(grid).padding(16).width(Length::Fill))
                    .height(Length::Fill),
            )
            .on_release(Message::DragCancelled)
            .into()
        };

        column![toolbar, body, text(&self.status).size(14)]
            .spacing(16)
            .padding(16)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application("SnapGrid", SnapGrid::update, SnapGrid::view)
        .theme(SnapGrid::theme)
        .centered()
        .run_with(SnapGrid::new)
}
