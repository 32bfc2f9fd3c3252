/// Drag-and-drop thumbnail grid
///
/// Renders the gallery as fixed-size tiles that wrap to the window
/// width. Every tile is wrapped in a mouse area so the main update loop
/// sees press / enter / release and can run the reorder.

use iced::widget::{container, image, mouse_area};
use iced::{Border, ContentFit, Element, Length, Theme};
use iced_aw::Wrap;

use crate::state::data::ImageEntry;
use crate::Message;

/// Edge length of a thumbnail tile in logical pixels
const TILE_SIZE: f32 = 140.0;

/// Spacing between tiles
const TILE_SPACING: f32 = 16.0;

/// An in-progress drag interaction
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    /// Index the drag started from
    pub source: usize,
    /// Index currently under the cursor, if it differs from the source
    pub hover: Option<usize>,
}

/// How a tile should be styled during a drag
#[derive(Debug, Clone, Copy, PartialEq)]
enum TileRole {
    Idle,
    /// The tile being dragged
    Dragging,
    /// The tile the drag would drop onto
    DropTarget,
}

/// Build the wrapping grid of thumbnail tiles
pub fn image_grid(entries: &[ImageEntry], drag: Option<DragState>) -> Element<'static, Message> {
    let tiles: Vec<Element<'static, Message>> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| tile(index, entry, drag))
        .collect();

    Wrap::with_elements(tiles)
        .spacing(TILE_SPACING)
        .line_spacing(TILE_SPACING)
        .into()
}

/// One thumbnail tile with its drag interaction hooks
fn tile(index: usize, entry: &ImageEntry, drag: Option<DragState>) -> Element<'static, Message> {
    let role = match drag {
        Some(drag) if drag.hover == Some(index) => TileRole::DropTarget,
        Some(drag) if drag.source == index => TileRole::Dragging,
        _ => TileRole::Idle,
    };

    let thumbnail = image(entry.handle.clone())
        .width(Length::Fixed(TILE_SIZE))
        .height(Length::Fixed(TILE_SIZE))
        .content_fit(ContentFit::Cover);

    let framed = container(thumbnail)
        .padding(4)
        .style(move |theme: &Theme| tile_style(theme, role));

    mouse_area(framed)
        .on_press(Message::DragStarted(index))
        .on_enter(Message::DragEntered(index))
        .on_release(Message::DroppedOn(index))
        .into()
}

/// Tile frame styling: the drop target gets an accent border
fn tile_style(theme: &Theme, role: TileRole) -> container::Style {
    let palette = theme.extended_palette();

    let border = match role {
        TileRole::DropTarget => Border {
            color: palette.primary.strong.color,
            width: 3.0,
            radius: 8.0.into(),
        },
        TileRole::Dragging => Border {
            color: palette.background.strong.color,
            width: 2.0,
            radius: 8.0.into(),
        },
        TileRole::Idle => Border {
            color: palette.background.weak.color,
            width: 1.0,
            radius: 8.0.into(),
        },
    };

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border,
        ..container::Style::default()
    }
}
