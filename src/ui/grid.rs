/// The balanced-column grid view
///
/// Renders the accumulated results of the current session as a row of
/// columns produced by the balancer. The partition is recomputed on every
/// view pass from the full result set and the current column count, so
/// appends and column-count changes never leave a stale layout behind.

use iced::widget::{column, container, text, Column, Row};
use iced::{Element, Length};

use crate::balance;
use crate::state::data::GifImage;
use crate::ui::item;
use crate::Message;

/// Gap between columns and between tiles within a column
const GRID_SPACING: u16 = 8;

/// Render the grid for the current feed state.
///
/// An empty feed that is still loading shows a loading notice; an empty
/// feed that has settled shows the no-results notice; anything else shows
/// the balanced columns.
pub fn gif_grid<'a>(
    images: &'a [GifImage],
    is_loading: bool,
    search_term: Option<&'a str>,
    columns_count: usize,
) -> Element<'a, Message> {
    if images.is_empty() {
        let notice = if is_loading {
            "Loading GIFs..."
        } else {
            "No GIFs found!"
        };
        return container(text(notice).size(18))
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding(48)
            .into();
    }

    let mut grid = Row::new().spacing(GRID_SPACING);
    for column_images in balance::balance(images, columns_count) {
        let mut tiles = Column::new()
            .spacing(GRID_SPACING)
            .width(Length::Fixed(item::TILE_WIDTH));
        for image in column_images {
            tiles = tiles.push(item::gif_tile(image, search_term));
        }
        grid = grid.push(tiles);
    }

    if is_loading {
        // A page fetch is in flight behind the already-rendered results.
        let footer = container(text("Loading more...").size(14))
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding(16);
        return column![grid, footer].into();
    }

    grid.into()
}
