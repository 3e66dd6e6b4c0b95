/// The tile rendered for a single GIF record
///
/// The tile is an opaque renderer from the grid's point of view: it takes
/// one record plus the optional search term and produces a box whose
/// height follows the record's aspect ratio at the fixed column width.
/// Because tile height is exactly what the balancer assumed, the columns
/// on screen match the partition it computed. Decoding the GIF bytes is
/// deliberately out of scope; the tile shows the description instead.

use iced::widget::{column, container, text};
use iced::{Element, Length};

use crate::balance;
use crate::state::data::GifImage;
use crate::Message;

/// Fixed tile width; tile heights follow each GIF's aspect ratio
pub const TILE_WIDTH: f32 = 220.0;

/// Floor so malformed (zero-dimension) records still get a visible tile
const MIN_TILE_HEIGHT: f32 = 48.0;

/// Render one GIF record as a proportioned tile
pub fn gif_tile<'a>(image: &'a GifImage, search_term: Option<&str>) -> Element<'a, Message> {
    let height = (TILE_WIDTH * balance::aspect_ratio(image)).max(MIN_TILE_HEIGHT);

    // Some records ship without a description; the asset URL is the only
    // label left to show.
    let label = if image.description.is_empty() {
        image.url.as_str()
    } else {
        image.description.as_str()
    };
    let description = text(label).size(13);
    // Highlight tiles whose description actually mentions the search term.
    let description = if matches_term(image, search_term) {
        description.style(text::primary)
    } else {
        description
    };

    let caption = text(format!(
        "{}×{}",
        image.preview_width, image.preview_height
    ))
    .size(11)
    .style(text::secondary);

    container(column![description, caption].spacing(4))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding(8)
        .style(container::rounded_box)
        .into()
}

fn matches_term(image: &GifImage, search_term: Option<&str>) -> bool {
    match search_term {
        Some(term) if !term.is_empty() => image
            .description
            .to_lowercase()
            .contains(&term.to_lowercase()),
        _ => false,
    }
}
