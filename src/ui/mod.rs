/// UI building blocks for the GIF grid
///
/// This module renders the feed state, including:
/// - The balanced-column grid view (grid.rs)
/// - The tile rendered for a single GIF record (item.rs)

pub mod grid;
pub mod item;
