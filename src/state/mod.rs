/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The result feed coordinator and its effect interface (feed.rs)

pub mod data;
pub mod feed;
