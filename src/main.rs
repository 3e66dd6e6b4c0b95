use iced::widget::{button, column, container, row, scrollable, text, text_input, Row};
use iced::{Alignment, Element, Length, Task, Theme};

mod balance;
mod sentinel;
mod state;
mod tenor;
mod ui;

use sentinel::{LoadGate, ViewportSentinel};
use state::data::{Page, Query};
use state::feed::{Effect, Feed, FetchRequest, SessionId};
use tenor::{FetchError, TenorClient};

/// Distance in logical pixels from the content bottom within which the
/// last grid item counts as visible
const LAST_ITEM_REACH: f32 = 240.0;

/// Column counts offered by the picker
const COLUMN_CHOICES: [usize; 3] = [2, 3, 4];

/// Main application state
struct GifGrid {
    /// Pagination state machine for the current query session
    feed: Feed,
    /// Watches the last grid item for the load-more trigger
    sentinel: ViewportSentinel,
    /// Tenor service client
    client: TenorClient,
    /// Raw contents of the search box
    search_input: String,
    /// How many columns the grid is split into
    columns_count: usize,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User edited the search box
    SearchChanged(String),
    /// A debounce timer finished sleeping
    DebounceElapsed(SessionId),
    /// A page fetch settled with a result or an error
    FetchSettled(SessionId, Result<Page, FetchError>),
    /// The grid scrollable reported new viewport geometry
    Scrolled(scrollable::Viewport),
    /// User picked a column count
    ColumnsPicked(usize),
    /// User asked to retry after a failed fetch
    RetryPressed,
}

impl GifGrid {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // If there is no API key, we panic because the app cannot function
        // without its upstream service.
        let api_key = std::env::var("TENOR_API_KEY")
            .expect("TENOR_API_KEY must be set (free keys at https://developers.google.com/tenor)");
        let client = TenorClient::new(api_key).expect("Failed to construct HTTP client");

        let mut feed = Feed::new();
        let effect = feed.start_session(Query::Trending);

        println!("🎞️  GIF grid initialized");

        let app = GifGrid {
            feed,
            sentinel: ViewportSentinel::new(),
            client,
            search_input: String::new(),
            columns_count: 2,
            status: String::from("Loading trending GIFs..."),
        };
        let task = app.run_effect(effect);

        (app, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchChanged(input) => {
                self.search_input = input;

                let term = self.search_input.trim();
                let query = if term.is_empty() {
                    Query::Trending
                } else {
                    Query::Search(term.to_owned())
                };

                // Only a changed query key starts a new session; retyping
                // the same term leaves the current session alone.
                if query == *self.feed.query() {
                    return Task::none();
                }

                self.status = match query.search_term() {
                    Some(term) => format!("Searching for \"{term}\"..."),
                    None => String::from("Loading trending GIFs..."),
                };

                let effect = self.feed.start_session(query);
                self.rewatch();
                self.run_effect(effect)
            }

            Message::DebounceElapsed(session) => {
                let effect = self.feed.debounce_elapsed(session);
                self.run_effect(effect)
            }

            Message::FetchSettled(session, outcome) => {
                if self.feed.settle(session, outcome) {
                    self.status = if self.feed.load_failed() {
                        String::from("Load failed. Check your connection and retry.")
                    } else if self.feed.has_more() {
                        format!("{} GIFs loaded", self.feed.images().len())
                    } else {
                        format!("{} GIFs loaded (end of results)", self.feed.images().len())
                    };
                    self.rewatch();
                }
                Task::none()
            }

            Message::Scrolled(viewport) => {
                let target = match self.feed.images().last() {
                    Some(image) => image.id.clone(),
                    None => return Task::none(),
                };
                let gate = LoadGate {
                    is_loading: self.feed.is_loading(),
                    has_more: self.feed.has_more(),
                };

                if self.sentinel.notify(&target, near_bottom(&viewport), gate) {
                    let effect = self.feed.load_more();
                    return self.run_effect(effect);
                }
                Task::none()
            }

            Message::ColumnsPicked(count) => {
                // The view recomputes the whole partition from scratch for
                // the new count; nothing else needs to move.
                self.columns_count = count;
                Task::none()
            }

            Message::RetryPressed => {
                self.status = String::from("Retrying...");
                let effect = self.feed.load_more();
                self.run_effect(effect)
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = row![
            text("GIF Grid").size(28),
            text_input("Search Tenor...", &self.search_input)
                .on_input(Message::SearchChanged)
                .padding(10),
            columns_picker(self.columns_count),
        ]
        .spacing(16)
        .align_y(Alignment::Center);

        let mut content = column![header].spacing(16).padding(20);

        if self.feed.load_failed() {
            content = content.push(
                row![
                    text("Load failed.").style(text::danger),
                    button("Retry").on_press(Message::RetryPressed).padding(8),
                ]
                .spacing(12)
                .align_y(Alignment::Center),
            );
        }

        let grid = ui::grid::gif_grid(
            self.feed.images(),
            self.feed.is_loading(),
            self.feed.query().search_term(),
            self.columns_count,
        );

        content = content.push(
            scrollable(container(grid).width(Length::Fill).center_x(Length::Fill))
                .on_scroll(Message::Scrolled)
                .width(Length::Fill)
                .height(Length::Fill),
        );

        content = content.push(text(self.status.as_str()).size(14));

        content.into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Point the sentinel at the current last grid item (or release it when
    /// the grid is empty). Called after every feed mutation so the watched
    /// item always matches what the grid renders last.
    fn rewatch(&mut self) {
        self.sentinel
            .watch(self.feed.images().last().map(|image| image.id.as_str()));
    }

    /// Turn a coordinator effect into the iced task that performs it
    fn run_effect(&self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),

            Effect::Debounce { session, delay } => Task::perform(
                async move {
                    tokio::time::sleep(delay).await;
                    session
                },
                Message::DebounceElapsed,
            ),

            Effect::Fetch(request) => {
                let session = request.session;
                Task::perform(fetch_page(self.client.clone(), request), move |outcome| {
                    Message::FetchSettled(session, outcome)
                })
            }
        }
    }
}

fn main() -> iced::Result {
    iced::application("GIF Grid", GifGrid::update, GifGrid::view)
        .theme(GifGrid::theme)
        .centered()
        .run_with(GifGrid::new)
}

/// Whether the bottom edge of the scroll viewport has reached the region
/// occupied by the last grid row
fn near_bottom(viewport: &scrollable::Viewport) -> bool {
    let bottom = viewport.absolute_offset().y + viewport.bounds().height;
    bottom >= viewport.content_bounds().height - LAST_ITEM_REACH
}

/// The row of column-count buttons; the active count is shown disabled
fn columns_picker(current: usize) -> Element<'static, Message> {
    let mut picker = Row::new().spacing(4);
    for count in COLUMN_CHOICES {
        let mut choice = button(text(format!("{count}")).size(14)).padding(8);
        if count != current {
            choice = choice.on_press(Message::ColumnsPicked(count));
        }
        picker = picker.push(choice);
    }
    picker.into()
}

/// Fetch one page from the Tenor service as described by `request`.
/// Runs as a background task so the UI never blocks on the network.
async fn fetch_page(client: TenorClient, request: FetchRequest) -> Result<Page, FetchError> {
    match &request.query {
        Query::Trending => client.trending(request.limit, request.pos.as_deref()).await,
        Query::Search(term) => {
            client
                .search(term, request.limit, request.pos.as_deref())
                .await
        }
    }
}
