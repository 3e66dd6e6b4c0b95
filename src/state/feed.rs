/// Result feed coordinator
///
/// Owns everything about one query session: the accumulated results, the
/// pagination cursor, and the loading/failure flags. The coordinator is an
/// explicit state machine: its methods mutate state and hand back an
/// `Effect` describing the one side effect the caller should run (sleep
/// out the debounce, or fetch a page). It never performs IO itself, which
/// keeps the whole pagination protocol testable without a runtime.

use std::collections::HashSet;
use std::time::Duration;

use super::data::{GifImage, Page, Query};
use crate::tenor::FetchError;

/// How long to wait after the last query-key change before fetching, so
/// per-keystroke searches collapse into a single request
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(800);

/// Page size for search sessions
const SEARCH_PAGE_SIZE: usize = 50;

/// Page size for trending sessions
const TRENDING_PAGE_SIZE: usize = 20;

/// Identity token for one query session.
///
/// Every debounce timer and fetch is tagged with the id that was current
/// at dispatch time; handlers compare it against the live session before
/// touching state. A mismatch is how superseded timers get cancelled and
/// how responses for abandoned sessions get dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionId(u64);

impl SessionId {
    fn next(self) -> SessionId {
        SessionId(self.0 + 1)
    }
}

/// A page request the caller should run against the service
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    /// Session identity captured at dispatch time
    pub session: SessionId,
    pub query: Query,
    /// Pagination cursor; `None` requests the first page
    pub pos: Option<String>,
    /// Page size for this query kind
    pub limit: usize,
}

/// Deferred side effect requested by the coordinator.
///
/// The caller schedules the matching task and routes its result back in
/// (`debounce_elapsed` / `settle`). Tests drive the state machine
/// synchronously by inspecting these values instead of spying on IO.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing to schedule
    None,
    /// Sleep for `delay`, then report `debounce_elapsed(session)`
    Debounce { session: SessionId, delay: Duration },
    /// Fetch one page, then report `settle(session, outcome)`
    Fetch(FetchRequest),
}

/// State machine for the paginated result feed
pub struct Feed {
    session: SessionId,
    query: Query,
    images: Vec<GifImage>,
    /// Ids already accumulated this session; keeps `images` unique by id
    /// the way a catalog unique-key skips re-imported duplicates
    seen: HashSet<String>,
    next_pos: Option<String>,
    is_loading: bool,
    load_failed: bool,
}

impl Feed {
    /// Create an inert feed. Nothing is fetched until the first
    /// `start_session` call.
    pub fn new() -> Self {
        Feed {
            session: SessionId(0),
            query: Query::Trending,
            images: Vec::new(),
            seen: HashSet::new(),
            next_pos: None,
            is_loading: false,
            load_failed: false,
        }
    }

    /// Begin a new query session, superseding the current one.
    ///
    /// Accumulated results and the cursor are cleared and a fresh session
    /// id is minted, which logically cancels any debounce timer or fetch
    /// still in flight from the old session. Search sessions go through
    /// the debounce window; trending has no user-typed key driving it and
    /// fetches immediately.
    pub fn start_session(&mut self, query: Query) -> Effect {
        self.session = self.session.next();
        self.query = query;
        self.images.clear();
        self.seen.clear();
        self.next_pos = None;
        self.is_loading = true;
        self.load_failed = false;

        match &self.query {
            Query::Search(term) => {
                println!("🔍 Session {:?}: searching \"{}\"", self.session, term);
                Effect::Debounce {
                    session: self.session,
                    delay: DEBOUNCE_DELAY,
                }
            }
            Query::Trending => {
                println!("🔥 Session {:?}: loading trending", self.session);
                Effect::Fetch(self.page_request(None))
            }
        }
    }

    /// A debounce timer finished sleeping.
    ///
    /// If the timer belongs to a superseded session its effect is ignored
    /// entirely; otherwise the first page fetch goes out now.
    pub fn debounce_elapsed(&mut self, session: SessionId) -> Effect {
        if session != self.session {
            return Effect::None;
        }
        Effect::Fetch(self.page_request(None))
    }

    /// Request the next page.
    ///
    /// No-op while a fetch is in flight, and no-op once the session is
    /// exhausted. After a failed fetch this re-issues the request at the
    /// stored cursor, which is the retry path.
    pub fn load_more(&mut self) -> Effect {
        if self.is_loading {
            return Effect::None;
        }
        if self.next_pos.is_none() && !self.load_failed {
            return Effect::None;
        }

        self.is_loading = true;
        self.load_failed = false;
        let pos = self.next_pos.clone();
        Effect::Fetch(self.page_request(pos))
    }

    /// A fetch settled with `outcome`.
    ///
    /// Responses tagged with a superseded session id are discarded without
    /// touching state; that is the expected fate of a slow response for an
    /// abandoned query, not an error. Returns whether state changed.
    pub fn settle(&mut self, session: SessionId, outcome: Result<Page, FetchError>) -> bool {
        if session != self.session {
            println!("🗑️  Dropped stale response for {session:?}");
            return false;
        }

        match outcome {
            Ok(page) => {
                let mut added = 0;
                for image in page.images {
                    if self.seen.insert(image.id.clone()) {
                        self.images.push(image);
                        added += 1;
                    }
                }
                self.next_pos = page.next;
                self.is_loading = false;
                self.load_failed = false;
                println!(
                    "📥 {} new GIFs ({} total), more: {}",
                    added,
                    self.images.len(),
                    self.next_pos.is_some()
                );
            }
            Err(err) => {
                // Accumulated results stay untouched; the failure is
                // recoverable via load_more or a fresh session.
                self.is_loading = false;
                self.load_failed = true;
                eprintln!("⚠️  Fetch failed: {err}");
            }
        }

        true
    }

    /// The accumulated results of the current session, in arrival order
    pub fn images(&self) -> &[GifImage] {
        &self.images
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether the service reported another page behind the cursor
    pub fn has_more(&self) -> bool {
        self.next_pos.is_some()
    }

    /// Whether the last fetch failed and is waiting for a retry
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    fn page_request(&self, pos: Option<String>) -> FetchRequest {
        let limit = match self.query {
            Query::Search(_) => SEARCH_PAGE_SIZE,
            Query::Trending => TRENDING_PAGE_SIZE,
        };
        FetchRequest {
            session: self.session,
            query: self.query.clone(),
            pos,
            limit,
        }
    }
}

impl Default for Feed {
    fn default() -> Self {
        Self::new()
    }
}
