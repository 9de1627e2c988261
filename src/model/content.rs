//! Content view state and data structures for search results and movie details.

use thiserror::Error;

/// A title from search results, as shown in the result list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovieSummary {
    /// Opaque IMDb identifier, unique per title/edition within one result set.
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    /// None when the API reported no poster.
    pub poster: Option<String>,
}

/// Full per-title data used in the detail view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovieDetail {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub genre: Option<String>,
    pub plot: Option<String>,
    pub poster: Option<String>,
    /// False when the API reported a failed lookup. The remaining fields
    /// are not meaningful in that case.
    pub found: bool,
    /// The API's own error text, when it sent one.
    pub error: Option<String>,
}

impl MovieDetail {
    /// Error text for a failed lookup. The API sometimes reports
    /// `Response: "False"` without any error string.
    pub fn error_text(&self) -> &str {
        self.error.as_deref().unwrap_or("Incorrect IMDb ID")
    }
}

/// Why a search produced no usable results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchErrorCause {
    /// Rejected by the query gate before any network activity.
    QueryTooShort,
    /// The API answered and reported a problem (no matches, bad key).
    Remote,
    /// The request never produced a well-formed response.
    Transport,
}

/// A search failure carried as data rather than propagated.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct SearchError {
    pub cause: SearchErrorCause,
    pub message: String,
}

impl SearchError {
    pub fn too_short() -> Self {
        Self {
            cause: SearchErrorCause::QueryTooShort,
            message: "Search too short".to_string(),
        }
    }

    pub fn remote(message: impl Into<String>) -> Self {
        Self {
            cause: SearchErrorCause::Remote,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            cause: SearchErrorCause::Transport,
            message: message.into(),
        }
    }
}

/// The normalized outcome of one search pipeline run.
///
/// The error field and the movie sequence are never both populated:
/// whenever an error is present the sequence is empty and the count zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub movies: Vec<MovieSummary>,
    /// Total matches server-side; may exceed the page returned.
    pub total_count: u32,
    pub error: Option<SearchError>,
}

impl SearchOutcome {
    /// Outcome of a query the gate refused to forward.
    pub fn rejected() -> Self {
        Self::failed(SearchError::too_short())
    }

    pub fn failed(error: SearchError) -> Self {
        Self {
            movies: Vec::new(),
            total_count: 0,
            error: Some(error),
        }
    }
}

/// Represents the current view in the main content area
#[derive(Clone, Debug, Default)]
pub enum ContentView {
    #[default]
    Empty,
    MovieList {
        movies: Vec<MovieSummary>,
        total_count: u32,
        selected_index: usize,
    },
    MovieDetail {
        detail: MovieDetail,
    },
}

/// State for the main content area
#[derive(Clone, Debug, Default)]
pub struct ContentState {
    pub view: ContentView,
    pub navigation_stack: Vec<ContentView>,
    pub is_loading: bool,
}
