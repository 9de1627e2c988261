//! Main application model with state management

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use super::content::{ContentState, ContentView, MovieDetail, MovieSummary};
use super::omdb_client::OmdbClient;
use super::types::{ActiveSection, UiState};

/// Main application model containing all state
pub struct AppModel {
    pub omdb: Option<OmdbClient>,
    pub ui_state: Arc<Mutex<UiState>>,
    pub content_state: Arc<Mutex<ContentState>>,
    pub should_quit: Arc<Mutex<bool>>,
    /// Monotonically increasing tag for search requests. A completing
    /// search may publish its results only while it still holds the
    /// latest value, so a slow older response can never overwrite a
    /// newer one.
    search_generation: Arc<Mutex<u64>>,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            omdb: None,
            ui_state: Arc::new(Mutex::new(UiState::default())),
            content_state: Arc::new(Mutex::new(ContentState::default())),
            should_quit: Arc::new(Mutex::new(false)),
            search_generation: Arc::new(Mutex::new(0)),
        }
    }

    pub fn set_omdb_client(&mut self, client: OmdbClient) {
        self.omdb = Some(client);
    }

    pub async fn get_omdb_client(&self) -> Option<OmdbClient> {
        self.omdb.clone()
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // UI state
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        let mut state = self.ui_state.lock().await;
        state.active_section = section;
    }

    pub async fn cycle_section_forward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn cycle_section_backward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.prev();
    }

    pub async fn update_search_query(&self, query: String) {
        let mut state = self.ui_state.lock().await;
        state.search_query = query;
    }

    pub async fn append_to_search(&self, c: char) {
        let mut state = self.ui_state.lock().await;
        state.search_query.push(c);
    }

    pub async fn backspace_search(&self) {
        let mut state = self.ui_state.lock().await;
        state.search_query.pop();
    }

    pub async fn set_error(&self, message: String) {
        let mut state = self.ui_state.lock().await;
        state.error_message = Some(message);
        state.error_timestamp = Some(Instant::now());
    }

    pub async fn clear_error(&self) {
        let mut state = self.ui_state.lock().await;
        state.error_message = None;
        state.error_timestamp = None;
    }

    pub async fn has_error(&self) -> bool {
        self.ui_state.lock().await.error_message.is_some()
    }

    pub async fn auto_clear_old_errors(&self) {
        let mut state = self.ui_state.lock().await;
        if let Some(timestamp) = state.error_timestamp {
            if timestamp.elapsed().as_secs() > 5 {
                state.error_message = None;
                state.error_timestamp = None;
            }
        }
    }

    pub async fn show_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }

    // ========================================================================
    // Content state
    // ========================================================================

    pub async fn get_content_state(&self) -> ContentState {
        self.content_state.lock().await.clone()
    }

    pub async fn set_content_loading(&self, loading: bool) {
        let mut state = self.content_state.lock().await;
        state.is_loading = loading;
    }

    /// Registers a new search and returns its generation tag.
    pub async fn begin_search(&self) -> u64 {
        let mut generation = self.search_generation.lock().await;
        *generation += 1;
        *generation
    }

    /// Publishes a completed search. Returns false (leaving all state
    /// untouched) when a newer search has been issued since `generation`
    /// was handed out.
    pub async fn apply_search_results(
        &self,
        generation: u64,
        movies: Vec<MovieSummary>,
        total_count: u32,
    ) -> bool {
        if !self.is_latest_generation(generation).await {
            return false;
        }

        let mut state = self.content_state.lock().await;
        state.navigation_stack.clear(); // New search resets history
        state.view = ContentView::MovieList {
            movies,
            total_count,
            selected_index: 0,
        };
        state.is_loading = false;
        true
    }

    /// Publishes a failed search: the result list is emptied and the
    /// count zeroed, and the message goes to the error overlay. Subject
    /// to the same generation check as a success.
    pub async fn apply_search_failure(&self, generation: u64, message: String) -> bool {
        if !self.is_latest_generation(generation).await {
            return false;
        }

        {
            let mut state = self.content_state.lock().await;
            state.navigation_stack.clear();
            state.view = ContentView::MovieList {
                movies: Vec::new(),
                total_count: 0,
                selected_index: 0,
            };
            state.is_loading = false;
        }

        self.set_error(message).await;
        true
    }

    async fn is_latest_generation(&self, generation: u64) -> bool {
        let latest = *self.search_generation.lock().await;
        if generation != latest {
            tracing::debug!(generation, latest, "Dropping stale search response");
            return false;
        }
        true
    }

    pub async fn set_movie_detail(&self, detail: MovieDetail) {
        let mut state = self.content_state.lock().await;

        if !matches!(state.view, ContentView::Empty) {
            let previous_view = state.view.clone();
            state.navigation_stack.push(previous_view);
        }
        state.view = ContentView::MovieDetail { detail };
        state.is_loading = false;
    }

    pub async fn navigate_back(&self) -> bool {
        let mut state = self.content_state.lock().await;
        if let Some(previous_view) = state.navigation_stack.pop() {
            state.view = previous_view;
            true
        } else {
            state.view = ContentView::Empty;
            false
        }
    }

    pub async fn content_move_up(&self) {
        let mut state = self.content_state.lock().await;
        if let ContentView::MovieList { selected_index, .. } = &mut state.view {
            if *selected_index > 0 {
                *selected_index -= 1;
            }
        }
    }

    pub async fn content_move_down(&self) {
        let mut state = self.content_state.lock().await;
        if let ContentView::MovieList {
            movies,
            selected_index,
            ..
        } = &mut state.view
        {
            if *selected_index < movies.len().saturating_sub(1) {
                *selected_index += 1;
            }
        }
    }

    pub async fn get_selected_movie(&self) -> Option<MovieSummary> {
        let state = self.content_state.lock().await;
        if let ContentView::MovieList {
            movies,
            selected_index,
            ..
        } = &state.view
        {
            movies.get(*selected_index).cloned()
        } else {
            None
        }
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, title: &str) -> MovieSummary {
        MovieSummary {
            imdb_id: id.to_string(),
            title: title.to_string(),
            year: "2014".to_string(),
            poster: None,
        }
    }

    fn detail(id: &str, title: &str) -> MovieDetail {
        MovieDetail {
            imdb_id: id.to_string(),
            title: title.to_string(),
            year: "2014".to_string(),
            genre: None,
            plot: None,
            poster: None,
            found: true,
            error: None,
        }
    }

    #[tokio::test]
    async fn stale_search_response_is_dropped() {
        let model = AppModel::new();
        let first = model.begin_search().await;
        let second = model.begin_search().await;

        assert!(
            model
                .apply_search_results(second, vec![summary("tt2", "Fresh")], 1)
                .await
        );
        assert!(
            !model
                .apply_search_results(first, vec![summary("tt1", "Stale")], 1)
                .await
        );

        let state = model.get_content_state().await;
        match &state.view {
            ContentView::MovieList { movies, .. } => assert_eq!(movies[0].title, "Fresh"),
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[tokio::test]
    async fn stale_failure_cannot_clobber_fresh_results() {
        let model = AppModel::new();
        let slow = model.begin_search().await;
        let fast = model.begin_search().await;

        assert!(
            model
                .apply_search_results(fast, vec![summary("tt1", "Kept")], 12)
                .await
        );
        assert!(
            !model
                .apply_search_failure(slow, "Movie not found!".to_string())
                .await
        );

        assert!(!model.has_error().await);
        let state = model.get_content_state().await;
        match &state.view {
            ContentView::MovieList {
                movies,
                total_count,
                ..
            } => {
                assert_eq!(movies.len(), 1);
                assert_eq!(*total_count, 12);
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[tokio::test]
    async fn search_failure_clears_results_and_sets_error() {
        let model = AppModel::new();
        let generation = model.begin_search().await;
        assert!(
            model
                .apply_search_results(
                    generation,
                    vec![summary("tt2015381", "Guardians of the Galaxy")],
                    85,
                )
                .await
        );

        let generation = model.begin_search().await;
        assert!(
            model
                .apply_search_failure(generation, "Movie not found!".to_string())
                .await
        );

        let state = model.get_content_state().await;
        match &state.view {
            ContentView::MovieList {
                movies,
                total_count,
                ..
            } => {
                assert!(movies.is_empty());
                assert_eq!(*total_count, 0);
            }
            other => panic!("unexpected view: {:?}", other),
        }
        assert_eq!(
            model.get_ui_state().await.error_message.as_deref(),
            Some("Movie not found!")
        );
    }

    #[tokio::test]
    async fn detail_navigation_pushes_and_pops() {
        let model = AppModel::new();
        let generation = model.begin_search().await;
        model
            .apply_search_results(generation, vec![summary("tt2015381", "Guardians")], 85)
            .await;

        model.set_movie_detail(detail("tt2015381", "Guardians")).await;
        assert!(matches!(
            model.get_content_state().await.view,
            ContentView::MovieDetail { .. }
        ));

        assert!(model.navigate_back().await);
        assert!(matches!(
            model.get_content_state().await.view,
            ContentView::MovieList { .. }
        ));

        // No more history: back lands on the empty view.
        assert!(!model.navigate_back().await);
        assert!(matches!(
            model.get_content_state().await.view,
            ContentView::Empty
        ));
    }

    #[tokio::test]
    async fn selection_clamps_to_list_bounds() {
        let model = AppModel::new();
        let generation = model.begin_search().await;
        model
            .apply_search_results(
                generation,
                vec![summary("tt1", "One"), summary("tt2", "Two")],
                2,
            )
            .await;

        model.content_move_up().await;
        assert_eq!(model.get_selected_movie().await.unwrap().imdb_id, "tt1");

        model.content_move_down().await;
        model.content_move_down().await;
        model.content_move_down().await;
        assert_eq!(model.get_selected_movie().await.unwrap().imdb_id, "tt2");
    }

    #[tokio::test]
    async fn search_query_editing() {
        let model = AppModel::new();
        model.append_to_search('a').await;
        model.append_to_search('b').await;
        model.append_to_search('c').await;
        model.backspace_search().await;
        assert_eq!(model.get_ui_state().await.search_query, "ab");
    }
}
