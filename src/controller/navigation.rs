//! Search and detail-lookup controller methods

use crate::model::ActiveSection;

use super::AppController;

/// Query issued once at startup, before the user has typed anything.
pub const DEFAULT_QUERY: &str = "Guardians of the Galaxy";

impl AppController {
    pub async fn initial_search(&self) {
        {
            let model = self.model.lock().await;
            model.update_search_query(DEFAULT_QUERY.to_string()).await;
        }
        self.perform_search(DEFAULT_QUERY).await;
    }

    /// Runs one search against the pipeline and publishes the outcome.
    ///
    /// The model lock is dropped for the duration of the request so the
    /// draw loop keeps running; the generation tag decides afterwards
    /// whether this response is still the one the user is waiting for.
    pub async fn perform_search(&self, query: &str) {
        tracing::debug!(query, "Performing search");
        let model = self.model.lock().await;

        let Some(omdb) = model.get_omdb_client().await else {
            return;
        };
        let generation = model.begin_search().await;
        model.set_content_loading(true).await;
        drop(model);

        let outcome = omdb.search(query).await;

        let model = self.model.lock().await;
        let applied = match outcome.error {
            None => {
                tracing::info!(
                    query,
                    movies = outcome.movies.len(),
                    total = outcome.total_count,
                    "Search completed successfully"
                );
                let applied = model
                    .apply_search_results(generation, outcome.movies, outcome.total_count)
                    .await;
                if applied {
                    // Switch to the content section to show results
                    model.set_active_section(ActiveSection::MainContent).await;
                }
                applied
            }
            Some(error) => {
                tracing::warn!(query, cause = ?error.cause, error = %error, "Search failed");
                model.apply_search_failure(generation, error.to_string()).await
            }
        };

        if !applied {
            tracing::debug!(query, generation, "Search superseded before completion");
        }
    }

    pub async fn open_movie_detail(&self, id: &str) {
        tracing::debug!(id, "Opening movie detail");
        let model = self.model.lock().await;

        let Some(omdb) = model.get_omdb_client().await else {
            return;
        };
        model.set_content_loading(true).await;
        drop(model);

        let result = omdb.fetch_by_id(id).await;

        let model = self.model.lock().await;
        match result {
            Ok(detail) => {
                if !detail.found {
                    tracing::warn!(id, error = detail.error_text(), "Lookup reported not found");
                }
                // Not-found answers still become the detail view; it
                // renders the API's error text with the fixed fallback.
                model.set_movie_detail(detail).await;
            }
            Err(e) => {
                tracing::error!(id, error = %e, "Detail lookup failed");
                model.set_content_loading(false).await;
                let error_msg = Self::format_error(&e);
                model.set_error(error_msg).await;
            }
        }
    }
}
