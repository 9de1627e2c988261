//! OMDb API client: the search pipeline and the detail lookup.

use anyhow::Result;
use serde::{Deserialize, Deserializer};

use crate::config::OmdbConfig;

use super::content::{MovieDetail, MovieSummary, SearchError, SearchOutcome};
use super::query;

/// OMDb API client holding the HTTP connection pool and endpoint settings.
#[derive(Clone)]
pub struct OmdbClient {
    http: reqwest::Client,
    config: OmdbConfig,
}

/// One title entry in the wire `Search` array.
#[derive(Debug, Deserialize)]
struct WireSummary {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Poster", default, deserialize_with = "de_sentinel")]
    poster: Option<String>,
}

/// Top-level search response. `Error`, `Search` and `totalResults` are all
/// optional and not trusted to be mutually consistent.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "Search", default)]
    results: Vec<WireSummary>,
    /// Decimal string on the wire ("85").
    #[serde(rename = "totalResults")]
    total_results: Option<String>,
}

/// Wire shape of a by-id lookup. All title fields are absent when the
/// lookup failed, so everything except the status flag is defaulted.
#[derive(Debug, Deserialize)]
struct DetailResponse {
    #[serde(rename = "imdbID", default)]
    imdb_id: String,
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Genre", default, deserialize_with = "de_sentinel")]
    genre: Option<String>,
    #[serde(rename = "Plot", default, deserialize_with = "de_sentinel")]
    plot: Option<String>,
    #[serde(rename = "Poster", default, deserialize_with = "de_sentinel")]
    poster: Option<String>,
    #[serde(rename = "Response", default, deserialize_with = "de_response")]
    found: bool,
    #[serde(rename = "Error")]
    error: Option<String>,
}

impl DetailResponse {
    fn into_detail(self) -> MovieDetail {
        MovieDetail {
            imdb_id: self.imdb_id,
            title: self.title,
            year: self.year,
            genre: self.genre,
            plot: self.plot,
            poster: self.poster,
            found: self.found,
            error: self.error,
        }
    }
}

/// Collapses the API's "N/A" string sentinel into a proper absent value.
fn de_sentinel<'de, D>(de: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(de)?;
    Ok(value.filter(|v| !v.is_empty() && v.as_str() != "N/A"))
}

/// The API signals lookup status as the string "True"/"False".
fn de_response<'de, D>(de: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(de)?;
    Ok(value.eq_ignore_ascii_case("true"))
}

impl OmdbClient {
    pub fn new(config: OmdbConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Runs the full search pipeline: gate, fetch, parse, normalize.
    ///
    /// Every failure comes back in the outcome's error field. Rejected
    /// queries never reach the network; transport faults are converted
    /// into data instead of propagating.
    pub async fn search(&self, query: &str) -> SearchOutcome {
        if !query::validate(query) {
            tracing::debug!(query, "Query rejected by gate, skipping network call");
            return SearchOutcome::rejected();
        }

        let trimmed = query.trim();
        tracing::debug!(query = trimmed, "API: search");

        let response = match self
            .http
            .get(&self.config.base_url)
            .query(&[("apikey", self.config.api_key.as_str()), ("s", trimmed)])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(query = trimmed, error = %e, "Search request failed");
                return SearchOutcome::failed(SearchError::transport(format!(
                    "Network error: {e}"
                )));
            }
        };

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(query = trimmed, error = %e, "Failed to read search response");
                return SearchOutcome::failed(SearchError::transport(format!(
                    "Network error: {e}"
                )));
            }
        };

        match serde_json::from_str::<SearchResponse>(&body) {
            Ok(parsed) => Self::normalize(parsed),
            Err(e) => {
                tracing::error!(query = trimmed, error = %e, "Malformed search response");
                SearchOutcome::failed(SearchError::transport(format!(
                    "Malformed response: {e}"
                )))
            }
        }
    }

    /// Defensive normalization: an error from the API empties the page and
    /// zeroes the count no matter what else the response carried.
    fn normalize(response: SearchResponse) -> SearchOutcome {
        if let Some(message) = response.error {
            return SearchOutcome::failed(SearchError::remote(message));
        }

        let movies: Vec<MovieSummary> = response
            .results
            .into_iter()
            .map(|entry| MovieSummary {
                imdb_id: entry.imdb_id,
                title: entry.title,
                year: entry.year,
                poster: entry.poster,
            })
            .collect();

        // The server-side total may exceed the page returned; it passes
        // through unmodified rather than being recomputed from the page.
        let total_count = response
            .total_results
            .as_deref()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        SearchOutcome {
            movies,
            total_count,
            error: None,
        }
    }

    /// Looks up one title by its opaque identifier.
    ///
    /// Only the sentinel collapse is applied; callers check `found` to
    /// tell a successful lookup from a not-found answer. Transport faults
    /// propagate and are formatted at the presentation boundary.
    pub async fn fetch_by_id(&self, id: &str) -> Result<MovieDetail> {
        tracing::debug!(id, "API: fetch_by_id");

        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[("apikey", self.config.api_key.as_str()), ("i", id)])
            .send()
            .await?;

        let body = response.text().await?;
        let detail: DetailResponse = serde_json::from_str(&body)?;
        Ok(detail.into_detail())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::content::SearchErrorCause;

    /// Nothing listens on discard; a request against this either never
    /// happens (gate) or fails fast (transport).
    fn unroutable_client() -> OmdbClient {
        OmdbClient::new(OmdbConfig {
            api_key: "test".to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
        })
    }

    #[tokio::test]
    async fn short_query_is_rejected_without_network() {
        let client = unroutable_client();
        let outcome = client.search("ab").await;

        assert!(outcome.movies.is_empty());
        assert_eq!(outcome.total_count, 0);
        let error = outcome.error.expect("rejected query must carry an error");
        assert_eq!(error.cause, SearchErrorCause::QueryTooShort);
        assert_eq!(error.to_string(), "Search too short");
    }

    #[tokio::test]
    async fn whitespace_padding_does_not_rescue_a_short_query() {
        let client = unroutable_client();
        let outcome = client.search("  ab  ").await;
        assert_eq!(
            outcome.error.unwrap().cause,
            SearchErrorCause::QueryTooShort
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_surfaces_as_transport_error() {
        let client = unroutable_client();
        let outcome = client.search("Guardians").await;

        assert!(outcome.movies.is_empty());
        assert_eq!(outcome.total_count, 0);
        assert_eq!(outcome.error.unwrap().cause, SearchErrorCause::Transport);
    }

    #[test]
    fn successful_page_passes_server_count_through() {
        let parsed: SearchResponse = serde_json::from_str(
            r#"{
                "Search": [
                    {"Title": "Guardians of the Galaxy", "Year": "2014", "imdbID": "tt2015381", "Poster": "https://example.com/p.jpg"},
                    {"Title": "Guardians of the Galaxy Vol. 2", "Year": "2017", "imdbID": "tt3896198", "Poster": "N/A"}
                ],
                "totalResults": "85",
                "Response": "True"
            }"#,
        )
        .unwrap();

        let outcome = OmdbClient::normalize(parsed);

        assert!(outcome.error.is_none());
        assert_eq!(outcome.movies.len(), 2);
        assert_eq!(outcome.total_count, 85);
        assert_eq!(
            outcome.movies[0].poster.as_deref(),
            Some("https://example.com/p.jpg")
        );
        assert_eq!(outcome.movies[1].poster, None);
    }

    #[test]
    fn api_error_forces_results_empty_even_when_inconsistent() {
        // Error plus a populated page in one body; the page must lose.
        let parsed: SearchResponse = serde_json::from_str(
            r#"{
                "Search": [
                    {"Title": "Ghost entry", "Year": "1999", "imdbID": "tt0000001", "Poster": "N/A"}
                ],
                "totalResults": "7",
                "Error": "Movie not found!",
                "Response": "False"
            }"#,
        )
        .unwrap();

        let outcome = OmdbClient::normalize(parsed);

        assert!(outcome.movies.is_empty());
        assert_eq!(outcome.total_count, 0);
        let error = outcome.error.unwrap();
        assert_eq!(error.cause, SearchErrorCause::Remote);
        assert_eq!(error.to_string(), "Movie not found!");
    }

    #[test]
    fn missing_fields_default_to_an_empty_page() {
        let parsed: SearchResponse = serde_json::from_str(r#"{"Response": "True"}"#).unwrap();
        let outcome = OmdbClient::normalize(parsed);

        assert!(outcome.movies.is_empty());
        assert_eq!(outcome.total_count, 0);
        assert!(outcome.error.is_none());
    }

    #[test]
    fn unparseable_total_count_defaults_to_zero() {
        let parsed: SearchResponse =
            serde_json::from_str(r#"{"Search": [], "totalResults": "many", "Response": "True"}"#)
                .unwrap();
        assert_eq!(OmdbClient::normalize(parsed).total_count, 0);
    }

    #[test]
    fn not_found_detail_falls_back_to_fixed_error_text() {
        let raw: DetailResponse = serde_json::from_str(r#"{"Response": "False"}"#).unwrap();
        let detail = raw.into_detail();

        assert!(!detail.found);
        assert_eq!(detail.error_text(), "Incorrect IMDb ID");
    }

    #[test]
    fn not_found_detail_prefers_the_api_error_text() {
        let raw: DetailResponse =
            serde_json::from_str(r#"{"Response": "False", "Error": "Invalid API key!"}"#).unwrap();
        let detail = raw.into_detail();

        assert!(!detail.found);
        assert_eq!(detail.error_text(), "Invalid API key!");
    }

    #[test]
    fn detail_sentinels_collapse_to_none() {
        let raw: DetailResponse = serde_json::from_str(
            r#"{
                "imdbID": "tt2015381",
                "Title": "Guardians of the Galaxy",
                "Year": "2014",
                "Genre": "Action, Adventure, Comedy",
                "Plot": "N/A",
                "Poster": "N/A",
                "Response": "True"
            }"#,
        )
        .unwrap();
        let detail = raw.into_detail();

        assert!(detail.found);
        assert_eq!(detail.genre.as_deref(), Some("Action, Adventure, Comedy"));
        assert_eq!(detail.plot, None);
        assert_eq!(detail.poster, None);
        assert_eq!(detail.error, None);
    }
}
