//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (enums, UI state, etc.)
//! - `query`: Query gate guarding the search pipeline
//! - `content`: Content view data (search results, movie details)
//! - `omdb_client`: OMDb API client
//! - `app_model`: Main application model with state management methods

mod types;
pub mod query;
mod content;
mod omdb_client;
mod app_model;

// Re-export all public types for convenient access
pub use types::{ActiveSection, UiState};

pub use content::{
    ContentState, ContentView, MovieDetail, MovieSummary,
    SearchError, SearchErrorCause, SearchOutcome,
};

pub use omdb_client::OmdbClient;

pub use app_model::AppModel;
