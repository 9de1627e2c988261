//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input
//! and coordinates between the model and the OMDb client.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `navigation`: Search and detail-lookup orchestration

mod input;
mod navigation;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::AppModel;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>) -> Self {
        Self { model }
    }

    pub(crate) fn format_error(error: &anyhow::Error) -> String {
        let error_str = error.to_string();

        // Handle common OMDb/transport failures
        if error_str.contains("401") {
            "Request rejected. Check the OMDB_API_KEY value.".to_string()
        } else if error_str.contains("timed out") {
            "The movie database did not respond. Try again.".to_string()
        } else if error_str.contains("error sending request") || error_str.contains("connect") {
            "Network unreachable. Check your connection.".to_string()
        } else {
            format!("Error: {}", error_str)
        }
    }
}
