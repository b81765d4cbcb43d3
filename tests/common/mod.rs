#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use statuslens::launcher::{LaunchError, UrlHandler};

/// Handler that records every URL it is asked to open and answers with a
/// fixed outcome.
#[derive(Clone)]
pub struct RecordingHandler {
    name: String,
    outcome: Result<(), LaunchError>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingHandler {
    pub fn ok(name: &str) -> Self {
        Self::with_outcome(name, Ok(()))
    }

    pub fn no_handler(name: &str) -> Self {
        Self::with_outcome(name, Err(LaunchError::NoHandler("not installed".to_string())))
    }

    pub fn failing(name: &str) -> Self {
        Self::with_outcome(name, Err(LaunchError::Failed("crashed".to_string())))
    }

    fn with_outcome(name: &str, outcome: Result<(), LaunchError>) -> Self {
        Self {
            name: name.to_string(),
            outcome,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl UrlHandler for RecordingHandler {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn open(&self, url: &str) -> Result<(), LaunchError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.outcome.clone()
    }
}
