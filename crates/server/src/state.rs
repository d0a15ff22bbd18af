// crates/server/src/state.rs
//! Application state for the Axum server.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use expo_lens_core::HistoricalRecord;

/// Shared application state accessible from all route handlers.
///
/// The corpus is loaded once at startup and shared immutably; every
/// analysis run works on fresh derived copies, so no locking is needed.
pub struct AppState {
    /// Server start time for uptime tracking.
    pub start_time: Instant,
    /// The loaded reference corpus.
    pub corpus: Vec<HistoricalRecord>,
    /// Where the corpus was loaded from (reported in the summary endpoint).
    pub corpus_path: PathBuf,
}

impl AppState {
    /// Create a new application state wrapped in an Arc for sharing.
    pub fn new(corpus: Vec<HistoricalRecord>, corpus_path: PathBuf) -> Arc<Self> {
        Arc::new(Self {
            start_time: Instant::now(),
            corpus,
            corpus_path,
        })
    }

    /// Get the server uptime in seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
