//! ActivityLog - Session Activity Recording
//!
//! ## Responsibilities
//!
//! - Record camera-creation events observed by this session
//! - Provide a bounded recent feed and the unbounded session log
//!
//! Entries are session-local and append-only; nothing is persisted or
//! fetched from the server. Deletions are not recorded, so creation
//! history survives the removal of its camera.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::camera_provider::types::Camera;

/// Event label recorded when a camera is created
pub const EVENT_CAMERA_CREATED: &str = "Camera created";

/// Entries shown in the recent-activity feed
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Session activity entry
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    pub camera_id: String,
    /// Display-name snapshot taken when the entry was recorded
    pub camera_name: String,
    /// Client-observed time of the event
    pub created_at: DateTime<Utc>,
    pub event: String,
    pub created_by: String,
}

impl ActivityEntry {
    /// Entry for a freshly created camera
    pub fn camera_created(camera: &Camera, created_by: impl Into<String>) -> Self {
        Self {
            camera_id: camera.camera_id.clone(),
            camera_name: camera.display_name().to_string(),
            created_at: Utc::now(),
            event: EVENT_CAMERA_CREATED.to_string(),
            created_by: created_by.into(),
        }
    }
}

/// Session activity buffer, newest entry first
#[derive(Debug, Default)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Prepend an entry
    pub fn record(&mut self, entry: ActivityEntry) {
        self.entries.push_front(entry);
    }

    /// Recent feed, at most [`RECENT_ACTIVITY_LIMIT`] entries, newest first
    pub fn recent(&self) -> Vec<ActivityEntry> {
        self.entries
            .iter()
            .take(RECENT_ACTIVITY_LIMIT)
            .cloned()
            .collect()
    }

    /// Full session log, newest first
    pub fn all(&self) -> Vec<ActivityEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
