//! CameraProvider - Session Camera State
//!
//! ## Responsibilities
//!
//! - Own the authoritative in-memory camera set for the session
//! - Perform fetch/add/delete calls against the camera management API
//! - Maintain the session activity log and the daily-count series
//!
//! One provider is created per session (see [`crate::state::SessionState`])
//! and shared by reference with every consumer. State sits behind a single
//! `RwLock` held only across synchronous sections, never across a request
//! await, so mutations apply in completion order (last writer wins). The
//! daily series is recomputed explicitly after every change to the set.

pub mod types;

use chrono::Local;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::activity_log::{ActivityEntry, ActivityLog};
use crate::api_client::{CameraApiClient, CreateCameraRequest, Location};
use crate::daily_stats::{daily_camera_counts, DailyCount};
use crate::error::Result;

pub use types::{Camera, FieldError, FleetOverview, FormErrors, FormField, NewCamera};

/// Session camera state and its mutation operations
pub struct CameraProvider {
    api: CameraApiClient,
    operator: String,
    inner: RwLock<ProviderState>,
}

#[derive(Default)]
struct ProviderState {
    cameras: Vec<Camera>,
    activity: ActivityLog,
    daily_counts: Vec<DailyCount>,
    loading: bool,
    adding_camera: bool,
}

impl ProviderState {
    /// Must be called after every change to `cameras`
    fn recompute_daily_counts(&mut self) {
        self.daily_counts = daily_camera_counts(&self.cameras, Local::now().date_naive());
    }
}

impl CameraProvider {
    /// Create a provider bound to an API client and an operator identity.
    ///
    /// The camera set starts empty. The daily series is computed up front
    /// so consumers always see seven entries, zeroed until the first fetch.
    pub fn new(api: CameraApiClient, operator: impl Into<String>) -> Self {
        let mut state = ProviderState::default();
        state.recompute_daily_counts();

        Self {
            api,
            operator: operator.into(),
            inner: RwLock::new(state),
        }
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    /// Fetch the full camera list, replacing the session set.
    ///
    /// On failure the set is reset to empty. The loading flag is cleared
    /// on every path, and the daily series follows the set either way.
    pub async fn fetch_cameras(&self) -> Result<()> {
        {
            let mut state = self.inner.write().await;
            state.loading = true;
        }

        let outcome = self.api.list_cameras().await;

        let mut state = self.inner.write().await;
        state.loading = false;
        match outcome {
            Ok(cameras) => {
                info!(count = cameras.len(), "Camera list refreshed");
                state.cameras = cameras;
                state.recompute_daily_counts();
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Camera list fetch failed");
                state.cameras.clear();
                state.recompute_daily_counts();
                Err(e)
            }
        }
    }

    /// Validate and register a new camera.
    ///
    /// Validation failures never reach the network. On success the server's
    /// canonical record is appended to the set and exactly one activity
    /// entry is recorded; on failure set and log are left untouched.
    pub async fn add_camera(&self, form: NewCamera) -> Result<Camera> {
        if let Err(errors) = form.validate() {
            warn!(errors = %errors, "Camera form rejected");
            return Err(errors.into());
        }

        {
            let mut state = self.inner.write().await;
            state.adding_camera = true;
        }

        let request = CreateCameraRequest::from(&form);
        let outcome = self.api.create_camera(&request).await;

        let mut state = self.inner.write().await;
        state.adding_camera = false;
        match outcome {
            Ok(camera) => {
                info!(
                    camera_id = %camera.camera_id,
                    camera_name = %camera.display_name(),
                    "Camera added"
                );
                state
                    .activity
                    .record(ActivityEntry::camera_created(&camera, &self.operator));
                state.cameras.push(camera.clone());
                state.recompute_daily_counts();
                Ok(camera)
            }
            Err(e) => {
                error!(error = %e, "Camera add failed");
                Err(e)
            }
        }
    }

    /// Delete a camera by identifier.
    ///
    /// The server is the authority: on success the matching local entry is
    /// removed (an id no longer present locally is a no-op), on failure the
    /// set is left unchanged. Deletions are not recorded in the activity
    /// log, so creation history survives.
    pub async fn delete_camera(&self, camera_id: &str) -> Result<()> {
        match self.api.delete_camera(camera_id).await {
            Ok(()) => {
                let mut state = self.inner.write().await;
                let before = state.cameras.len();
                state.cameras.retain(|c| c.camera_id != camera_id);
                if state.cameras.len() < before {
                    state.recompute_daily_counts();
                    info!(camera_id = %camera_id, "Camera deleted");
                } else {
                    warn!(camera_id = %camera_id, "Camera deleted remotely but not in session set");
                }
                Ok(())
            }
            Err(e) => {
                error!(camera_id = %camera_id, error = %e, "Camera delete failed");
                Err(e)
            }
        }
    }

    /// Known locations for the add form, straight from the directory
    pub async fn fetch_locations(&self) -> Result<Vec<Location>> {
        self.api.list_locations().await
    }

    /// Cameras in fetch/insertion order
    pub async fn cameras(&self) -> Vec<Camera> {
        self.inner.read().await.cameras.clone()
    }

    /// Recent activity, newest first, at most five entries
    pub async fn recent_activity(&self) -> Vec<ActivityEntry> {
        self.inner.read().await.activity.recent()
    }

    /// Full session log, newest first
    pub async fn logs(&self) -> Vec<ActivityEntry> {
        self.inner.read().await.activity.all()
    }

    /// Seven-day cumulative series, oldest day first
    pub async fn daily_counts(&self) -> Vec<DailyCount> {
        self.inner.read().await.daily_counts.clone()
    }

    /// True while a list fetch is outstanding
    pub async fn is_loading(&self) -> bool {
        self.inner.read().await.loading
    }

    /// True while an add is outstanding
    pub async fn is_adding_camera(&self) -> bool {
        self.inner.read().await.adding_camera
    }

    /// Dashboard summary assembled from current state
    pub async fn overview(&self) -> FleetOverview {
        let state = self.inner.read().await;
        let today = Local::now().date_naive();
        let added_today = state
            .cameras
            .iter()
            .filter(|c| c.created_on() == Some(today))
            .count();

        FleetOverview {
            total_cameras: state.cameras.len(),
            added_today,
            daily_counts: state.daily_counts.clone(),
            recent_activity: state.activity.recent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn offline_provider() -> CameraProvider {
        // Port 1 refuses connections, so any request that slips through
        // validation fails fast as a transport error.
        CameraProvider::new(CameraApiClient::new("http://127.0.0.1:1/api"), "admin")
    }

    #[tokio::test]
    async fn test_initial_state_is_empty_with_zeroed_series() {
        let provider = offline_provider();

        assert!(provider.cameras().await.is_empty());
        assert!(provider.recent_activity().await.is_empty());
        assert!(provider.logs().await.is_empty());
        assert!(!provider.is_loading().await);
        assert!(!provider.is_adding_camera().await);

        let counts = provider.daily_counts().await;
        assert_eq!(counts.len(), 7);
        assert!(counts.iter().all(|c| c.count == 0));
    }

    #[tokio::test]
    async fn test_invalid_form_is_rejected_locally() {
        let provider = offline_provider();

        let result = provider
            .add_camera(NewCamera::new("L", "HQ", "999.1.1.1"))
            .await;

        match result {
            Err(Error::Form(errors)) => {
                assert!(errors.contains(FormField::Name));
                assert!(errors.contains(FormField::Ipaddress));
            }
            other => panic!("expected form error, got {:?}", other.map(|c| c.camera_id)),
        }

        assert!(provider.cameras().await.is_empty());
        assert!(provider.logs().await.is_empty());
        assert!(!provider.is_adding_camera().await);
    }

    #[tokio::test]
    async fn test_overview_reflects_empty_session() {
        let provider = offline_provider();
        let overview = provider.overview().await;

        assert_eq!(overview.total_cameras, 0);
        assert_eq!(overview.added_today, 0);
        assert_eq!(overview.daily_counts.len(), 7);
        assert!(overview.recent_activity.is_empty());
    }
}
