//! CameraApiClient - Camera Management API Access
//!
//! ## Responsibilities
//!
//! - HTTP access to the remote camera management API
//! - Uniform failure mapping (transport error or non-2xx status)
//!
//! The client is stateless; all caching lives in the provider. No
//! authentication header is attached, no retries are attempted.

pub mod types;

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::camera_provider::types::Camera;
use crate::error::{Error, Result};

pub use types::{CreateCameraRequest, Location};

/// Default API base URL (local camera management server)
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3636/api";

/// HTTP client for the camera management API
#[derive(Debug, Clone)]
pub struct CameraApiClient {
    http: Client,
    base_url: String,
}

impl CameraApiClient {
    /// Create a client for the given base URL, e.g. `http://localhost:3636/api`
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /cameras
    pub async fn list_cameras(&self) -> Result<Vec<Camera>> {
        let url = format!("{}/cameras", self.base_url);
        debug!(url = %url, "Fetching camera list");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                message: body,
            })
        }
    }

    /// POST /cameras
    pub async fn create_camera(&self, request: &CreateCameraRequest) -> Result<Camera> {
        let url = format!("{}/cameras", self.base_url);
        debug!(url = %url, camera_name = %request.camera_name, "Creating camera");

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                message: body,
            })
        }
    }

    /// DELETE /cameras/{id}
    pub async fn delete_camera(&self, camera_id: &str) -> Result<()> {
        let url = format!("{}/cameras/{}", self.base_url, camera_id);
        debug!(url = %url, "Deleting camera");

        let response = self.http.delete(&url).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                message: body,
            })
        }
    }

    /// GET /locations
    pub async fn list_locations(&self) -> Result<Vec<Location>> {
        let url = format!("{}/locations", self.base_url);
        debug!(url = %url, "Fetching location directory");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                message: body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed_from_base_url() {
        let client = CameraApiClient::new("http://localhost:3636/api/");
        assert_eq!(client.base_url(), "http://localhost:3636/api");
    }

    #[test]
    fn test_default_base_url_matches_local_server() {
        let client = CameraApiClient::new(DEFAULT_API_BASE_URL);
        assert_eq!(client.base_url(), "http://localhost:3636/api");
    }
}
