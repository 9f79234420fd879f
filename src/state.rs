//! Session state
//!
//! Holds the configuration and shared components for one admin session

use std::sync::Arc;

use crate::api_client::{CameraApiClient, DEFAULT_API_BASE_URL};
use crate::camera_provider::CameraProvider;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Camera management API base URL
    pub api_base_url: String,
    /// Operator identity recorded on activity entries
    pub operator: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            operator: std::env::var("OPERATOR").unwrap_or_else(|_| "admin".to_string()),
        }
    }
}

/// Session state shared across consumers
#[derive(Clone)]
pub struct SessionState {
    /// Session config
    pub config: AppConfig,
    /// Camera data provider (single source of truth for the session)
    pub provider: Arc<CameraProvider>,
}

impl SessionState {
    /// Create the session state: one API client, one provider, created at
    /// session start and dropped at session end
    pub fn new(config: AppConfig) -> Self {
        let api = CameraApiClient::new(&config.api_base_url);
        let provider = Arc::new(CameraProvider::new(api, &config.operator));

        Self { config, provider }
    }
}
