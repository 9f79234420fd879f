//! IS23 CamAdmin Library
//!
//! Camera fleet admin console core
//!
//! ## Architecture (5 Components)
//!
//! 1. CameraProvider - Session camera state (single source of truth)
//! 2. CameraApiClient - Camera management API access
//! 3. ActivityLog - Session activity recording
//! 4. DailyStats - Camera registration trend
//! 5. SessionState - Configuration and session wiring
//!
//! ## Design Principles
//!
//! - SSoT: the provider owns the session's camera state
//! - Explicit recomputation: derived series follow every set change
//! - No optimistic writes: local state changes only after server confirmation

pub mod activity_log;
pub mod api_client;
pub mod camera_provider;
pub mod daily_stats;
pub mod error;
pub mod state;

pub use error::{Error, Result};
pub use state::{AppConfig, SessionState};
