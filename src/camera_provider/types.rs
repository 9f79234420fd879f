//! Camera Provider Type Definitions
//!
//! Domain types for the camera fleet: the canonical camera record as served
//! by the management API, the add-form input with its local validation, and
//! the read-only dashboard overview.

use std::net::Ipv4Addr;

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::activity_log::ActivityEntry;
use crate::daily_stats::DailyCount;

/// Deserialize an optional string field, treating both absent and null as ""
pub(crate) fn string_or_empty<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

/// Display name used when a camera was registered without a name
pub const UNNAMED_CAMERA: &str = "Unnamed Camera";

/// Minimum length (in characters, after trimming) for name and location
pub const MIN_FIELD_CHARS: usize = 2;

/// Camera record as held by the provider and served by the API.
///
/// Optional text fields are normalized to empty strings at deserialization
/// so downstream code never sees null or absent values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Server-assigned identifier (opaque, unique within the fleet)
    pub camera_id: String,

    /// Display name (may be empty)
    #[serde(default, deserialize_with = "string_or_empty")]
    pub camera_name: String,

    /// Registration timestamp (server clock)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Network address (may be empty)
    #[serde(default, deserialize_with = "string_or_empty")]
    pub ipaddress: String,

    /// Installation site label (may be empty)
    #[serde(default, deserialize_with = "string_or_empty")]
    pub location_name: String,
}

impl Camera {
    /// Display name, with a placeholder for unnamed cameras
    pub fn display_name(&self) -> &str {
        if self.camera_name.is_empty() {
            UNNAMED_CAMERA
        } else {
            &self.camera_name
        }
    }

    /// Local calendar date of registration, if the timestamp is known
    pub fn created_on(&self) -> Option<NaiveDate> {
        self.created_at
            .map(|ts| ts.with_timezone(&Local).date_naive())
    }
}

/// Add-camera form input.
///
/// Field names mirror the operator-facing form, not the wire format; the
/// API client maps them onto the create request.
#[derive(Debug, Clone, Default)]
pub struct NewCamera {
    pub name: String,
    pub location: String,
    pub ip: String,
}

impl NewCamera {
    pub fn new(name: impl Into<String>, location: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            ip: ip.into(),
        }
    }

    /// Validate the form locally. On failure no request may be issued;
    /// the returned errors carry one message per offending field.
    pub fn validate(&self) -> std::result::Result<(), FormErrors> {
        let mut errors = Vec::new();

        if self.name.trim().chars().count() < MIN_FIELD_CHARS {
            errors.push(FieldError {
                field: FormField::Name,
                message: format!("Camera name must be at least {} characters", MIN_FIELD_CHARS),
            });
        }

        if self.location.trim().chars().count() < MIN_FIELD_CHARS {
            errors.push(FieldError {
                field: FormField::Location,
                message: format!("Location must be at least {} characters", MIN_FIELD_CHARS),
            });
        }

        if self.ip.trim().parse::<Ipv4Addr>().is_err() {
            errors.push(FieldError {
                field: FormField::Ipaddress,
                message: "Enter a valid IPv4 address".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(FormErrors::new(errors))
        }
    }
}

/// Form field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Location,
    Ipaddress,
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Location => write!(f, "location"),
            Self::Ipaddress => write!(f, "ip"),
        }
    }
}

/// Single field validation failure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

/// Validation failures for an add-camera form, one entry per offending field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FormErrors {}

/// Read-only dashboard summary assembled from provider state
#[derive(Debug, Clone, Serialize)]
pub struct FleetOverview {
    /// Cameras currently in the fleet
    pub total_cameras: usize,

    /// Cameras registered today (local calendar date)
    pub added_today: usize,

    /// Cumulative counts for the trailing seven days
    pub daily_counts: Vec<DailyCount>,

    /// Most recent session activity, newest first
    pub recent_activity: Vec<ActivityEntry>,
}
