//! Camera API Wire Types

use serde::{Deserialize, Serialize};

use crate::camera_provider::types::{string_or_empty, NewCamera};

/// Create-camera request body
#[derive(Debug, Clone, Serialize)]
pub struct CreateCameraRequest {
    pub camera_name: String,
    pub ipaddress: String,
    pub location_name: String,
}

impl From<&NewCamera> for CreateCameraRequest {
    fn from(form: &NewCamera) -> Self {
        Self {
            camera_name: form.name.clone(),
            ipaddress: form.ip.clone(),
            location_name: form.location.clone(),
        }
    }
}

/// Known installation site as served by the location directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub location_name: String,

    #[serde(default, deserialize_with = "string_or_empty")]
    pub ipaddress: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_maps_form_fields_onto_wire_names() {
        let form = NewCamera::new("Lobby", "HQ", "10.0.0.5");
        let request = CreateCameraRequest::from(&form);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["camera_name"], "Lobby");
        assert_eq!(value["ipaddress"], "10.0.0.5");
        assert_eq!(value["location_name"], "HQ");
    }

    #[test]
    fn test_location_deserialize_normalizes_missing_fields() {
        let loc: Location = serde_json::from_str(r#"{"location_name":"HQ"}"#).unwrap();
        assert_eq!(loc.location_name, "HQ");
        assert_eq!(loc.ipaddress, "");
    }
}
