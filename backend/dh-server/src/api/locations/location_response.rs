use dh_core::Location;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationResponse {
    pub success: bool,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationListResponse {
    pub success: bool,
    pub locations: Vec<Location>,
}

/// Reply to a save or delete, naming the affected location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSavedResponse {
    pub success: bool,
    pub msg: String,
    pub location_id: Uuid,
}
