use dh_core::{Coord, LocationStyle};

use serde::Deserialize;

/// POST /api/location body. With `location_id` the location is updated,
/// otherwise a new one is created.
#[derive(Debug, Deserialize)]
pub struct SaveLocationRequest {
    pub location_id: Option<String>,
    pub name: Option<String>,
    pub paths: Option<Vec<Coord>>,
    #[serde(flatten)]
    pub style: LocationStyle,
}
