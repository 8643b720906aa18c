use serde::Deserialize;

/// GET /api/location query. `location_id` wins when both are given.
#[derive(Debug, Default, Deserialize)]
pub struct LocationQuery {
    pub location_id: Option<String>,
    pub name: Option<String>,
}
