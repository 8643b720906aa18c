use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DeleteLocationRequest {
    pub location_id: Option<String>,
}
