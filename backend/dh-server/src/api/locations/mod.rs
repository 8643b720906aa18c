pub mod delete_location_request;
pub mod location_query;
pub mod location_response;
pub mod locations;
pub mod save_location_request;
