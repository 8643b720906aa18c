//! Location REST API handlers

use crate::api::required;
use crate::{
    ApiResult, AppState, DeleteLocationRequest, LocationListResponse, LocationQuery,
    LocationResponse, LocationSavedResponse, MessageResponse, SaveLocationRequest,
};

use dh_core::Location;

use axum::{
    Json,
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use log::{info, warn};
use uuid::Uuid;

pub const MISSING_LOCATION_FIELDS: &str =
    "Please provide a location name and the coordinates that form its paths.";
pub const SAVE_UNKNOWN_ID: &str =
    "There was a problem saving the given location, the given id does not exist.";
pub const SAVE_MALFORMED: &str =
    "There was a problem saving the given location, probably a malformed request.";
pub const LOCATION_UPDATED: &str = "The existing location has been successfully saved.";
pub const LOCATION_CREATED: &str = "The new location has been successfully saved.";
pub const MISSING_LOOKUP_KEY: &str = "Please provide a location id or a location name.";
pub const RETRIEVE_FAILED: &str = "There was a problem retrieving the location.";
pub const MISSING_LOCATION_ID: &str = "Please provide a location id.";
pub const DELETE_UNKNOWN_ID: &str =
    "There was a problem removing the location, the given id does not exist.";
pub const LOCATION_REMOVED: &str = "The existing location has been successfully removed.";

fn failure(msg: &str) -> Response {
    Json(MessageResponse::failure(msg)).into_response()
}

/// POST /api/location (admin)
pub async fn save_location(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<SaveLocationRequest>,
) -> ApiResult<Response> {
    state.guard.check_authenticated(&headers, true).await?;

    let (Some(name), Some(paths)) = (required(req.name), req.paths) else {
        return Ok(failure(MISSING_LOCATION_FIELDS));
    };

    let (mut location, is_new) = match required(req.location_id) {
        Some(raw_id) => {
            let existing = match Uuid::parse_str(raw_id.trim()) {
                Ok(id) => state.locations.find_by_id(id).await?,
                Err(_) => None,
            };
            let Some(existing) = existing else {
                return Ok(failure(SAVE_UNKNOWN_ID));
            };
            (existing, false)
        }
        None => (Location::new(String::new(), Vec::new()), true),
    };

    location.name = name;
    location.paths = paths;
    location.apply_style(&req.style);

    if let Err(e) = location.validate() {
        warn!("Rejected location save: {}", e);
        return Ok(failure(SAVE_MALFORMED));
    }

    let msg = if is_new {
        state.locations.create(&location).await?;
        LOCATION_CREATED
    } else {
        if !state.locations.update(&location).await? {
            return Ok(failure(SAVE_UNKNOWN_ID));
        }
        LOCATION_UPDATED
    };
    info!("Location {} saved", location.id);

    Ok(Json(LocationSavedResponse {
        success: true,
        msg: msg.to_string(),
        location_id: location.id,
    })
    .into_response())
}

/// GET /api/location?location_id=|name=
pub async fn get_location(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> ApiResult<Response> {
    let found = if let Some(raw_id) = required(query.location_id) {
        match Uuid::parse_str(raw_id.trim()) {
            Ok(id) => state.locations.find_by_id(id).await?,
            Err(_) => None,
        }
    } else if let Some(name) = required(query.name) {
        state.locations.find_by_name(&name).await?
    } else {
        return Ok(failure(MISSING_LOOKUP_KEY));
    };

    match found {
        Some(location) => Ok(Json(LocationResponse {
            success: true,
            location,
        })
        .into_response()),
        None => Ok(failure(RETRIEVE_FAILED)),
    }
}

/// DELETE /api/location (admin)
pub async fn delete_location(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<DeleteLocationRequest>,
) -> ApiResult<Response> {
    state.guard.check_authenticated(&headers, true).await?;

    let Some(raw_id) = required(req.location_id) else {
        return Ok(failure(MISSING_LOCATION_ID));
    };
    let Ok(id) = Uuid::parse_str(raw_id.trim()) else {
        return Ok(failure(DELETE_UNKNOWN_ID));
    };

    if !state.locations.delete(id).await? {
        return Ok(failure(DELETE_UNKNOWN_ID));
    }
    info!("Location {} removed", id);

    Ok(Json(LocationSavedResponse {
        success: true,
        msg: LOCATION_REMOVED.to_string(),
        location_id: id,
    })
    .into_response())
}

/// GET /api/locations
pub async fn list_locations(
    State(state): State<AppState>,
) -> ApiResult<Json<LocationListResponse>> {
    let locations = state.locations.list().await?;

    Ok(Json(LocationListResponse {
        success: true,
        locations,
    }))
}
