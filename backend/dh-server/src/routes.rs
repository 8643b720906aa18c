use crate::{
    AppState, authenticate, delete_location, get_location, health, list_locations,
    require_session, save_location, send_verify_email, signup, user_info, verify_email,
};

use axum::{
    Router,
    http::{
        HeaderName, Method,
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, ORIGIN},
    },
    middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

const X_REQUESTED_WITH: HeaderName = HeaderName::from_static("x-requested-with");

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // Signature check only; handlers run the full access guard
    let session_filter = middleware::from_fn_with_state(state.clone(), require_session);

    let api = Router::new()
        .route("/signup", post(signup))
        .route("/send-verify-email", post(send_verify_email))
        .route("/verify/{token}/{email_token}", get(verify_email))
        .route("/authenticate", post(authenticate))
        .route(
            "/userinfo",
            get(user_info).route_layer(session_filter.clone()),
        )
        .route(
            "/location",
            get(get_location).merge(
                post(save_location)
                    .delete(delete_location)
                    .route_layer(session_filter),
            ),
        )
        .route("/locations", get(list_locations));

    Router::new()
        .nest("/api", api)
        .route("/health", get(health::health_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
                .allow_headers([ORIGIN, X_REQUESTED_WITH, CONTENT_TYPE, ACCEPT, AUTHORIZATION]),
        )
}
