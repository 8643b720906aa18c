pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod mailer;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    accounts::{
        accounts::{authenticate, send_verify_email, signup, user_info, verify_email},
        authenticate_request::AuthenticateRequest,
        authenticate_response::AuthenticateResponse,
        email_request::EmailRequest,
        signup_request::SignupRequest,
        user_info_response::UserInfoResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    locations::{
        delete_location_request::DeleteLocationRequest,
        location_query::LocationQuery,
        location_response::{LocationListResponse, LocationResponse, LocationSavedResponse},
        locations::{delete_location, get_location, list_locations, save_location},
        save_location_request::SaveLocationRequest,
    },
    message_response::MessageResponse,
    middleware::require_session::require_session,
};
pub use mailer::{ConfirmationMailer, ConfirmationMessage, LogMailer, MailError, SmtpMailer};
pub use routes::build_router;
pub use state::AppState;
