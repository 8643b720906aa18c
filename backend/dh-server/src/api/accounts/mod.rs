pub mod accounts;
pub mod authenticate_request;
pub mod authenticate_response;
pub mod email_request;
pub mod signup_request;
pub mod user_info_response;
