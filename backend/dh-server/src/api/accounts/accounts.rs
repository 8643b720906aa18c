//! Account REST API handlers

use crate::api::required;
use crate::{
    ApiResult, AppState, AuthenticateRequest, AuthenticateResponse, EmailRequest,
    MessageResponse, SignupRequest, UserInfoResponse,
};

use dh_auth::{
    AuthError, INVALID_URL_MESSAGE, LoginOutcome, PendingIdentity, SESSION_TOKEN_SCHEME, login,
    prepare_for_persistence,
};

use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};
use log::{error, info, warn};

pub const MISSING_SIGNUP_FIELDS: &str = "Please provide e-mail, password and full name.";
pub const DUPLICATE_EMAIL: &str = "A user with the given e-mail address already exists.";
pub const SIGNUP_SUCCEEDED: &str = "Your new user has been successfully created, please check \
                                    your e-mail to verify your address before logging in.";
pub const MISSING_VERIFY_EMAIL: &str = "Please provide the e-mail address to be verified.";
pub const INVALID_REQUEST: &str = "Invalid request.";
pub const MISSING_CONFIRMATION_TOKEN: &str =
    "There is a problem with this user, please contact our support.";
pub const MAIL_FAILED: &str =
    "There was a problem sending the e-mail, please try again or contact our support.";
pub const VERIFY_EMAIL_SENT: &str =
    "The verification e-mail has been sent, please check your e-mail to verify it.";
pub const AUTHENTICATION_FAILED: &str =
    "Authentication failed. E-mail address or password incorrect.";
pub const EMAIL_NOT_VERIFIED: &str =
    "Your e-mail address has not been verified yet, please verify it.";

/// POST /api/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let (Some(email), Some(password), Some(full_name)) = (
        required(req.email),
        required(req.password),
        required(req.full_name),
    ) else {
        return Ok(Json(MessageResponse::failure(MISSING_SIGNUP_FIELDS)));
    };
    let email = email.trim().to_string();

    // Skip the key derivation when the answer is already known
    if state.users.find_by_email(&email).await?.is_some() {
        return Ok(Json(MessageResponse::failure(DUPLICATE_EMAIL)));
    }

    let pending = PendingIdentity::new(email, password, full_name);
    let identity = prepare_for_persistence(pending, &state.codec, &state.issuer).await?;

    match state.users.insert(&identity).await {
        Ok(()) => {}
        // A concurrent signup won the race
        Err(e) if e.is_duplicate() => {
            return Ok(Json(MessageResponse::failure(DUPLICATE_EMAIL)));
        }
        Err(e) => return Err(e.into()),
    }
    info!("Account created for {}", identity.email);

    if let Some(message) = state.confirmation_message(&identity) {
        state.spawn_confirmation_mail(message);
    }

    Ok(Json(MessageResponse::success(SIGNUP_SUCCEEDED)))
}

/// POST /api/send-verify-email
pub async fn send_verify_email(
    State(state): State<AppState>,
    Json(req): Json<EmailRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let Some(email) = required(req.email) else {
        return Ok(Json(MessageResponse::failure(MISSING_VERIFY_EMAIL)));
    };

    let Some(identity) = state.users.find_unconfirmed_by_email(email.trim()).await? else {
        return Ok(Json(MessageResponse::failure(INVALID_REQUEST)));
    };

    let Some(message) = state.confirmation_message(&identity) else {
        warn!("Unconfirmed account {} has no confirmation token", identity.email);
        return Ok(Json(MessageResponse::failure(MISSING_CONFIRMATION_TOKEN)));
    };

    if let Err(e) = state.mailer.send_confirmation(&message).await {
        error!("Failed to resend confirmation email to {}: {}", identity.email, e);
        return Ok(Json(MessageResponse::failure(MAIL_FAILED)));
    }

    Ok(Json(MessageResponse::success(VERIFY_EMAIL_SENT)))
}

/// GET /api/verify/{token}/{email_token}
pub async fn verify_email(
    State(state): State<AppState>,
    Path((token, email_token)): Path<(String, String)>,
) -> ApiResult<Json<MessageResponse>> {
    match state
        .issuer
        .verify(state.users.as_ref(), &token, &email_token)
        .await
    {
        Ok(_) => Ok(Json(MessageResponse::ok())),
        Err(AuthError::InvalidConfirmation { .. }) => {
            Ok(Json(MessageResponse::failure(INVALID_URL_MESSAGE)))
        }
        Err(e) => Err(e.into()),
    }
}

/// POST /api/authenticate
pub async fn authenticate(
    State(state): State<AppState>,
    Json(req): Json<AuthenticateRequest>,
) -> ApiResult<Json<AuthenticateResponse>> {
    let (Some(email), Some(password)) = (required(req.email), req.password) else {
        return Ok(Json(AuthenticateResponse::failure(AUTHENTICATION_FAILED)));
    };

    let outcome = login(
        state.users.as_ref(),
        &state.codec,
        &state.sessions,
        email.trim(),
        &password,
    )
    .await?;

    let response = match outcome {
        LoginOutcome::Authenticated { token, .. } => {
            AuthenticateResponse::token(format!("{} {}", SESSION_TOKEN_SCHEME, token))
        }
        LoginOutcome::EmailNotConfirmed => {
            AuthenticateResponse::email_not_verified(EMAIL_NOT_VERIFIED)
        }
        LoginOutcome::InvalidCredentials => AuthenticateResponse::failure(AUTHENTICATION_FAILED),
    };

    Ok(Json(response))
}

/// GET /api/userinfo
pub async fn user_info(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<UserInfoResponse>> {
    let identity = state.guard.check_authenticated(&headers, false).await?;

    Ok(Json(UserInfoResponse {
        success: true,
        full_name: identity.full_name,
    }))
}
