#![allow(dead_code)]

//! Test infrastructure for dh-server API tests

use dh_auth::{PasswordCodec, SessionTokenService};
use dh_core::Identity;
use dh_server::mailer::MailResult;
use dh_server::{AppState, ConfirmationMailer, ConfirmationMessage, build_router};

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"integration-secret-at-least-32-bytes";
pub const TEST_ITERATIONS: u32 = 16;
pub const PUBLIC_URL: &str = "http://dh.test";

/// Captures outgoing confirmation mail; can be switched to fail
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<ConfirmationMessage>>,
    failing: Mutex<bool>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<ConfirmationMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn fail_sends(&self) {
        *self.failing.lock().unwrap() = true;
    }

    /// Signup mails are sent from a spawned task
    pub async fn wait_for(&self, count: usize) -> Vec<ConfirmationMessage> {
        for _ in 0..100 {
            let sent = self.sent();
            if sent.len() >= count {
                return sent;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("expected {count} confirmation mails, got {}", self.sent().len());
    }
}

#[async_trait]
impl ConfirmationMailer for RecordingMailer {
    async fn send_confirmation(&self, message: &ConfirmationMessage) -> MailResult<()> {
        if *self.failing.lock().unwrap() {
            return Err(dh_server::MailError::Config {
                message: "relay refused".to_string(),
                location: error_location::ErrorLocation::from(std::panic::Location::caller()),
            });
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(SqliteConnectOptions::new().filename(":memory:"))
        .await
        .expect("Failed to create test database");

    dh_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub struct TestApp {
    pub state: AppState,
    pub mailer: Arc<RecordingMailer>,
    pub router: Router,
}

pub async fn create_test_app() -> TestApp {
    let pool = create_test_pool().await;
    let mailer = Arc::new(RecordingMailer::default());
    let state = AppState::new(
        pool,
        PasswordCodec::new(TEST_ITERATIONS).unwrap(),
        SessionTokenService::with_hs256(TEST_SECRET),
        mailer.clone(),
        PUBLIC_URL,
    );
    let router = build_router(state.clone());

    TestApp {
        state,
        mailer,
        router,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Insert a confirmed identity and return an `Authorization` value for it
    pub async fn create_confirmed_user(
        &self,
        email: &str,
        password: &str,
        is_admin: bool,
    ) -> String {
        let mut identity = Identity::new(email.to_string(), "Test User".to_string());
        identity.password = self.state.codec.derive(password).await.unwrap();
        identity.is_email_confirmed = true;
        identity.is_admin = is_admin;
        self.state.users.insert(&identity).await.unwrap();

        format!("JWT {}", self.state.sessions.issue(&identity).unwrap())
    }
}

pub fn json_request(
    method: &str,
    uri: &str,
    body: serde_json::Value,
    authorization: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get_request(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
