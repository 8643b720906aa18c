pub mod accounts;
pub mod error;
pub mod locations;
pub mod message_response;
pub mod middleware;

/// Treat absent, empty and whitespace-only fields alike
pub(crate) fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
