pub mod require_session;
