mod error;
mod message_response;
