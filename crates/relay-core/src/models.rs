pub mod chat;
pub mod claims;
pub mod envelope;
pub mod reply;
pub mod request;
