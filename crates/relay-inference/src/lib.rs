//! relay-inference
//!
//! Client for the downstream inference endpoint: one JSON POST per chat
//! message, and extraction of the reply text.

pub mod client;
pub mod error;
