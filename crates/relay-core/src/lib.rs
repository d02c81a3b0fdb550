//! relay-core
//!
//! Pure domain types for the chat relay: conversation turns, the inbound
//! request, the payload sent to the inference endpoint, its reply, and the
//! envelope returned to the caller. No I/O.

pub mod error;
pub mod models;
