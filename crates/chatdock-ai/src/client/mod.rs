//! Chat endpoint client.
//!
//! Sends one request and, if the endpoint answers with an unsuccessful
//! status, one history-less fallback request before giving up.

mod api;
mod config;


pub use api::{ChatClient, Completion};
pub use config::ClientConfig;
