//! Chat session management.
//!
//! A `ChatSession` holds the widget state, validates send preconditions,
//! builds the outbound request, and reconciles the response (or failure)
//! back into the transcript.

mod builder;
mod guard;
mod manager;
mod send;


pub use builder::ChatSessionBuilder;
pub use manager::{ChatSession, RenderHook};
