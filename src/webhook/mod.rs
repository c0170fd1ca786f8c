//! Webhook event decoding and dispatch
//!
//! HTTP-agnostic: the server adapter extracts the event kind and body and
//! hands them here; everything GitHub-shaped about the payloads lives in
//! `events`, the pipeline wiring in `handler`.

pub mod events;
pub mod handler;

pub use events::Event;
pub use handler::EventHandler;
