//! Browser-facing services: image preloading and the chat relay.

pub mod chat;
pub mod preload;
