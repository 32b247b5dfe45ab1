//! Marker trait for intents.

/// A single-shot command produced by the input surface.
///
/// Intents are plain values: they are created by key or button handlers,
/// handed to a reducer once and then dropped.
pub trait Intent: Send + 'static {}
