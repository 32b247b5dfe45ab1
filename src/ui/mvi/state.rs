//! Marker trait for reducer-owned state.

/// State rendered by the view.
///
/// `Default` is the state at startup; `PartialEq` lets callers detect
/// whether an intent changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
