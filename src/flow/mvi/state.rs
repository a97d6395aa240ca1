//! Base trait for flow state.

/// Marker trait for state objects.
///
/// States are cheap to clone, self-contained, and comparable so tests
/// can assert on whole transitions.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
