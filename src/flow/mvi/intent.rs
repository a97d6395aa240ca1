//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents cover both user actions (a refresh pull, a save tap) and
/// system events (a fetch completion, the map reporting ready). They are
/// the only vocabulary a reducer understands.
pub trait Intent: Send + 'static {}
