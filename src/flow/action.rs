//! Base trait for actions.

/// Marker trait for action objects.
///
/// Actions are created by the view layer (key presses, replayed log lines),
/// consumed exactly once by a reducer, then discarded.
pub trait Action: Send + 'static {}
