//! Base trait for store state.

/// Marker trait for state objects.
///
/// `Default` is the initial state: the value a reducer produces when it is
/// first invoked with no previous state.
pub trait State: Clone + PartialEq + Default + Send + 'static {}
