//! Unidirectional data-flow primitives.
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Subscribers (view)
//!    ↑                                   │
//!    └───────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of everything the view needs
//! - **Action**: description of an intended change
//! - **Reducer**: pure function `(State, Action) -> State`
//! - **Store**: holds the current state, applies the reducer on dispatch,
//!   notifies subscribers after every committed transition

mod action;
mod reducer;
mod state;
mod store;

pub use action::Action;
pub use reducer::Reducer;
pub use state::State;
pub use store::{Listener, Store, SubscriptionId};
