//! todoflow: a todo list driven by a reducer store.
//!
//! The core is [`todos::root_reducer`] and [`todos::visible_todos`]; the
//! [`flow::Store`] applies the reducer and notifies subscribers, and the
//! [`ui`] module renders the state in a terminal.

pub mod cli;
pub mod config;
pub mod error;
pub mod flow;
pub mod logging;
pub mod replay;
pub mod todos;
pub mod ui;

pub use error::{AppError, Result};
