//! formstore: a composed application state store.
//!
//! The application state is split into three slices, `header`, `login` and
//! `register`, each owned by one feature reducer. [`app::state::root_reducer`]
//! combines them into a single reducer, [`app::registry::actions`] exposes the
//! shared form-manager action creators by name, and [`app::store::Store`]
//! holds the current state and applies dispatches.

pub mod app;
pub mod config;
pub mod error;
pub mod features;
pub mod forms;
pub mod logging;
pub mod script;

pub use app::action::Action;
pub use app::reducer::{Reducer, RootReducer, RootState};
pub use app::registry::{actions, ActionCreators};
pub use app::state::{create_store, root_reducer, AppState, AppStore};
pub use error::{Error, Result};
