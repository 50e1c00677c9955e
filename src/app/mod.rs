//! Core state management: actions, reducers, the store, and the dispatch loop.

pub mod action;
pub mod event;
pub mod handler;
pub mod reducer;
pub mod registry;
pub mod state;
pub mod store;
