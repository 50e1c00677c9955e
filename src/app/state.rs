//! The application's root state: the `header`, `login` and `register`
//! slices wired to their feature reducers.

use crate::app::reducer::{RootReducer, RootState};
use crate::app::store::Store;
use crate::config::StoreConfig;
use crate::features::{HeaderReducer, HeaderState, LoginReducer, RegisterReducer};
use crate::forms::FormState;

pub type AppState = RootState<HeaderState, FormState, FormState>;

pub type AppReducer = RootReducer<HeaderReducer, LoginReducer, RegisterReducer>;

pub type AppStore = Store<AppReducer>;

/// The composed reducer for the whole application.
pub fn root_reducer() -> AppReducer {
    RootReducer::new(HeaderReducer, LoginReducer, RegisterReducer)
}

/// A fresh store over [`root_reducer`].
pub fn create_store(config: &StoreConfig) -> AppStore {
    Store::new(root_reducer(), config)
}
