//! Feature reducers, one per slice of the root state.

pub mod header;
pub mod login;
pub mod register;

pub use header::{HeaderReducer, HeaderState};
pub use login::LoginReducer;
pub use register::RegisterReducer;
