//! Reducer contract and the root state composer.
//!
//! A [`Reducer`] computes the next value of one piece of state from its
//! current value and an action. [`RootReducer`] partitions the application
//! state into three fixed slices and hands each slice, and only that slice,
//! to the reducer that owns it.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// A pure, total state transition over actions of type `A`.
///
/// Implementations must return a value equal to `state` for any action
/// they do not handle, and must not panic.
pub trait Reducer<A> {
    type State: Clone + PartialEq + fmt::Debug;

    fn initial_state(&self) -> Self::State;

    fn reduce(&self, state: &Self::State, action: &A) -> Self::State;

    /// Reduce from an optional state, starting from
    /// [`initial_state`](Reducer::initial_state) when there is none yet.
    fn reduce_from(&self, state: Option<&Self::State>, action: &A) -> Self::State {
        match state {
            Some(state) => self.reduce(state, action),
            None => self.reduce(&self.initial_state(), action),
        }
    }
}

/// State made of named slices that can report which slices a transition
/// replaced.
pub trait SliceMap {
    fn changed_slices(&self, next: &Self) -> Vec<&'static str>;
}

/// A reducer built from an initial value and a transition function.
pub struct FnReducer<S, F> {
    initial: S,
    reduce: F,
}

impl<S, F> FnReducer<S, F> {
    pub fn new(initial: S, reduce: F) -> Self {
        Self { initial, reduce }
    }
}

impl<A, S, F> Reducer<A> for FnReducer<S, F>
where
    S: Clone + PartialEq + fmt::Debug,
    F: Fn(&S, &A) -> S,
{
    type State = S;

    fn initial_state(&self) -> S {
        self.initial.clone()
    }

    fn reduce(&self, state: &S, action: &A) -> S {
        (self.reduce)(state, action)
    }
}

/// The composite application state.
///
/// Each slice sits behind an `Arc`. A slice that a dispatch leaves unchanged
/// keeps the same allocation, so `Arc::ptr_eq` tells consumers whether it
/// needs re-reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootState<H, L, R> {
    pub header: Arc<H>,
    pub login: Arc<L>,
    pub register: Arc<R>,
}

impl<H, L, R> RootState<H, L, R> {
    /// Slice names in registration order.
    pub const SLICES: [&'static str; 3] = ["header", "login", "register"];
}

impl<H, L, R> SliceMap for RootState<H, L, R> {
    fn changed_slices(&self, next: &Self) -> Vec<&'static str> {
        let mut changed = Vec::new();
        if !Arc::ptr_eq(&self.header, &next.header) {
            changed.push("header");
        }
        if !Arc::ptr_eq(&self.login, &next.login) {
            changed.push("login");
        }
        if !Arc::ptr_eq(&self.register, &next.register) {
            changed.push("register");
        }
        changed
    }
}

/// Combines the `header`, `login` and `register` reducers into one reducer
/// over [`RootState`].
#[derive(Debug, Clone, Default)]
pub struct RootReducer<H, L, R> {
    header: H,
    login: L,
    register: R,
}

impl<H, L, R> RootReducer<H, L, R> {
    pub fn new(header: H, login: L, register: R) -> Self {
        Self {
            header,
            login,
            register,
        }
    }
}

impl<A, H, L, R> Reducer<A> for RootReducer<H, L, R>
where
    H: Reducer<A>,
    L: Reducer<A>,
    R: Reducer<A>,
{
    type State = RootState<H::State, L::State, R::State>;

    fn initial_state(&self) -> Self::State {
        RootState {
            header: Arc::new(self.header.initial_state()),
            login: Arc::new(self.login.initial_state()),
            register: Arc::new(self.register.initial_state()),
        }
    }

    fn reduce(&self, state: &Self::State, action: &A) -> Self::State {
        RootState {
            header: reduce_slice(&self.header, &state.header, action),
            login: reduce_slice(&self.login, &state.login, action),
            register: reduce_slice(&self.register, &state.register, action),
        }
    }
}

/// Run one slice reducer, keeping the existing allocation when the result
/// equals the input.
fn reduce_slice<A, R: Reducer<A>>(reducer: &R, slice: &Arc<R::State>, action: &A) -> Arc<R::State> {
    let next = reducer.reduce(slice, action);
    if next == **slice {
        Arc::clone(slice)
    } else {
        Arc::new(next)
    }
}
