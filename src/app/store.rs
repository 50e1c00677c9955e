//! The state container.
//!
//! A [`Store`] owns the root reducer and the current state. It is an
//! ordinary value: callers construct one, pass it to whatever drives
//! dispatches, and drop it when done. Nothing about it is global.

use crate::app::action::Action;
use crate::app::reducer::{Reducer, SliceMap};
use crate::config::StoreConfig;
use chrono::Local;
use std::collections::VecDeque;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// One applied dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRecord {
    pub sequence: u64,
    pub timestamp: String,
    pub kind: &'static str,
    /// Slices the dispatch replaced, in registration order.
    pub changed: Vec<&'static str>,
}

type Listener<S> = Box<dyn FnMut(&S) + Send>;

pub struct Store<R: Reducer<Action>> {
    reducer: R,
    state: R::State,
    sequence: u64,
    history: VecDeque<DispatchRecord>,
    history_limit: usize,
    record_history: bool,
    listeners: Vec<(SubscriptionId, Listener<R::State>)>,
    next_subscription: u64,
}

impl<R> Store<R>
where
    R: Reducer<Action>,
    R::State: SliceMap,
{
    /// Create a store, building the initial state by dispatching
    /// [`Action::Init`] with no prior state.
    pub fn new(reducer: R, config: &StoreConfig) -> Self {
        let state = reducer.reduce_from(None, &Action::Init);
        let mut store = Self {
            reducer,
            state,
            sequence: 0,
            history: VecDeque::new(),
            history_limit: config.history_limit,
            record_history: config.record_history,
            listeners: Vec::new(),
            next_subscription: 0,
        };
        store.record(Action::Init.kind(), Vec::new());
        store
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Apply `action` and return the resulting state.
    ///
    /// Subscribers are called only when at least one slice changed.
    pub fn dispatch(&mut self, action: Action) -> &R::State {
        let next = self.reducer.reduce(&self.state, &action);
        let changed = self.state.changed_slices(&next);

        debug!(
            sequence = self.sequence + 1,
            kind = action.kind(),
            changed = ?changed,
            "dispatch"
        );

        let notify = !changed.is_empty();
        self.record(action.kind(), changed);
        if notify {
            self.state = next;
            for (_, listener) in self.listeners.iter_mut() {
                listener(&self.state);
            }
        }
        &self.state
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&R::State) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn history(&self) -> impl Iterator<Item = &DispatchRecord> {
        self.history.iter()
    }

    /// Number of dispatches applied, including the initial one.
    pub fn dispatch_count(&self) -> u64 {
        self.sequence
    }

    fn record(&mut self, kind: &'static str, changed: Vec<&'static str>) {
        self.sequence += 1;
        if !self.record_history || self.history_limit == 0 {
            return;
        }
        self.history.push_back(DispatchRecord {
            sequence: self.sequence,
            timestamp: Local::now().format("%H:%M:%S%.3f").to_string(),
            kind,
            changed,
        });
        while self.history.len() > self.history_limit {
            self.history.pop_front();
        }
    }
}
