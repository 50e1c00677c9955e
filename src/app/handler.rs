//! The dispatch loop.
//!
//! Events arrive on an unbounded channel and are applied to the store one at
//! a time: an event is fully reduced before the next one is received.

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::reducer::{Reducer, SliceMap};
use crate::app::registry::ActionCreators;
use crate::app::store::Store;
use crate::config::DispatchConfig;
use crate::error::Result;
use tokio::sync::mpsc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub dispatched: usize,
    pub skipped: usize,
}

/// Apply a single event to `store`.
pub fn handle_event<R>(
    store: &mut Store<R>,
    creators: &ActionCreators,
    event: AppEvent,
) -> Result<Flow>
where
    R: Reducer<Action>,
    R::State: SliceMap,
{
    match event {
        AppEvent::Dispatch(action) => {
            store.dispatch(action);
            Ok(Flow::Continue)
        }
        AppEvent::Invoke { creator, args } => {
            let action = creators.invoke(&creator, &args)?;
            store.dispatch(action);
            Ok(Flow::Continue)
        }
        AppEvent::Shutdown => Ok(Flow::Stop),
    }
}

/// Drain `rx` into `store` until a shutdown event arrives or every sender
/// is dropped.
pub async fn run<R>(
    store: &mut Store<R>,
    creators: &ActionCreators,
    rx: &mut mpsc::UnboundedReceiver<AppEvent>,
    config: &DispatchConfig,
) -> Result<RunSummary>
where
    R: Reducer<Action>,
    R::State: SliceMap,
{
    let mut summary = RunSummary::default();

    while let Some(event) = rx.recv().await {
        match handle_event(store, creators, event) {
            Ok(Flow::Continue) => summary.dispatched += 1,
            Ok(Flow::Stop) => break,
            Err(e) if !config.fail_fast => {
                warn!(error = %e, "skipping event");
                summary.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        dispatched = summary.dispatched,
        skipped = summary.skipped,
        "dispatch loop finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::registry;
    use crate::app::state::create_store;
    use crate::config::StoreConfig;
    use crate::error::Error;
    use crate::forms::{self, FormId, SubmitStatus};

    fn invoke(creator: &str, args: &[&str]) -> AppEvent {
        AppEvent::Invoke {
            creator: creator.into(),
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_handle_invoke() {
        let mut store = create_store(&StoreConfig::default());
        let creators = registry::actions().unwrap();

        let flow = handle_event(
            &mut store,
            &creators,
            invoke("update_field", &["login", "email", "ada@example.com"]),
        )
        .unwrap();
        assert_eq!(flow, Flow::Continue);
        assert_eq!(store.state().login.value("email"), Some("ada@example.com"));

        let flow = handle_event(&mut store, &creators, AppEvent::Shutdown).unwrap();
        assert_eq!(flow, Flow::Stop);
    }

    #[tokio::test]
    async fn test_run_until_shutdown() {
        let mut store = create_store(&StoreConfig::default());
        let creators = registry::actions().unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();

        tx.send(invoke("submit_form", &["login"])).unwrap();
        tx.send(forms::submit_succeeded(FormId::Login, "ada").into()).unwrap();
        tx.send(AppEvent::Shutdown).unwrap();
        tx.send(invoke("reset_form", &["login"])).unwrap();

        let summary = run(&mut store, &creators, &mut rx, &DispatchConfig::default())
            .await
            .unwrap();
        assert_eq!(
            summary,
            RunSummary {
                dispatched: 2,
                skipped: 0
            }
        );
        assert_eq!(store.state().login.status, SubmitStatus::Succeeded);
        assert!(store.state().header.is_signed_in());
    }

    #[tokio::test]
    async fn test_bad_events_are_skipped() {
        let mut store = create_store(&StoreConfig::default());
        let creators = registry::actions().unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();

        tx.send(invoke("logout", &[])).unwrap();
        tx.send(invoke("submit_form", &[])).unwrap();
        tx.send(invoke("submit_form", &["register"])).unwrap();
        drop(tx);

        let summary = run(&mut store, &creators, &mut rx, &DispatchConfig::default())
            .await
            .unwrap();
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.dispatched, 1);
        assert_eq!(store.state().register.status, SubmitStatus::Submitting);
    }

    #[tokio::test]
    async fn test_fail_fast_stops_on_error() {
        let mut store = create_store(&StoreConfig::default());
        let creators = registry::actions().unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();

        tx.send(invoke("logout", &[])).unwrap();
        tx.send(invoke("submit_form", &["register"])).unwrap();
        drop(tx);

        let err = run(
            &mut store,
            &creators,
            &mut rx,
            &DispatchConfig { fail_fast: true },
        )
        .await
        .unwrap_err();
        assert_eq!(err, Error::UnknownActionCreator("logout".into()));
        assert_eq!(store.state().register.status, SubmitStatus::Idle);
    }
}
