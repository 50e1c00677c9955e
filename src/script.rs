//! Action scripts.
//!
//! A script is a TOML file listing action-creator calls in order:
//!
//! ```toml
//! [[step]]
//! creator = "update_field"
//! args = ["login", "email", "ada@example.com"]
//!
//! [[step]]
//! creator = "submit_form"
//! args = ["login"]
//! ```

use crate::app::event::AppEvent;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub creator: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Script {
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).with_context(|| "Failed to parse action script")
    }

    /// One [`AppEvent::Invoke`] per step, in file order.
    pub fn events(&self) -> impl Iterator<Item = AppEvent> + '_ {
        self.steps.iter().map(|step| AppEvent::Invoke {
            creator: step.creator.clone(),
            args: step.args.clone(),
        })
    }

    /// Queue every step followed by [`AppEvent::Shutdown`]. The channel is
    /// unbounded, so this never waits on the dispatch loop.
    pub fn enqueue(&self, tx: &mpsc::UnboundedSender<AppEvent>) -> Result<()> {
        for event in self.events().chain(std::iter::once(AppEvent::Shutdown)) {
            tx.send(event)
                .context("Dispatch loop closed before the script was queued")?;
        }
        Ok(())
    }
}

pub fn load(path: &Path) -> Result<Script> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read action script {}", path.display()))?;
    Script::parse(&contents).with_context(|| format!("In {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIGN_IN: &str = r#"
        [[step]]
        creator = "update_field"
        args = ["login", "email", "ada@example.com"]

        [[step]]
        creator = "submit_form"
        args = ["login"]
    "#;

    #[test]
    fn test_parse_steps() {
        let script = Script::parse(SIGN_IN).unwrap();
        assert_eq!(script.steps.len(), 2);
        assert_eq!(script.steps[1].creator, "submit_form");

        let events: Vec<_> = script.events().collect();
        assert_eq!(
            events[0],
            AppEvent::Invoke {
                creator: "update_field".into(),
                args: vec!["login".into(), "email".into(), "ada@example.com".into()],
            }
        );
    }

    #[test]
    fn test_args_default_to_empty() {
        let script = Script::parse("[[step]]\ncreator = \"noop\"\n").unwrap();
        assert!(script.steps[0].args.is_empty());
        assert_eq!(Script::parse("").unwrap(), Script::default());
    }

    #[test]
    fn test_missing_creator_is_an_error() {
        assert!(Script::parse("[[step]]\nargs = []\n").is_err());
    }

    #[tokio::test]
    async fn test_enqueued_script_replays_then_stops() {
        use crate::app::{handler, registry, state};
        use crate::config::{DispatchConfig, StoreConfig};

        let script = Script::parse(SIGN_IN).unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();
        script.enqueue(&tx).unwrap();

        // The sender stays alive: only the queued shutdown can end the loop
        let mut store = state::create_store(&StoreConfig::default());
        let creators = registry::actions().unwrap();
        let summary = handler::run(&mut store, &creators, &mut rx, &DispatchConfig::default())
            .await
            .unwrap();
        assert_eq!(summary.dispatched, 2);
        assert_eq!(store.state().login.value("email"), Some("ada@example.com"));
        drop(tx);
    }

    #[test]
    fn test_enqueue_fails_when_loop_is_gone() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        assert!(Script::parse(SIGN_IN).unwrap().enqueue(&tx).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sign_in.toml");
        std::fs::write(&path, SIGN_IN).unwrap();
        assert_eq!(load(&path).unwrap().steps.len(), 2);

        let err = load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read action script"));
    }
}
