//! The application's action-creator namespace.
//!
//! Creator sources are merged into one flat map by [`ActionCreatorsBuilder`].
//! A name defined by two sources is rejected when the second source is
//! added, so the namespace can never silently shadow a creator.

use crate::app::action::Action;
use crate::error::{Error, Result};
use crate::forms;
use std::collections::BTreeMap;
use std::fmt;

/// A named action creator taking its arguments as strings.
pub type ActionCreatorFn = fn(&[String]) -> Result<Action>;

#[derive(Clone, Copy)]
struct Entry {
    source: &'static str,
    creator: ActionCreatorFn,
}

#[derive(Default)]
pub struct ActionCreatorsBuilder {
    entries: BTreeMap<&'static str, Entry>,
}

impl ActionCreatorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every creator exported by `source`.
    pub fn extend(
        mut self,
        source: &'static str,
        creators: &[(&'static str, ActionCreatorFn)],
    ) -> Result<Self> {
        for &(name, creator) in creators {
            if let Some(existing) = self.entries.get(name) {
                return Err(Error::DuplicateActionCreator {
                    name: name.to_string(),
                    first: existing.source.to_string(),
                    second: source.to_string(),
                });
            }
            self.entries.insert(name, Entry { source, creator });
        }
        Ok(self)
    }

    pub fn build(self) -> ActionCreators {
        ActionCreators {
            entries: self.entries,
        }
    }
}

/// Read-only map from creator name to creator.
#[derive(Clone)]
pub struct ActionCreators {
    entries: BTreeMap<&'static str, Entry>,
}

fn debug_entries(
    entries: &BTreeMap<&'static str, Entry>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    f.debug_map()
        .entries(entries.iter().map(|(name, e)| (name, e.source)))
        .finish()
}

impl fmt::Debug for ActionCreatorsBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_entries(&self.entries, f)
    }
}

impl fmt::Debug for ActionCreators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_entries(&self.entries, f)
    }
}

impl ActionCreators {
    pub fn builder() -> ActionCreatorsBuilder {
        ActionCreatorsBuilder::new()
    }

    /// Build the creator named `name` from `args`.
    pub fn invoke(&self, name: &str, args: &[String]) -> Result<Action> {
        let creator = self
            .get(name)
            .ok_or_else(|| Error::UnknownActionCreator(name.to_string()))?;
        creator(args)
    }

    pub fn get(&self, name: &str) -> Option<ActionCreatorFn> {
        self.entries.get(name).map(|e| e.creator)
    }

    /// The source module that contributed `name`.
    pub fn source_of(&self, name: &str) -> Option<&'static str> {
        self.entries.get(name).map(|e| e.source)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Creator names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The creators exposed to the rest of the application.
pub fn actions() -> Result<ActionCreators> {
    Ok(ActionCreators::builder()
        .extend(forms::SOURCE, forms::CREATORS)?
        .build())
}
