use crate::app::action::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// An action built by the sender
    Dispatch(Action),

    /// Build an action through a named action creator, then dispatch it
    Invoke { creator: String, args: Vec<String> },

    /// Stop the dispatch loop
    Shutdown,
}

impl From<Action> for AppEvent {
    fn from(action: Action) -> Self {
        AppEvent::Dispatch(action)
    }
}
