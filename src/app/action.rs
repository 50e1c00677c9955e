use crate::forms::FormAction;

/// Everything that can be dispatched to the root reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Dispatched once by the store to build the initial state. No reducer
    /// recognizes it.
    Init,
    Form(FormAction),
}

impl Action {
    /// Discriminating tag, used for logging and dispatch history.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Init => "@@init",
            Action::Form(form) => form.kind(),
        }
    }
}

impl From<FormAction> for Action {
    fn from(action: FormAction) -> Self {
        Action::Form(action)
    }
}
