//! The `header` slice: who is signed in, plus a one-off notice banner.

use crate::app::action::Action;
use crate::app::reducer::Reducer;
use crate::forms::{FormAction, FormId};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderState {
    pub account: Option<String>,
    pub notice: Option<String>,
}

impl HeaderState {
    pub fn is_signed_in(&self) -> bool {
        self.account.is_some()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderReducer;

impl Reducer<Action> for HeaderReducer {
    type State = HeaderState;

    fn initial_state(&self) -> HeaderState {
        HeaderState::default()
    }

    fn reduce(&self, state: &HeaderState, action: &Action) -> HeaderState {
        let Action::Form(action) = action else {
            return state.clone();
        };
        match action {
            FormAction::SubmitSucceeded { form, account } => HeaderState {
                account: Some(account.clone()),
                notice: match form {
                    FormId::Register => Some(format!("Welcome, {}!", account)),
                    FormId::Login => state.notice.clone(),
                },
            },
            // Resetting the login form signs the user out
            FormAction::Reset {
                form: FormId::Login,
            } => HeaderState {
                account: None,
                notice: None,
            },
            _ => state.clone(),
        }
    }
}
