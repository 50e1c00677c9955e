use crate::app::action::Action;
use crate::app::reducer::Reducer;
use crate::forms::{FormId, FormState};

pub const FIELDS: &[&str] = &["username", "email", "password", "confirm_password"];

/// Owns the `register` slice: the sign-up form.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegisterReducer;

impl Reducer<Action> for RegisterReducer {
    type State = FormState;

    fn initial_state(&self) -> FormState {
        FormState::with_fields(FIELDS)
    }

    fn reduce(&self, state: &FormState, action: &Action) -> FormState {
        match action {
            Action::Form(form) if form.form() == FormId::Register => {
                state.apply(form, &self.initial_state())
            }
            _ => state.clone(),
        }
    }
}
