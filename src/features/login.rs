use crate::app::action::Action;
use crate::app::reducer::Reducer;
use crate::forms::{FormId, FormState};

pub const FIELDS: &[&str] = &["email", "password"];

/// Owns the `login` slice: the sign-in form.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginReducer;

impl Reducer<Action> for LoginReducer {
    type State = FormState;

    fn initial_state(&self) -> FormState {
        FormState::with_fields(FIELDS)
    }

    fn reduce(&self, state: &FormState, action: &Action) -> FormState {
        match action {
            Action::Form(form) if form.form() == FormId::Login => {
                state.apply(form, &self.initial_state())
            }
            _ => state.clone(),
        }
    }
}
