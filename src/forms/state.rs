//! Form state shared by every form-backed slice.

use super::FormAction;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub fields: BTreeMap<String, String>,
    pub touched: BTreeSet<String>,
    pub errors: BTreeMap<String, String>,
    pub status: SubmitStatus,
}

impl FormState {
    /// A pristine form with the given fields, all empty.
    pub fn with_fields(names: &[&str]) -> Self {
        Self {
            fields: names.iter().map(|n| (n.to_string(), String::new())).collect(),
            touched: BTreeSet::new(),
            errors: BTreeMap::new(),
            status: SubmitStatus::Idle,
        }
    }

    pub fn value(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Compute the next form state for `action`.
    ///
    /// The caller decides whether the action targets this form; `initial`
    /// is the value a reset returns to. Field actions naming a field the
    /// form does not declare are ignored. Returns a clone of `self` when
    /// the action changes nothing.
    pub fn apply(&self, action: &FormAction, initial: &FormState) -> FormState {
        let mut next = self.clone();
        match action {
            FormAction::UpdateField { field, .. }
            | FormAction::TouchField { field, .. }
            | FormAction::SetFieldError { field, .. }
                if !self.fields.contains_key(field) => {}
            FormAction::UpdateField { field, value, .. } => {
                next.fields.insert(field.clone(), value.clone());
                next.errors.remove(field);
            }
            FormAction::TouchField { field, .. } => {
                next.touched.insert(field.clone());
            }
            FormAction::SetFieldError { field, message, .. } => {
                next.errors.insert(field.clone(), message.clone());
            }
            FormAction::ClearErrors { .. } => {
                next.errors.clear();
            }
            FormAction::Submit { .. } => {
                // Every field counts as touched once the user submits
                next.touched.extend(next.fields.keys().cloned());
                next.status = SubmitStatus::Submitting;
            }
            FormAction::SubmitSucceeded { .. } => {
                next.status = SubmitStatus::Succeeded;
                next.errors.clear();
            }
            FormAction::SubmitFailed { message, .. } => {
                next.status = SubmitStatus::Failed(message.clone());
            }
            FormAction::Reset { .. } => return initial.clone(),
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormId;

    fn login() -> FormState {
        FormState::with_fields(&["email", "password"])
    }

    #[test]
    fn test_update_clears_field_error() {
        let initial = login();
        let state = initial.apply(
            &FormAction::SetFieldError {
                form: FormId::Login,
                field: "email".into(),
                message: "required".into(),
            },
            &initial,
        );
        assert!(state.has_errors());

        let state = state.apply(
            &FormAction::UpdateField {
                form: FormId::Login,
                field: "email".into(),
                value: "ada@example.com".into(),
            },
            &initial,
        );
        assert!(!state.has_errors());
        assert_eq!(state.value("email"), Some("ada@example.com"));
    }

    #[test]
    fn test_submit_touches_all_fields() {
        let initial = login();
        let state = initial.apply(&FormAction::Submit { form: FormId::Login }, &initial);
        assert_eq!(state.status, SubmitStatus::Submitting);
        assert!(state.touched.contains("email"));
        assert!(state.touched.contains("password"));
    }

    #[test]
    fn test_failure_then_reset() {
        let initial = login();
        let state = initial
            .apply(&FormAction::Submit { form: FormId::Login }, &initial)
            .apply(
                &FormAction::SubmitFailed {
                    form: FormId::Login,
                    message: "bad credentials".into(),
                },
                &initial,
            );
        assert_eq!(state.status, SubmitStatus::Failed("bad credentials".into()));

        let state = state.apply(&FormAction::Reset { form: FormId::Login }, &initial);
        assert_eq!(state, initial);
    }

    #[test]
    fn test_undeclared_fields_are_ignored() {
        let initial = login();
        let state = [
            FormAction::UpdateField {
                form: FormId::Login,
                field: "emial".into(),
                value: "x".into(),
            },
            FormAction::TouchField {
                form: FormId::Login,
                field: "emial".into(),
            },
            FormAction::SetFieldError {
                form: FormId::Login,
                field: "emial".into(),
                message: "required".into(),
            },
        ]
        .iter()
        .fold(initial.clone(), |state, action| state.apply(action, &initial));
        assert_eq!(state, initial);

        let state = state.apply(&FormAction::Submit { form: FormId::Login }, &initial);
        let fields: Vec<_> = state.fields.keys().map(String::as_str).collect();
        assert_eq!(fields, vec!["email", "password"]);
        assert!(!state.touched.contains("emial"));
    }

    #[test]
    fn test_touching_twice_is_stable() {
        let initial = login();
        let touch = FormAction::TouchField {
            form: FormId::Login,
            field: "email".into(),
        };
        let once = initial.apply(&touch, &initial);
        let twice = once.apply(&touch, &initial);
        assert_eq!(once, twice);
    }
}
