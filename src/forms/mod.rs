//! Shared form-manager actions.
//!
//! Every form in the application (login, register) is driven by the same
//! set of actions. Each action names the form it targets, so a feature
//! reducer can ignore actions meant for another form.

pub mod creators;
pub mod state;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use creators::*;
pub use state::{FormState, SubmitStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormId {
    Login,
    Register,
}

impl FormId {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormId::Login => "login",
            FormId::Register => "register",
        }
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "login" => Ok(FormId::Login),
            "register" => Ok(FormId::Register),
            other => Err(format!("unknown form `{}` (expected `login` or `register`)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    UpdateField { form: FormId, field: String, value: String },
    TouchField { form: FormId, field: String },
    SetFieldError { form: FormId, field: String, message: String },
    ClearErrors { form: FormId },
    Submit { form: FormId },
    SubmitSucceeded { form: FormId, account: String },
    SubmitFailed { form: FormId, message: String },
    Reset { form: FormId },
}

impl FormAction {
    /// The form this action targets.
    pub fn form(&self) -> FormId {
        match self {
            FormAction::UpdateField { form, .. }
            | FormAction::TouchField { form, .. }
            | FormAction::SetFieldError { form, .. }
            | FormAction::ClearErrors { form }
            | FormAction::Submit { form }
            | FormAction::SubmitSucceeded { form, .. }
            | FormAction::SubmitFailed { form, .. }
            | FormAction::Reset { form } => *form,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FormAction::UpdateField { .. } => "form/update_field",
            FormAction::TouchField { .. } => "form/touch_field",
            FormAction::SetFieldError { .. } => "form/set_field_error",
            FormAction::ClearErrors { .. } => "form/clear_errors",
            FormAction::Submit { .. } => "form/submit",
            FormAction::SubmitSucceeded { .. } => "form/submit_succeeded",
            FormAction::SubmitFailed { .. } => "form/submit_failed",
            FormAction::Reset { .. } => "form/reset",
        }
    }
}
