//! Form-manager action creators.
//!
//! The typed functions are what application code calls directly. The
//! [`CREATORS`] table exposes the same functions by name, taking string
//! arguments, for callers that only know an action by its creator name
//! (action scripts, the dispatch loop).

use super::{FormAction, FormId};
use crate::app::action::Action;
use crate::app::registry::ActionCreatorFn;
use crate::error::{Error, Result};

pub fn update_field(form: FormId, field: impl Into<String>, value: impl Into<String>) -> Action {
    Action::Form(FormAction::UpdateField {
        form,
        field: field.into(),
        value: value.into(),
    })
}

pub fn touch_field(form: FormId, field: impl Into<String>) -> Action {
    Action::Form(FormAction::TouchField {
        form,
        field: field.into(),
    })
}

pub fn set_field_error(
    form: FormId,
    field: impl Into<String>,
    message: impl Into<String>,
) -> Action {
    Action::Form(FormAction::SetFieldError {
        form,
        field: field.into(),
        message: message.into(),
    })
}

pub fn clear_errors(form: FormId) -> Action {
    Action::Form(FormAction::ClearErrors { form })
}

pub fn submit_form(form: FormId) -> Action {
    Action::Form(FormAction::Submit { form })
}

pub fn submit_succeeded(form: FormId, account: impl Into<String>) -> Action {
    Action::Form(FormAction::SubmitSucceeded {
        form,
        account: account.into(),
    })
}

pub fn submit_failed(form: FormId, message: impl Into<String>) -> Action {
    Action::Form(FormAction::SubmitFailed {
        form,
        message: message.into(),
    })
}

pub fn reset_form(form: FormId) -> Action {
    Action::Form(FormAction::Reset { form })
}

/// Name of this creator source, reported on name collisions.
pub const SOURCE: &str = "forms";

/// Every form-manager creator, keyed by its function name.
pub const CREATORS: &[(&str, ActionCreatorFn)] = &[
    ("update_field", invoke_update_field),
    ("touch_field", invoke_touch_field),
    ("set_field_error", invoke_set_field_error),
    ("clear_errors", invoke_clear_errors),
    ("submit_form", invoke_submit_form),
    ("submit_succeeded", invoke_submit_succeeded),
    ("submit_failed", invoke_submit_failed),
    ("reset_form", invoke_reset_form),
];

fn args<'a, const N: usize>(creator: &'static str, args: &'a [String]) -> Result<&'a [String; N]> {
    <&[String; N]>::try_from(args).map_err(|_| Error::Arity {
        creator,
        expected: N,
        got: args.len(),
    })
}

fn form(creator: &'static str, raw: &str) -> Result<FormId> {
    raw.parse::<FormId>()
        .map_err(|message| Error::InvalidArgument { creator, message })
}

fn invoke_update_field(raw: &[String]) -> Result<Action> {
    let [f, field, value] = args::<3>("update_field", raw)?;
    Ok(update_field(form("update_field", f)?, field, value))
}

fn invoke_touch_field(raw: &[String]) -> Result<Action> {
    let [f, field] = args::<2>("touch_field", raw)?;
    Ok(touch_field(form("touch_field", f)?, field))
}

fn invoke_set_field_error(raw: &[String]) -> Result<Action> {
    let [f, field, message] = args::<3>("set_field_error", raw)?;
    Ok(set_field_error(form("set_field_error", f)?, field, message))
}

fn invoke_clear_errors(raw: &[String]) -> Result<Action> {
    let [f] = args::<1>("clear_errors", raw)?;
    Ok(clear_errors(form("clear_errors", f)?))
}

fn invoke_submit_form(raw: &[String]) -> Result<Action> {
    let [f] = args::<1>("submit_form", raw)?;
    Ok(submit_form(form("submit_form", f)?))
}

fn invoke_submit_succeeded(raw: &[String]) -> Result<Action> {
    let [f, account] = args::<2>("submit_succeeded", raw)?;
    Ok(submit_succeeded(form("submit_succeeded", f)?, account))
}

fn invoke_submit_failed(raw: &[String]) -> Result<Action> {
    let [f, message] = args::<2>("submit_failed", raw)?;
    Ok(submit_failed(form("submit_failed", f)?, message))
}

fn invoke_reset_form(raw: &[String]) -> Result<Action> {
    let [f] = args::<1>("reset_form", raw)?;
    Ok(reset_form(form("reset_form", f)?))
}
