use crate::features::auth::types::*;
use crate::services::config::MIN_PASSWORD_LEN;
use crate::utils::{char_len, is_blank, is_valid_email};

pub const INVALID_EMAIL: &str = "Enter a valid email.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";
pub const FIRST_NAME_REQUIRED: &str = "Please enter your First name.";
pub const LAST_NAME_REQUIRED: &str = "Please enter your Last name.";
pub const ORGANISATION_REQUIRED: &str = "Please enter your Organisation name.";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match.";

/// Checks the credentials for the given mode.
///
/// Returns the first problem found, or an empty string when the form can be
/// submitted. In register mode a password/confirmation mismatch is reported
/// before anything else.
pub fn validate(mode: AuthMode, credentials: &Credentials) -> String {
    validation_error(mode, credentials)
        .map(str::to_string)
        .unwrap_or_default()
}

/// What a press of the submit button should lead to
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitCheck {
    /// A request is already in flight; the press is ignored
    Busy,
    /// Show this message and make no network call
    Invalid(String),
    Ready,
}

pub fn check_submit(state: &LoginState) -> SubmitCheck {
    if state.is_loading {
        return SubmitCheck::Busy;
    }
    match validation_error(state.mode, &state.credentials) {
        Some(problem) => SubmitCheck::Invalid(problem.to_string()),
        None => SubmitCheck::Ready,
    }
}

fn validation_error(mode: AuthMode, credentials: &Credentials) -> Option<&'static str> {
    if mode.is_register() && credentials.confirm != credentials.password {
        return Some(PASSWORDS_DO_NOT_MATCH);
    }

    if !is_valid_email(&credentials.email) {
        return Some(INVALID_EMAIL);
    }

    if char_len(&credentials.password) < MIN_PASSWORD_LEN {
        return Some(PASSWORD_TOO_SHORT);
    }

    if mode.is_register() {
        if is_blank(&credentials.first_name) {
            return Some(FIRST_NAME_REQUIRED);
        }
        if is_blank(&credentials.last_name) {
            return Some(LAST_NAME_REQUIRED);
        }
        if is_blank(&credentials.organisation) {
            return Some(ORGANISATION_REQUIRED);
        }
    }

    None
}
