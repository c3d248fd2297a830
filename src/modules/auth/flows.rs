use log::error;

use super::store::{AccountRecord, AccountStore};
use crate::modules::forms::{FieldRule, FormState, RuleSet};
use crate::modules::storage::KeyValueStorage;
use crate::modules::utils::logging::{log_auth_event, log_data_operation};
use crate::USERS_KEY;

pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const MOBILE_NO: &str = "mobileNo";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const REENTER_PASSWORD: &str = "reenterPassword";

/// Message shown to the user once a flow finishes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: Option<String>,
}

impl Alert {
    fn new(title: &str, message: Option<String>) -> Self {
        Self {
            title: title.to_string(),
            message,
        }
    }
}

/// Result of submitting the login form
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Invalid,                // Field errors are on the form
    Success(AccountRecord), // Credentials matched a stored account
    Failed,                 // No account with these credentials
    Error,                  // Storage failed; cause already logged
}

impl LoginOutcome {
    pub fn alert(&self) -> Option<Alert> {
        match self {
            LoginOutcome::Invalid => None,
            LoginOutcome::Success(account) => Some(Alert::new(
                "Login Successful",
                Some(format!("Welcome {}", account.first_name)),
            )),
            LoginOutcome::Failed => Some(Alert::new(
                "Login Failed",
                Some("Invalid email or password".to_string()),
            )),
            LoginOutcome::Error => Some(Alert::new(
                "Error",
                Some("Something went wrong during login".to_string()),
            )),
        }
    }
}

/// Result of submitting the registration form
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterOutcome {
    Invalid,
    PasswordMismatch,
    Registered(AccountRecord),
    Error,
}

impl RegisterOutcome {
    pub fn alert(&self) -> Option<Alert> {
        match self {
            RegisterOutcome::Invalid => None,
            RegisterOutcome::PasswordMismatch => Some(Alert::new(
                "Error",
                Some("Passwords do not match".to_string()),
            )),
            RegisterOutcome::Registered(_) => Some(Alert::new("Registration Successful", None)),
            RegisterOutcome::Error => Some(Alert::new(
                "Error",
                Some("Failed to save user".to_string()),
            )),
        }
    }
}

pub fn login_form() -> FormState {
    FormState::new(&[(EMAIL, ""), (PASSWORD, "")])
}

pub fn register_form() -> FormState {
    FormState::new(&[
        (FIRST_NAME, ""),
        (LAST_NAME, ""),
        (MOBILE_NO, ""),
        (EMAIL, ""),
        (PASSWORD, ""),
        (REENTER_PASSWORD, ""),
    ])
}

pub fn login_rules() -> RuleSet {
    RuleSet::new()
        .field(EMAIL, FieldRule::new().required().email())
        .field(PASSWORD, FieldRule::new().required())
}

pub fn register_rules() -> RuleSet {
    RuleSet::new()
        .field(FIRST_NAME, FieldRule::new().required())
        .field(LAST_NAME, FieldRule::new().required())
        .field(MOBILE_NO, FieldRule::new().required().numeric())
        .field(EMAIL, FieldRule::new().required().email())
        .field(PASSWORD, FieldRule::new().required().min_length(6))
        .field(REENTER_PASSWORD, FieldRule::new().required().matches(PASSWORD))
}

/// Validate the login form and look the credentials up in the store
pub fn handle_login<S: KeyValueStorage>(
    form: &mut FormState,
    store: &AccountStore<S>,
) -> LoginOutcome {
    if !form.validate(&login_rules()) {
        return LoginOutcome::Invalid;
    }

    let email = form.value(EMAIL);
    match store.find_match(email, form.value(PASSWORD)) {
        Ok(Some(account)) => {
            log_auth_event("login", email, true, None);
            LoginOutcome::Success(account)
        }
        Ok(None) => {
            log_auth_event("login", email, false, Some("invalid credentials"));
            LoginOutcome::Failed
        }
        Err(e) => {
            error!("Login lookup failed: {}", e);
            log_auth_event("login", email, false, Some("storage error"));
            LoginOutcome::Error
        }
    }
}

/// Validate the registration form and append the new account to the store
pub fn handle_register<S: KeyValueStorage>(
    form: &mut FormState,
    store: &AccountStore<S>,
) -> RegisterOutcome {
    if !form.validate(&register_rules()) {
        return RegisterOutcome::Invalid;
    }

    // Already covered by the match rule, kept as a second guard before saving
    if form.value(PASSWORD) != form.value(REENTER_PASSWORD) {
        return RegisterOutcome::PasswordMismatch;
    }

    let account = AccountRecord {
        first_name: form.value(FIRST_NAME).to_string(),
        last_name: form.value(LAST_NAME).to_string(),
        mobile_no: form.value(MOBILE_NO).to_string(),
        email: form.value(EMAIL).to_string(),
        password: form.value(PASSWORD).to_string(),
        ..AccountRecord::default()
    };

    match store.append(account.clone()) {
        Ok(()) => {
            log_data_operation("create_user", &account.email, USERS_KEY, true, None);
            RegisterOutcome::Registered(account)
        }
        Err(e) => {
            log_data_operation(
                "create_user",
                &account.email,
                USERS_KEY,
                false,
                Some(&format!("failed to save user: {}", e)),
            );
            RegisterOutcome::Error
        }
    }
}
