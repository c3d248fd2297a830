use log::error;
use std::io::{self, BufRead};

use super::flows::{
    handle_login, handle_register, login_form, register_form, Alert, LoginOutcome,
    RegisterOutcome, EMAIL, FIRST_NAME, LAST_NAME, MOBILE_NO, PASSWORD, REENTER_PASSWORD,
};
use super::store::{AccountRecord, AccountStore};
use crate::modules::catalog::user_interface::books_screen;
use crate::modules::catalog::ClickCounter;
use crate::modules::forms::FormState;
use crate::modules::storage::KeyValueStorage;
use crate::modules::utils::config::AppConfig;
use crate::modules::utils::io::{is_end_of_input, prompt, prompt_secret, read_line_from};

/// A form field as presented on the terminal
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub secret: bool, // Read without echo
}

const LOGIN_FIELDS: &[FormField] = &[
    FormField { name: EMAIL, label: "Email", secret: false },
    FormField { name: PASSWORD, label: "Password", secret: true },
];

const REGISTER_FIELDS: &[FormField] = &[
    FormField { name: FIRST_NAME, label: "First Name", secret: false },
    FormField { name: LAST_NAME, label: "Last Name", secret: false },
    FormField { name: MOBILE_NO, label: "Mobile No", secret: false },
    FormField { name: EMAIL, label: "Email", secret: false },
    FormField { name: PASSWORD, label: "Password", secret: true },
    FormField { name: REENTER_PASSWORD, label: "Re-enter Password", secret: true },
];

/// Where the welcome menu goes next
#[derive(Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Login,
    Register,
    Exit,
    Invalid,
}

pub fn parse_menu_choice(input: &str) -> MenuChoice {
    match input.trim().to_lowercase().as_str() {
        "1" | "login" => MenuChoice::Login,
        "2" | "register" => MenuChoice::Register,
        "3" | "exit" | "quit" => MenuChoice::Exit,
        _ => MenuChoice::Invalid,
    }
}

pub fn show_welcome_options() {
    println!("\n=== LEARNSMART ===");
    println!("Discover the world of knowledge in AI and IT.");
    println!("1. Login      (or type 'login')");
    println!("2. Register   (or type 'register')");
    println!("3. Exit       (or type 'exit')");
    println!("\nEnter your choice (1-3 or command):");
}

pub fn show_alert(alert: &Alert) {
    match &alert.message {
        Some(message) => println!("\n[{}] {}", alert.title, message),
        None => println!("\n[{}]", alert.title),
    }
}

/// Prompt for form fields. After a failed validation only the fields with errors are asked again.
///
/// Returns `false` when the user types 'back' in a visible field.
fn fill_fields(form: &mut FormState, fields: &[FormField]) -> io::Result<bool> {
    let retry_errors_only = !form.errors().is_empty();

    for field in fields {
        if retry_errors_only && form.error(field.name).is_none() {
            continue;
        }
        if let Some(message) = form.error(field.name) {
            println!("  ! {}", message);
        }

        let value = if field.secret {
            prompt_secret(field.label)?
        } else {
            let value = prompt(field.label)?;
            if value.eq_ignore_ascii_case("back") {
                return Ok(false);
            }
            value
        };

        form.handle_change(field.name, value);
    }

    Ok(true)
}

/// Login screen. Returns the matched account, or `None` if the user went back.
pub fn login_screen<S: KeyValueStorage>(
    store: &AccountStore<S>,
) -> io::Result<Option<AccountRecord>> {
    println!("\n=== Welcome Back ===");
    println!("Please login to continue (type 'back' to return to menu)");

    let mut form = login_form();
    loop {
        if !fill_fields(&mut form, LOGIN_FIELDS)? {
            return Ok(None);
        }

        let outcome = handle_login(&mut form, store);
        if let Some(alert) = outcome.alert() {
            show_alert(&alert);
        }

        if let LoginOutcome::Success(account) = outcome {
            return Ok(Some(account));
        }
    }
}

/// Registration screen. Returns `true` once an account has been saved.
pub fn register_screen<S: KeyValueStorage>(store: &AccountStore<S>) -> io::Result<bool> {
    println!("\n=== Create an Account ===");
    println!("Fill in your details (type 'back' to return to menu)");

    let mut form = register_form();
    loop {
        if !fill_fields(&mut form, REGISTER_FIELDS)? {
            return Ok(false);
        }

        let outcome = handle_register(&mut form, store);
        if let Some(alert) = outcome.alert() {
            show_alert(&alert);
        }

        match outcome {
            RegisterOutcome::Registered(_) => return Ok(true),
            RegisterOutcome::Error => return Ok(false),
            RegisterOutcome::Invalid | RegisterOutcome::PasswordMismatch => continue,
        }
    }
}

/// Print every stored account without its password
pub fn list_accounts<S: KeyValueStorage>(store: &AccountStore<S>) {
    match store.load() {
        Ok(accounts) if accounts.is_empty() => println!("No registered accounts."),
        Ok(accounts) => {
            for (index, account) in accounts.iter().enumerate() {
                println!(
                    "{}. {} {} <{}> mobile: {}",
                    index + 1,
                    account.first_name,
                    account.last_name,
                    account.email,
                    account.mobile_no
                );
            }
        }
        Err(e) => {
            error!("Failed to list accounts: {}", e);
            println!("Something went wrong while reading accounts.");
        }
    }
}

/// Read the next menu choice. Closed input counts as a request to exit.
pub fn read_menu_choice<R: BufRead>(reader: &mut R) -> io::Result<MenuChoice> {
    match read_line_from(reader) {
        Ok(input) => Ok(parse_menu_choice(&input)),
        Err(e) if is_end_of_input(&e) => Ok(MenuChoice::Exit),
        Err(e) => Err(e),
    }
}

/// Welcome menu loop: login or register, then the book list
pub fn main_menu<S: KeyValueStorage>(
    store: &AccountStore<S>,
    config: &AppConfig,
    counter: &mut ClickCounter,
) -> io::Result<()> {
    loop {
        show_welcome_options();

        // Bind first so the stdin lock is released before any screen reads again
        let choice = read_menu_choice(&mut io::stdin().lock())?;

        match choice {
            MenuChoice::Login => {
                if login_screen(store)?.is_some() {
                    books_screen(config, counter)?;
                }
            }
            MenuChoice::Register => {
                // A successful registration continues to the login screen
                if register_screen(store)? && login_screen(store)?.is_some() {
                    books_screen(config, counter)?;
                }
            }
            MenuChoice::Exit => {
                println!("Goodbye!");
                return Ok(());
            }
            MenuChoice::Invalid => {
                println!("Invalid choice. Please enter 1-3 or login/register/exit.");
            }
        }
    }
}
