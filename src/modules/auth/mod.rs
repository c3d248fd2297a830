pub mod flows;
pub mod store;
pub mod user_interface;

// Re-export the main types and functions
pub use flows::{
    handle_login, handle_register, login_rules, register_rules, Alert, LoginOutcome,
    RegisterOutcome,
};
pub use store::{AccountRecord, AccountStore};
