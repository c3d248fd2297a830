pub mod rules;
pub mod state;
pub mod validator;

// Re-export the main types and functions
pub use rules::{FieldRule, RuleSet};
pub use state::FormState;
pub use validator::{validate, ErrorMap, FieldValues, ValidationOutcome};
