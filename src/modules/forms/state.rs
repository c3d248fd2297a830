use super::rules::RuleSet;
use super::validator::{validate, ErrorMap, FieldValues};

/// Values and errors for one form on screen
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: FieldValues,
    errors: ErrorMap,
}

impl FormState {
    /// Create a form seeded with initial field values
    pub fn new(initial: &[(&str, &str)]) -> Self {
        Self {
            values: initial
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            errors: ErrorMap::new(),
        }
    }

    /// Record an edit to one field and drop any error currently shown for it
    pub fn handle_change(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
        self.errors.remove(name);
    }

    /// Run the rules over the current values, replacing all stored errors
    pub fn validate(&mut self, rules: &RuleSet) -> bool {
        let outcome = validate(&self.values, rules);
        self.errors = outcome.errors;
        outcome.is_valid
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }
}
