use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

use super::rules::RuleSet;

/// Current value of every form field, keyed by field name
pub type FieldValues = HashMap<String, String>;

/// Human-readable message per failing field
pub type ErrorMap = HashMap<String, String>;

/// Characters that are not whitespace in the web-form sense, where U+FEFF counts
/// as whitespace and U+0085 does not. Regex `\S` disagrees on both.
const NON_SPACE: &str = r"[^\t\n\x0B\x0C\r \x{00A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(&format!(r"^{0}+@{0}+\.{0}+$", NON_SPACE)).unwrap();
    static ref NUMERIC_PATTERN: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// Result of validating a set of field values against a rule set
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: ErrorMap,
}

/// Validate field values against a rule set.
///
/// Checks run per field in the order required, min length, email, numeric,
/// match. Every failing check overwrites the field's message, so the last
/// failure is the one reported. Absent values read as empty strings, except
/// for the min length check which skips them entirely. Lengths are counted in
/// UTF-16 code units.
pub fn validate(values: &FieldValues, rules: &RuleSet) -> ValidationOutcome {
    let mut is_valid = true;
    let mut errors = ErrorMap::new();

    for (field, rule) in rules.iter() {
        let present = values.get(field).map(String::as_str);
        let value = present.unwrap_or("");

        if rule.required && value.is_empty() {
            is_valid = false;
            errors.insert(field.to_string(), format!("{} is required", capitalize(field)));
        }

        if let (Some(min_length), Some(present)) = (rule.min_length, present) {
            if present.encode_utf16().count() < min_length {
                is_valid = false;
                errors.insert(
                    field.to_string(),
                    format!(
                        "{} must be at least {} characters",
                        capitalize(field),
                        min_length
                    ),
                );
            }
        }

        if rule.email && !value.is_empty() && !EMAIL_PATTERN.is_match(value) {
            is_valid = false;
            errors.insert(field.to_string(), "Invalid email format".to_string());
        }

        if rule.numeric && !value.is_empty() && !NUMERIC_PATTERN.is_match(value) {
            is_valid = false;
            errors.insert(field.to_string(), format!("{} must be numeric", capitalize(field)));
        }

        if let Some(other) = &rule.match_field {
            let other_value = values.get(other).map(String::as_str).unwrap_or("");
            if value != other_value {
                is_valid = false;
                errors.insert(
                    field.to_string(),
                    format!("{} does not match {}", capitalize(field), other),
                );
            }
        }
    }

    ValidationOutcome { is_valid, errors }
}

/// Upper-case the first character of a field name, leaving the rest untouched
fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::forms::rules::FieldRule;

    fn values(pairs: &[(&str, &str)]) -> FieldValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("email"), "Email");
        assert_eq!(capitalize("reenterPassword"), "ReenterPassword");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_required() {
        let rules = RuleSet::new().field("firstName", FieldRule::new().required());

        let outcome = validate(&values(&[("firstName", "")]), &rules);
        assert!(!outcome.is_valid);
        assert_eq!(outcome.errors["firstName"], "FirstName is required");

        // Absent counts as empty
        let outcome = validate(&values(&[]), &rules);
        assert!(!outcome.is_valid);

        let outcome = validate(&values(&[("firstName", "Ada")]), &rules);
        assert!(outcome.is_valid);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_min_length() {
        let rules = RuleSet::new().field("password", FieldRule::new().min_length(6));

        let outcome = validate(&values(&[("password", "abc")]), &rules);
        assert!(!outcome.is_valid);
        assert_eq!(
            outcome.errors["password"],
            "Password must be at least 6 characters"
        );

        // A present empty string is still measured
        let outcome = validate(&values(&[("password", "")]), &rules);
        assert!(!outcome.is_valid);

        assert!(validate(&values(&[("password", "abcdef")]), &rules).is_valid);
    }

    #[test]
    fn test_min_length_counts_utf16_units() {
        let rules = RuleSet::new().field("password", FieldRule::new().required().min_length(6));

        // Each emoji is two UTF-16 units, so three of them reach the threshold
        let outcome = validate(&values(&[("password", "😀😀😀")]), &rules);
        assert!(outcome.is_valid);
        assert!(outcome.errors.is_empty());

        assert!(!validate(&values(&[("password", "😀😀a")]), &rules).is_valid);
        assert!(validate(&values(&[("password", "éééééé")]), &rules).is_valid);
    }

    #[test]
    fn test_email_whitespace_class() {
        let rules = RuleSet::new().field("email", FieldRule::new().email());

        // NEL is an ordinary character here, the byte order mark is whitespace
        assert!(validate(&values(&[("email", "a\u{85}b@c.de")]), &rules).is_valid);
        assert!(!validate(&values(&[("email", "a\u{FEFF}b@c.de")]), &rules).is_valid);
        assert!(!validate(&values(&[("email", "a\u{3000}b@c.de")]), &rules).is_valid);
        assert!(!validate(&values(&[("email", "ab@c.d\te")]), &rules).is_valid);
    }

    #[test]
    fn test_min_length_skips_absent_value() {
        let rules = RuleSet::new().field("password", FieldRule::new().min_length(6));

        let outcome = validate(&values(&[]), &rules);
        assert!(outcome.is_valid);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_email_format() {
        let rules = RuleSet::new().field("email", FieldRule::new().email());

        assert!(validate(&values(&[("email", "user@example.com")]), &rules).is_valid);
        assert!(validate(&values(&[("email", "user.name@example.co.uk")]), &rules).is_valid);

        let outcome = validate(&values(&[("email", "user@example")]), &rules);
        assert!(!outcome.is_valid);
        assert_eq!(outcome.errors["email"], "Invalid email format");

        assert!(!validate(&values(&[("email", "user example.com")]), &rules).is_valid);
        assert!(!validate(&values(&[("email", "user")]), &rules).is_valid);

        // Empty values are left to the required check
        assert!(validate(&values(&[("email", "")]), &rules).is_valid);
    }

    #[test]
    fn test_numeric() {
        let rules = RuleSet::new().field("mobileNo", FieldRule::new().numeric());

        let outcome = validate(&values(&[("mobileNo", "12a3")]), &rules);
        assert!(!outcome.is_valid);
        assert_eq!(outcome.errors["mobileNo"], "MobileNo must be numeric");

        assert!(validate(&values(&[("mobileNo", "1234")]), &rules).is_valid);
        assert!(!validate(&values(&[("mobileNo", "-12")]), &rules).is_valid);
    }

    #[test]
    fn test_match() {
        let rules = RuleSet::new().field("confirm", FieldRule::new().matches("password"));

        let outcome = validate(&values(&[("password", "a"), ("confirm", "b")]), &rules);
        assert!(!outcome.is_valid);
        assert_eq!(outcome.errors["confirm"], "Confirm does not match password");

        assert!(validate(&values(&[("password", "a"), ("confirm", "a")]), &rules).is_valid);

        // Two empty values are equal
        assert!(validate(&values(&[("password", ""), ("confirm", "")]), &rules).is_valid);
        assert!(validate(&values(&[]), &rules).is_valid);
    }

    #[test]
    fn test_last_failing_rule_wins() {
        let rules = RuleSet::new().field(
            "reenterPassword",
            FieldRule::new().required().matches("password"),
        );

        let outcome = validate(
            &values(&[("password", "secret1"), ("reenterPassword", "")]),
            &rules,
        );
        assert!(!outcome.is_valid);
        assert_eq!(
            outcome.errors["reenterPassword"],
            "ReenterPassword does not match password"
        );

        let rules = RuleSet::new().field("password", FieldRule::new().required().min_length(6));
        let outcome = validate(&values(&[("password", "")]), &rules);
        assert_eq!(
            outcome.errors["password"],
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn test_unlisted_fields_are_ignored() {
        let rules = RuleSet::new().field("email", FieldRule::new().required());
        let outcome = validate(
            &values(&[("email", "a@b.com"), ("mobileNo", "not-a-number")]),
            &rules,
        );
        assert!(outcome.is_valid);
        assert!(!outcome.errors.contains_key("mobileNo"));
    }

    #[test]
    fn test_invalid_if_any_field_fails() {
        let rules = RuleSet::new()
            .field("firstName", FieldRule::new().required())
            .field("mobileNo", FieldRule::new().required().numeric())
            .field("email", FieldRule::new().required().email());

        let outcome = validate(
            &values(&[("firstName", "Ada"), ("mobileNo", "555x"), ("email", "a@b.com")]),
            &rules,
        );
        assert!(!outcome.is_valid);
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors.contains_key("mobileNo"));
    }
}
