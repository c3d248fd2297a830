/// Declarative constraints attached to a single form field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub email: bool,
    pub numeric: bool,
    pub match_field: Option<String>, // Name of the field this one must equal
}

impl FieldRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }

    /// Require the value to equal the value of another named field
    pub fn matches(mut self, field: &str) -> Self {
        self.match_field = Some(field.to_string());
        self
    }
}

/// Ordered mapping from field name to its rule.
///
/// Iteration follows insertion order. Re-declaring a field replaces its rule
/// but keeps the original position.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<(String, FieldRule)>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the rule for a field
    pub fn field(mut self, name: &str, rule: FieldRule) -> Self {
        match self.rules.iter_mut().find(|(existing, _)| existing == name) {
            Some(entry) => entry.1 = rule,
            None => self.rules.push((name.to_string(), rule)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldRule> {
        self.rules
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, rule)| rule)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_builder() {
        let rule = FieldRule::new().required().min_length(6).matches("password");

        assert!(rule.required);
        assert_eq!(rule.min_length, Some(6));
        assert_eq!(rule.match_field.as_deref(), Some("password"));
        assert!(!rule.email);
        assert!(!rule.numeric);
    }

    #[test]
    fn test_rule_set_keeps_insertion_order() {
        let rules = RuleSet::new()
            .field("mobileNo", FieldRule::new().numeric())
            .field("email", FieldRule::new().email())
            .field("firstName", FieldRule::new().required());

        let names: Vec<&str> = rules.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["mobileNo", "email", "firstName"]);
    }

    #[test]
    fn test_redeclared_field_keeps_position() {
        let rules = RuleSet::new()
            .field("email", FieldRule::new().required())
            .field("password", FieldRule::new().required())
            .field("email", FieldRule::new().email());

        assert_eq!(rules.len(), 2);
        let names: Vec<&str> = rules.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["email", "password"]);

        // The later declaration wins
        let email_rule = rules.get("email").unwrap();
        assert!(email_rule.email);
        assert!(!email_rule.required);
    }
}
