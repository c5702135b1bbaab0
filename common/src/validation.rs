use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Loose shape check only; the API stays the authority on addresses.
    pub static ref EMAIL_PATTERN: Regex = Regex::new(r"\S+@\S+\.\S+").unwrap();
}

/// Fallback message for fields that only need to be present.
pub const REQUIRED_FIELD: &str = "Este campo es obligatorio";

/// Declarative checks for one form field. Checks run in a fixed order and the
/// first failure wins: required, then pattern, then minimum length. Pattern
/// and length are skipped when an optional field is left empty.
#[derive(Debug, Clone, Default)]
pub struct ValidationRule {
    pub required: Option<&'static str>,
    pub pattern: Option<(&'static Regex, &'static str)>,
    pub min_length: Option<(usize, &'static str)>,
}

impl ValidationRule {
    pub fn required(message: &'static str) -> Self {
        Self {
            required: Some(message),
            ..Self::default()
        }
    }

    pub fn with_pattern(mut self, pattern: &'static Regex, message: &'static str) -> Self {
        self.pattern = Some((pattern, message));
        self
    }

    pub fn with_min_length(mut self, min: usize, message: &'static str) -> Self {
        self.min_length = Some((min, message));
        self
    }
}

pub fn validate_value(value: &str, rule: &ValidationRule) -> Option<&'static str> {
    let trimmed = value.trim();
    if let Some(message) = rule.required {
        if trimmed.is_empty() {
            return Some(message);
        }
    }
    if trimmed.is_empty() {
        return None;
    }
    if let Some((pattern, message)) = rule.pattern {
        if !pattern.is_match(value) {
            return Some(message);
        }
    }
    if let Some((min, message)) = rule.min_length {
        if value.chars().count() < min {
            return Some(message);
        }
    }
    None
}

/// Validate several fields at once; returns field name → first error.
pub fn validate_fields<'a>(
    fields: &[(&'a str, &str, &ValidationRule)],
) -> HashMap<&'a str, &'static str> {
    let mut errors = HashMap::new();
    for (name, value, rule) in fields {
        if let Some(message) = validate_value(value, rule) {
            errors.insert(*name, message);
        }
    }
    errors
}

/// Rules for the client registration form, keyed by wire field name.
/// `middle_name` is optional and carries no rule.
pub fn register_rules() -> HashMap<&'static str, ValidationRule> {
    let mut rules = HashMap::new();
    rules.insert(
        "first_name",
        ValidationRule::required("El nombre es obligatorio"),
    );
    rules.insert(
        "last_name",
        ValidationRule::required("El apellido paterno es obligatorio"),
    );
    rules.insert(
        "birth_date",
        ValidationRule::required("La fecha de nacimiento es obligatoria"),
    );
    rules.insert(
        "email",
        ValidationRule::required("El correo electrónico es obligatorio")
            .with_pattern(&EMAIL_PATTERN, "Formato de correo electrónico inválido"),
    );
    rules.insert(
        "password",
        ValidationRule::required("La contraseña es obligatoria")
            .with_min_length(6, "La contraseña debe tener al menos 6 caracteres"),
    );
    rules.insert("phone", ValidationRule::required(REQUIRED_FIELD));
    rules.insert(
        "address",
        ValidationRule::required("La dirección es obligatoria"),
    );
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_wins_first() {
        let rule = ValidationRule::required("falta")
            .with_pattern(&EMAIL_PATTERN, "formato")
            .with_min_length(6, "corto");
        assert_eq!(validate_value("", &rule), Some("falta"));
        assert_eq!(validate_value("   ", &rule), Some("falta"));
    }

    #[test]
    fn test_pattern_then_min_length() {
        let rule = ValidationRule::required("falta")
            .with_pattern(&EMAIL_PATTERN, "formato")
            .with_min_length(10, "corto");
        assert_eq!(validate_value("no-email", &rule), Some("formato"));
        assert_eq!(validate_value("a@b.c", &rule), Some("corto"));
        assert_eq!(validate_value("largo@correo.com", &rule), None);
    }

    #[test]
    fn optional_empty_field_passes() {
        let rule = ValidationRule::default().with_min_length(6, "corto");
        assert_eq!(validate_value("", &rule), None);
        assert_eq!(validate_value("abc", &rule), Some("corto"));
    }

    #[test]
    fn test_email_pattern() {
        assert!(EMAIL_PATTERN.is_match("ana@ejemplo.com"));
        assert!(EMAIL_PATTERN.is_match("a@b.co"));
        assert!(!EMAIL_PATTERN.is_match("ana@ejemplo"));
        assert!(!EMAIL_PATTERN.is_match("ejemplo.com"));
    }

    #[test]
    fn test_register_rules_cover_the_form() {
        let rules = register_rules();
        let errors = validate_fields(&[
            ("first_name", "", rules.get("first_name").unwrap()),
            ("email", "correo-roto", rules.get("email").unwrap()),
            ("password", "123", rules.get("password").unwrap()),
            ("address", "Calle 1", rules.get("address").unwrap()),
        ]);
        assert_eq!(errors.get("first_name"), Some(&"El nombre es obligatorio"));
        assert_eq!(
            errors.get("email"),
            Some(&"Formato de correo electrónico inválido")
        );
        assert_eq!(
            errors.get("password"),
            Some(&"La contraseña debe tener al menos 6 caracteres")
        );
        assert!(!errors.contains_key("address"));
        assert!(!rules.contains_key("middle_name"));
    }
}
