//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Every check appends a full, user-facing sentence to an error list so a
//! single response can report all failed fields at once.

use shared::models::{ColorSchemeColor, UserField, is_valid_hex};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: color scheme, user field
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: color names, dropdown options
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Descriptions shown next to a field
pub const MAX_DESCRIPTION_LEN: usize = 1000;

// ── Generic helpers ─────────────────────────────────────────────────

/// Required string must be non-blank and within the length limit.
pub fn check_required_text(errors: &mut Vec<String>, value: &str, label: &str, max_len: usize) {
    if value.trim().is_empty() {
        errors.push(format!("{label} can't be blank"));
    } else {
        check_text_len(errors, value, label, max_len);
    }
}

/// String, if any, must be within the length limit.
pub fn check_text_len(errors: &mut Vec<String>, value: &str, label: &str, max_len: usize) {
    let len = value.chars().count();
    if len > max_len {
        errors.push(format!(
            "{label} is too long (maximum is {max_len} characters)"
        ));
    }
}

// ── Resource validation ─────────────────────────────────────────────

/// Validate a color scheme as it would be stored
pub fn validate_color_scheme(name: &str, colors: &[ColorSchemeColor]) -> Vec<String> {
    let mut errors = Vec::new();
    check_required_text(&mut errors, name, "Name", MAX_NAME_LEN);

    for color in colors {
        if color.name.trim().is_empty() {
            errors.push("Color name can't be blank".to_string());
            continue;
        }
        check_text_len(&mut errors, &color.name, "Color name", MAX_SHORT_TEXT_LEN);
        if !is_valid_hex(&color.hex) {
            errors.push(format!("Color '{}' hex is invalid", color.name));
        }
    }

    errors
}

/// Validate a user field as it would be stored
pub fn validate_user_field(field: &UserField) -> Vec<String> {
    let mut errors = Vec::new();
    check_required_text(&mut errors, &field.name, "Name", MAX_NAME_LEN);
    check_text_len(
        &mut errors,
        &field.description,
        "Description",
        MAX_DESCRIPTION_LEN,
    );

    if field.field_type.requires_options()
        && !field.options.iter().any(|o| !o.trim().is_empty())
    {
        errors.push(format!(
            "Options can't be empty for a {} field",
            field.field_type
        ));
    }
    for option in &field.options {
        check_text_len(&mut errors, option, "Option", MAX_SHORT_TEXT_LEN);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::FieldType;

    fn color(name: &str, hex: &str) -> ColorSchemeColor {
        ColorSchemeColor {
            name: name.to_string(),
            hex: hex.to_string(),
            default_hex: None,
        }
    }

    #[test]
    fn test_valid_color_scheme() {
        let errors = validate_color_scheme(
            "Such Design",
            &[color("primary", "FFBB00"), color("secondary", "888888")],
        );
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn test_color_scheme_collects_every_error() {
        let errors = validate_color_scheme(
            "  ",
            &[color("primary", "cool color please"), color("", "fff")],
        );
        assert_eq!(
            errors,
            vec![
                "Name can't be blank".to_string(),
                "Color 'primary' hex is invalid".to_string(),
                "Color name can't be blank".to_string(),
            ]
        );
    }

    #[test]
    fn test_name_too_long() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        let errors = validate_color_scheme(&long, &[]);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Name is too long"));
    }

    #[test]
    fn test_dropdown_requires_options() {
        let mut field = UserField::new(FieldType::Dropdown, 1);
        field.name = "Shirt size".to_string();
        assert_eq!(validate_user_field(&field).len(), 1);

        field.options = vec!["S".to_string(), "M".to_string()];
        assert!(validate_user_field(&field).is_empty());
    }

    #[test]
    fn test_user_field_requires_name() {
        let field = UserField::new(FieldType::Text, 1);
        assert_eq!(validate_user_field(&field), vec!["Name can't be blank"]);
    }
}
