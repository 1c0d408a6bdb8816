use regex::Regex;

use shared_models::error::FieldErrors;

/// Record a presence failure for `field` if the value is empty after trimming.
pub fn check_required(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("{} is required", field));
    }
}

/// Record a format failure for `field` if a non-empty value is not a valid
/// email address. Missing values are the presence check's concern.
pub fn check_email(errors: &mut FieldErrors, field: &str, value: &str) {
    let trimmed = value.trim();
    if !trimmed.is_empty() && !is_valid_email(trimmed) {
        errors.add(field, format!("{} must be a valid email address", field));
    }
}

/// Record a format failure for `field` if a non-empty value is not a valid
/// phone number.
pub fn check_phone(errors: &mut FieldErrors, field: &str, value: &str) {
    let trimmed = value.trim();
    if !trimmed.is_empty() && !is_valid_phone(trimmed) {
        errors.add(field, format!("{} must be a valid phone number", field));
    }
}

pub fn is_valid_email(email: &str) -> bool {
    let email_regex = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();

    email_regex.is_match(email) && email.len() <= 254
}

/// Optional leading `+`, then 1-16 digits once spaces, hyphens and
/// parentheses are stripped.
pub fn is_valid_phone(phone: &str) -> bool {
    let cleaned: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();

    let digits = cleaned.strip_prefix('+').unwrap_or(&cleaned);

    !digits.is_empty() && digits.len() <= 16 && digits.chars().all(|c| c.is_ascii_digit())
}

/// Canonical form persisted for email addresses.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
