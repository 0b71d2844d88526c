/// Field validation
///
/// Each record's checks are built from these functions, wired into the
/// `Validate` derives on the request payloads. Messages are the exact
/// strings the API re-renders inside a 422 response.
use once_cell::sync::Lazy;
use regex::Regex;
use validator::{ValidationError, ValidationErrors};

use crate::error::FieldErrors;

/// Minimum password length accepted at registration.
pub const PASSWORD_MIN_LEN: usize = 6;
/// Upper bound on post bodies, in characters.
pub const POST_CONTENT_MAX_LEN: usize = 10_000;
/// Upper bound on comment bodies, in characters.
pub const COMMENT_CONTENT_MAX_LEN: usize = 2_200;

/// Message attached to an email that is already registered.
pub const EMAIL_TAKEN: &str = "has already been taken";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email regex must compile")
});

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Presence check. Whitespace-only counts as blank.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("blank", "can't be blank"));
    }
    Ok(())
}

/// Email presence and shape.
pub fn email(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if value.len() > 254 || !EMAIL_REGEX.is_match(value.trim()) {
        return Err(invalid("invalid", "is invalid"));
    }
    Ok(())
}

/// Password presence and minimum length. Length counts characters, not
/// bytes, so multi-byte input is not overcounted.
pub fn password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(invalid("blank", "can't be blank"));
    }
    if value.chars().count() < PASSWORD_MIN_LEN {
        return Err(invalid(
            "too_short",
            "is too short (minimum is 6 characters)",
        ));
    }
    Ok(())
}

/// Post body: present and within the length cap.
pub fn post_content(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if value.chars().count() > POST_CONTENT_MAX_LEN {
        return Err(invalid(
            "too_long",
            "is too long (maximum is 10000 characters)",
        ));
    }
    Ok(())
}

/// Comment body: present and within the length cap.
pub fn comment_content(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if value.chars().count() > COMMENT_CONTENT_MAX_LEN {
        return Err(invalid(
            "too_long",
            "is too long (maximum is 2200 characters)",
        ));
    }
    Ok(())
}

/// Flatten `validator` derive output into the per-field message map the API
/// returns. Fields come out in name order so responses are stable.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut map = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        map.insert(field.to_string(), messages);
    }
    map
}
