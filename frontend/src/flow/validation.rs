use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Local input problems. The `Display` text is shown inline under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
}

pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    Ok(email.to_string())
}

/// Checks a new password against its confirmation. Passwords are taken
/// verbatim; surrounding whitespace is part of the password.
pub fn validate_password_pair(password: &str, confirmation: &str) -> Result<String, ValidationError> {
    if password != confirmation {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(password.to_string())
}
