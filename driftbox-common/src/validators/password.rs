//! Password validation
//!
//! Validates password strings for different contexts:
//! - `validate_password_input` - For login flow (only presence and length cap)
//! - `validate_password` - For setting passwords (minimum length enforced)

/// Minimum length for new passwords in bytes
///
/// Applies when creating an account or resetting a password. Login accepts
/// shorter passwords so accounts created before the minimum keep working.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum length for passwords in bytes
pub const MAX_PASSWORD_LENGTH: usize = 256;

/// Validation error for passwords
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    /// Password is empty
    Empty,
    /// Password is below the minimum length for new passwords
    TooShort,
    /// Password exceeds maximum length
    TooLong,
}

/// Validate a password for login
///
/// Checks:
/// - Not empty
/// - Does not exceed maximum length (256 bytes)
///
/// No minimum length is applied here; whether the password is correct is
/// the server's decision.
///
/// # Errors
///
/// Returns a `PasswordError` variant describing the validation failure.
pub fn validate_password_input(password: &str) -> Result<(), PasswordError> {
    if password.is_empty() {
        return Err(PasswordError::Empty);
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(PasswordError::TooLong);
    }
    Ok(())
}

/// Validate a password for setting or changing
///
/// Checks:
/// - Not empty
/// - At least the minimum length (8 bytes)
/// - Does not exceed maximum length (256 bytes)
///
/// Use this when creating an account or resetting a password.
///
/// Note: We don't check for control characters in passwords since they
/// may be part of a passphrase or generated password.
///
/// # Errors
///
/// Returns a `PasswordError` variant describing the validation failure.
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    if password.is_empty() {
        return Err(PasswordError::Empty);
    }
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(PasswordError::TooShort);
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(PasswordError::TooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // validate_password_input tests (login flow)
    // ========================================================================

    #[test]
    fn test_input_valid_passwords() {
        assert!(validate_password_input("password123").is_ok());
        // Short passwords are allowed at login (legacy accounts)
        assert!(validate_password_input("a").is_ok());
        assert!(validate_password_input(&"a".repeat(MAX_PASSWORD_LENGTH)).is_ok());
        // Passwords can contain special characters
        assert!(validate_password_input("p@$$w0rd!#$%").is_ok());
        // Passwords can contain spaces
        assert!(validate_password_input("correct horse battery staple").is_ok());
        // Passwords can contain unicode
        assert!(validate_password_input("密码🔐").is_ok());
    }

    #[test]
    fn test_input_empty() {
        assert_eq!(validate_password_input(""), Err(PasswordError::Empty));
    }

    #[test]
    fn test_input_too_long() {
        assert_eq!(
            validate_password_input(&"a".repeat(MAX_PASSWORD_LENGTH + 1)),
            Err(PasswordError::TooLong)
        );
    }

    // ========================================================================
    // validate_password tests (create/reset flow)
    // ========================================================================

    #[test]
    fn test_valid_passwords() {
        assert!(validate_password("password123").is_ok());
        assert!(validate_password(&"a".repeat(MIN_PASSWORD_LENGTH)).is_ok());
        assert!(validate_password(&"a".repeat(MAX_PASSWORD_LENGTH)).is_ok());
        // Passwords can contain special characters
        assert!(validate_password("p@$$w0rd!#$%").is_ok());
        // Passwords can contain spaces
        assert!(validate_password("correct horse battery staple").is_ok());
        // Passwords can contain control characters (passphrases, generated)
        assert!(validate_password("pass\tword1").is_ok());
    }

    #[test]
    fn test_empty() {
        assert_eq!(validate_password(""), Err(PasswordError::Empty));
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            validate_password(&"a".repeat(MIN_PASSWORD_LENGTH - 1)),
            Err(PasswordError::TooShort)
        );
        assert_eq!(validate_password("1234567"), Err(PasswordError::TooShort));
    }

    #[test]
    fn test_minimum_is_bytes_not_chars() {
        // Multibyte characters count by encoded length
        assert!(validate_password("密码密码密码").is_ok()); // 18 bytes
    }

    #[test]
    fn test_too_long() {
        assert_eq!(
            validate_password(&"a".repeat(MAX_PASSWORD_LENGTH + 1)),
            Err(PasswordError::TooLong)
        );
    }
}
