//! Input validation functions
//!
//! Reusable validators for form input. The client uses them for
//! pre-validation before a request is sent; the server remains the
//! enforcement boundary.

mod password;
mod username;

pub use password::{
    MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, PasswordError, validate_password,
    validate_password_input,
};
pub use username::{MAX_USERNAME_LENGTH, UsernameError, validate_username};
