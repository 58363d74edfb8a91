//! Pure field validators for the registration form.
//!
//! DESIGN
//! ======
//! Each validator maps a raw input string to `Result<(), FieldError>` and
//! never touches the DOM. Components translate the result into the `invalid`
//! class and the adjacent error text, so the rules stay testable natively.
//!
//! Lengths are counted in UTF-16 code units to agree with what the browser
//! reports for an input value.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Minimum trimmed name length.
pub const NAME_MIN_LEN: usize = 3;
/// Minimum raw password length.
pub const PASSWORD_MIN_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// The three registration inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Password];

    /// Run this field's validator against `raw`.
    pub fn validate(self, raw: &str) -> Result<(), FieldError> {
        match self {
            Field::Name => validate_name(raw),
            Field::Email => validate_email(raw),
            Field::Password => validate_password(raw),
        }
    }
}

/// Reason a single field was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    NameTooShort,
    InvalidEmail,
    WeakPassword,
}

impl FieldError {
    /// User-facing message shown next to the offending input.
    pub fn message(self) -> &'static str {
        match self {
            FieldError::NameTooShort => "Name must be at least 3 characters.",
            FieldError::InvalidEmail => "Please enter a valid email.",
            FieldError::WeakPassword => "Password must be 6+ chars and contain a number.",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Name must have at least three characters once surrounding whitespace is removed.
pub fn validate_name(raw: &str) -> Result<(), FieldError> {
    if utf16_len(raw.trim()) < NAME_MIN_LEN {
        return Err(FieldError::NameTooShort);
    }
    Ok(())
}

/// Email is trimmed, then matched in full against `local@domain.tld` with no
/// whitespace or extra `@` in any segment.
pub fn validate_email(raw: &str) -> Result<(), FieldError> {
    if !EMAIL_RE.is_match(raw.trim()) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// Password is taken verbatim: six or more characters with at least one ASCII digit.
pub fn validate_password(raw: &str) -> Result<(), FieldError> {
    let long_enough = utf16_len(raw) >= PASSWORD_MIN_LEN;
    let has_digit = raw.bytes().any(|b| b.is_ascii_digit());
    if !(long_enough && has_digit) {
        return Err(FieldError::WeakPassword);
    }
    Ok(())
}

/// Per-field results of one submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistrationOutcome {
    pub name: Result<(), FieldError>,
    pub email: Result<(), FieldError>,
    pub password: Result<(), FieldError>,
}

impl RegistrationOutcome {
    /// Result recorded for `field`.
    pub fn result(&self, field: Field) -> Result<(), FieldError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Password => self.password,
        }
    }

    /// Conjunction of all three field results.
    pub fn is_valid(&self) -> bool {
        self.name.is_ok() && self.email.is_ok() && self.password.is_ok()
    }
}

/// Validate every field. All three validators always run; a failing name
/// does not skip the email or password checks.
pub fn validate_registration(name: &str, email: &str, password: &str) -> RegistrationOutcome {
    RegistrationOutcome {
        name: validate_name(name),
        email: validate_email(email),
        password: validate_password(password),
    }
}

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}
