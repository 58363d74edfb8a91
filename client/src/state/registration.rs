//! View-model for the registration form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the three raw input values, the last validation status of each
//! field, and the form-level message. The `RegistrationForm` component reads
//! this state to set the `invalid` class, the adjacent error text, and the
//! message color; it never decides validity itself.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use crate::validation::{self, Field, FieldError};

/// Message shown after a fully valid submission.
pub const SUCCESS_MESSAGE: &str = "Registration successful! 🎉";
/// Message shown when any field fails at submit time.
pub const FAILURE_MESSAGE: &str = "Please fix errors before submitting.";

/// Last known validation state of one field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldStatus {
    /// Not validated since load or the last reset. Renders like `Valid`.
    #[default]
    Unchecked,
    Valid,
    Invalid(FieldError),
}

impl FieldStatus {
    pub fn from_result(result: Result<(), FieldError>) -> Self {
        match result {
            Ok(()) => FieldStatus::Valid,
            Err(err) => FieldStatus::Invalid(err),
        }
    }

    pub fn is_invalid(self) -> bool {
        matches!(self, FieldStatus::Invalid(_))
    }

    /// Text for the error element next to the input; empty unless invalid.
    pub fn error_text(self) -> &'static str {
        match self {
            FieldStatus::Invalid(err) => err.message(),
            FieldStatus::Unchecked | FieldStatus::Valid => "",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Failure,
}

impl MessageKind {
    /// CSS color applied to the form message.
    pub fn color(self) -> &'static str {
        match self {
            MessageKind::Success => "green",
            MessageKind::Failure => "red",
        }
    }
}

/// Form-level message displayed under the submit button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: &'static str,
}

impl FormMessage {
    pub const SUCCESS: FormMessage = FormMessage { kind: MessageKind::Success, text: SUCCESS_MESSAGE };
    pub const FAILURE: FormMessage = FormMessage { kind: MessageKind::Failure, text: FAILURE_MESSAGE };
}

/// Registration form state shared through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub name_status: FieldStatus,
    pub email_status: FieldStatus,
    pub password_status: FieldStatus,
    pub message: Option<FormMessage>,
}

impl RegistrationState {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn status(&self, field: Field) -> FieldStatus {
        match field {
            Field::Name => self.name_status,
            Field::Email => self.email_status,
            Field::Password => self.password_status,
        }
    }

    fn status_mut(&mut self, field: Field) -> &mut FieldStatus {
        match field {
            Field::Name => &mut self.name_status,
            Field::Email => &mut self.email_status,
            Field::Password => &mut self.password_status,
        }
    }

    /// Store a new raw value for `field` and revalidate that field only.
    ///
    /// Other fields and the form message are left untouched. Returns the
    /// field's validity.
    pub fn set_value(&mut self, field: Field, value: String) -> bool {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
        self.revalidate(field)
    }

    /// Re-run `field`'s validator against its current value.
    pub fn revalidate(&mut self, field: Field) -> bool {
        let result = field.validate(self.value(field));
        *self.status_mut(field) = FieldStatus::from_result(result);
        result.is_ok()
    }

    /// Validate all three fields and set the form message.
    ///
    /// On success the values are cleared and the success message shown; on
    /// failure the values stay and the generic failure message is shown.
    /// Returns whether the submission was accepted.
    pub fn submit(&mut self) -> bool {
        let outcome = validation::validate_registration(&self.name, &self.email, &self.password);
        for field in Field::ALL {
            *self.status_mut(field) = FieldStatus::from_result(outcome.result(field));
        }

        if outcome.is_valid() {
            self.reset();
            self.message = Some(FormMessage::SUCCESS);
            true
        } else {
            self.message = Some(FormMessage::FAILURE);
            false
        }
    }

    /// Clear every value and field status. The form message is kept.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.password.clear();
        self.name_status = FieldStatus::Unchecked;
        self.email_status = FieldStatus::Unchecked;
        self.password_status = FieldStatus::Unchecked;
    }
}
