use super::*;

fn filled(name: &str, email: &str, password: &str) -> RegistrationState {
    RegistrationState {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        ..RegistrationState::default()
    }
}

// =============================================================
// FieldStatus
// =============================================================

#[test]
fn field_status_default_is_unchecked_and_renders_clean() {
    let status = FieldStatus::default();
    assert_eq!(status, FieldStatus::Unchecked);
    assert!(!status.is_invalid());
    assert_eq!(status.error_text(), "");
}

#[test]
fn field_status_invalid_carries_message() {
    let status = FieldStatus::from_result(Err(FieldError::InvalidEmail));
    assert!(status.is_invalid());
    assert_eq!(status.error_text(), "Please enter a valid email.");
}

#[test]
fn field_status_valid_has_no_text() {
    let status = FieldStatus::from_result(Ok(()));
    assert_eq!(status, FieldStatus::Valid);
    assert_eq!(status.error_text(), "");
}

#[test]
fn message_kind_colors() {
    assert_eq!(MessageKind::Success.color(), "green");
    assert_eq!(MessageKind::Failure.color(), "red");
}

// =============================================================
// Per-field revalidation
// =============================================================

#[test]
fn set_value_marks_only_that_field() {
    let mut form = RegistrationState::default();
    assert!(!form.set_value(Field::Name, "ab".to_owned()));

    assert_eq!(form.name_status, FieldStatus::Invalid(FieldError::NameTooShort));
    assert_eq!(form.email_status, FieldStatus::Unchecked);
    assert_eq!(form.password_status, FieldStatus::Unchecked);
}

#[test]
fn set_value_clears_error_once_valid() {
    let mut form = RegistrationState::default();
    form.set_value(Field::Email, "a@b".to_owned());
    assert!(form.status(Field::Email).is_invalid());

    assert!(form.set_value(Field::Email, "a@b.co".to_owned()));
    assert_eq!(form.status(Field::Email), FieldStatus::Valid);
    assert_eq!(form.status(Field::Email).error_text(), "");
}

#[test]
fn revalidating_one_field_leaves_other_errors_alone() {
    let mut form = filled("ab", "bad", "short");
    form.submit();
    assert!(form.status(Field::Email).is_invalid());
    assert!(form.status(Field::Password).is_invalid());

    form.set_value(Field::Name, "Ada".to_owned());
    assert_eq!(form.status(Field::Name), FieldStatus::Valid);
    assert_eq!(form.status(Field::Email), FieldStatus::Invalid(FieldError::InvalidEmail));
    assert_eq!(form.status(Field::Password), FieldStatus::Invalid(FieldError::WeakPassword));
}

#[test]
fn set_value_does_not_touch_form_message() {
    let mut form = filled("ab", "a@b.co", "abc123");
    form.submit();
    assert_eq!(form.message, Some(FormMessage::FAILURE));

    form.set_value(Field::Name, "Ada".to_owned());
    assert_eq!(form.message, Some(FormMessage::FAILURE));
}

#[test]
fn revalidating_same_value_is_idempotent() {
    let mut form = RegistrationState::default();
    form.set_value(Field::Password, "abcdef".to_owned());
    let first = form.clone();

    form.revalidate(Field::Password);
    form.revalidate(Field::Password);
    assert_eq!(form, first);
    assert_eq!(
        form.status(Field::Password).error_text(),
        "Password must be 6+ chars and contain a number."
    );
}

// =============================================================
// Submission
// =============================================================

#[test]
fn submit_all_valid_shows_success_and_resets() {
    let mut form = filled("Ada", "ada@example.com", "abc123");
    assert!(form.submit());

    assert_eq!(form.message, Some(FormMessage::SUCCESS));
    assert_eq!(form.message.map(|m| m.text), Some("Registration successful! 🎉"));
    assert_eq!(form.value(Field::Name), "");
    assert_eq!(form.value(Field::Email), "");
    assert_eq!(form.value(Field::Password), "");
    for field in Field::ALL {
        assert_eq!(form.status(field), FieldStatus::Unchecked);
    }
}

#[test]
fn submit_with_one_invalid_field_shows_failure_and_keeps_values() {
    let mut form = filled("Ada", "ada@example.com", "abcdef");
    assert!(!form.submit());

    assert_eq!(form.message, Some(FormMessage::FAILURE));
    assert_eq!(form.message.map(|m| m.text), Some("Please fix errors before submitting."));
    assert_eq!(form.value(Field::Name), "Ada");
    assert_eq!(form.value(Field::Password), "abcdef");
    assert_eq!(form.status(Field::Name), FieldStatus::Valid);
    assert_eq!(form.status(Field::Email), FieldStatus::Valid);
    assert_eq!(form.status(Field::Password), FieldStatus::Invalid(FieldError::WeakPassword));
}

#[test]
fn submit_validates_every_field_even_after_first_failure() {
    let mut form = RegistrationState::default();
    assert!(!form.submit());
    for field in Field::ALL {
        assert!(form.status(field).is_invalid(), "{field:?} should be invalid");
    }
}

#[test]
fn failed_submit_then_fix_then_success() {
    let mut form = filled("Ada", "ada@example", "abc123");
    assert!(!form.submit());

    form.set_value(Field::Email, "ada@example.com".to_owned());
    assert!(form.submit());
    assert_eq!(form.message, Some(FormMessage::SUCCESS));
}

#[test]
fn repeated_failed_submit_does_not_change_state() {
    let mut form = filled("ab", "a@b.co", "abc123");
    form.submit();
    let first = form.clone();
    form.submit();
    assert_eq!(form, first);
}

#[test]
fn reset_keeps_message() {
    let mut form = filled("ab", "a@b.co", "abc123");
    form.submit();
    form.reset();
    assert_eq!(form.value(Field::Name), "");
    assert_eq!(form.status(Field::Name), FieldStatus::Unchecked);
    assert_eq!(form.message, Some(FormMessage::FAILURE));
}
