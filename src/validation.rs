use std::fmt;

use crate::model::FormData;

pub const FIELDS_REQUIRED_ERROR: &str = "All fields are required.";
pub const PASSWORD_MISMATCH_ERROR: &str = "Passwords do not match.";
pub const TERMS_NOT_ACCEPTED_ERROR: &str = "You must accept the terms & conditions.";

/// Runs the full rule set over the form and returns every failure message in rule order.
/// The list is rebuilt from scratch on every call; the same form always produces the
/// same messages in the same order.
///
/// The rules, in order:
/// 1. any of the four text fields empty produces a single combined message;
/// 2. password and confirmation differ (exact string comparison);
/// 3. the terms checkbox is unchecked.
///
/// There is deliberately no email format check and no password complexity policy.
pub fn validate(form: &FormData) -> Vec<String> {
	let mut errors: Vec<String> = Vec::new();

	let any_text_field_empty = form.name.is_empty()
		|| form.email.is_empty()
		|| form.password.is_empty()
		|| form.confirm_password.is_empty();
	if any_text_field_empty {
		errors.push(String::from(FIELDS_REQUIRED_ERROR));
	}
	if form.password != form.confirm_password {
		errors.push(String::from(PASSWORD_MISMATCH_ERROR));
	}
	if !form.accept_terms {
		errors.push(String::from(TERMS_NOT_ACCEPTED_ERROR));
	}

	errors
}

/// Validates the form, wrapping a non-empty error list in a [`ValidationFailure`].
pub fn check(form: &FormData) -> Result<(), ValidationFailure> {
	let errors = validate(form);
	if errors.is_empty() {
		Ok(())
	} else {
		Err(ValidationFailure { errors })
	}
}

/// A failed validation pass over the form. Always carries at least one message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidationFailure {
	errors: Vec<String>,
}

impl ValidationFailure {
	pub fn errors(&self) -> &[String] {
		&self.errors
	}

	pub fn into_errors(self) -> Vec<String> {
		self.errors
	}
}

impl fmt::Display for ValidationFailure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "The form failed validation: {}", self.errors.join(" "))
	}
}

impl std::error::Error for ValidationFailure {}
