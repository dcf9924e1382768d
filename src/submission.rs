use crate::model::FormData;
use crate::validation::{self, ValidationFailure};

/// The result of one submit attempt. The form returns to an idle, resubmittable state
/// either way; nothing about an attempt is retained beyond the outcome itself.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
	Accepted(FormData),
	Rejected(ValidationFailure),
}

/// Runs the validator over the submitted form. An error-free pass accepts the form as
/// submitted; any failure rejects it with the full message list.
pub fn attempt_submit(form: &FormData) -> SubmitOutcome {
	match validation::check(form) {
		Ok(()) => SubmitOutcome::Accepted(form.clone()),
		Err(failure) => {
			log::debug!("Sign-up submit rejected: {}", failure);
			SubmitOutcome::Rejected(failure)
		}
	}
}

/// The text shown in the blocking notification after an accepted submit. Includes every
/// collected value, the password as the plain text the user typed.
pub fn success_summary(form: &FormData) -> String {
	format!(
		"Form Submitted!\n\nName: {}\nEmail: {}\nPassword: {}\nAccepted Terms: {}",
		form.name, form.email, form.password, form.accept_terms
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::validation::{FIELDS_REQUIRED_ERROR, PASSWORD_MISMATCH_ERROR, TERMS_NOT_ACCEPTED_ERROR};

	fn valid_form() -> FormData {
		FormData {
			name: String::from("Al"),
			email: String::from("a@b.com"),
			password: String::from("x1"),
			confirm_password: String::from("x1"),
			accept_terms: true,
		}
	}

	#[test]
	fn valid_form_is_accepted_with_its_values_intact() {
		let form = valid_form();
		match attempt_submit(&form) {
			SubmitOutcome::Accepted(accepted) => assert_eq!(accepted, form),
			SubmitOutcome::Rejected(failure) => {
				panic!("valid form was rejected: {}", failure)
			}
		}
	}

	#[test]
	fn invalid_form_is_rejected_with_ordered_errors() {
		let form = FormData {
			name: String::new(),
			confirm_password: String::from("x2"),
			accept_terms: false,
			..valid_form()
		};
		match attempt_submit(&form) {
			SubmitOutcome::Accepted(_) => panic!("invalid form was accepted"),
			SubmitOutcome::Rejected(failure) => assert_eq!(
				failure.into_errors(),
				vec![
					String::from(FIELDS_REQUIRED_ERROR),
					String::from(PASSWORD_MISMATCH_ERROR),
					String::from(TERMS_NOT_ACCEPTED_ERROR)
				]
			),
		}
	}

	#[test]
	fn resubmission_after_a_rejection_can_succeed() {
		// The flow is reentrant; a corrected form goes through on the next attempt.
		let mut form = valid_form();
		form.accept_terms = false;
		assert!(matches!(attempt_submit(&form), SubmitOutcome::Rejected(_)));

		form.accept_terms = true;
		assert!(matches!(attempt_submit(&form), SubmitOutcome::Accepted(_)));
	}

	#[test]
	fn success_summary_lists_all_collected_values() {
		let summary = success_summary(&valid_form());
		assert!(summary.contains("Name: Al"));
		assert!(summary.contains("Email: a@b.com"));
		assert!(summary.contains("Password: x1"));
		assert!(summary.contains("Accepted Terms: true"));
	}
}
