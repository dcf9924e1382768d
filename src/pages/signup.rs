use crate::model::{FieldValue, FormData, FormField};
use crate::submission::{attempt_submit, success_summary, SubmitOutcome};
use sycamore::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event as WebEvent, HtmlInputElement};

/// The sign-up form page. Field values live in a single form record signal that input
/// events replace one field at a time; the validator runs only on submit.
#[component]
pub fn SignUpView<G: Html>(ctx: Scope<'_>) -> View<G> {
	let form_signal = create_signal(ctx, FormData::default());
	let errors_signal = create_signal(ctx, Vec::<String>::new());

	// Each text input routes through here with its field name. Errors from a previous
	// failed submit are dropped as soon as the user edits anything; they describe input
	// that no longer exists.
	let update_text_field = move |field: FormField| {
		move |event: WebEvent| {
			let Some(event_target) = event.target() else {
				return;
			};
			let input: HtmlInputElement = event_target.unchecked_into();
			let updated = form_signal.get().with_field(field, FieldValue::Text(input.value()));
			form_signal.set(updated);
			if !errors_signal.get().is_empty() {
				errors_signal.set(Vec::new());
			}
		}
	};
	let name_handler = update_text_field(FormField::Name);
	let email_handler = update_text_field(FormField::Email);
	let password_handler = update_text_field(FormField::Password);
	let confirm_password_handler = update_text_field(FormField::ConfirmPassword);

	let accept_terms_handler = move |event: WebEvent| {
		let Some(event_target) = event.target() else {
			return;
		};
		let checkbox: HtmlInputElement = event_target.unchecked_into();
		let updated = form_signal
			.get()
			.with_field(FormField::AcceptTerms, FieldValue::Flag(checkbox.checked()));
		form_signal.set(updated);
		if !errors_signal.get().is_empty() {
			errors_signal.set(Vec::new());
		}
	};

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		let form = (*form_signal.get()).clone();
		log::debug!("Submit attempted for the sign-up form");
		match attempt_submit(&form) {
			SubmitOutcome::Accepted(accepted) => {
				errors_signal.set(Vec::new());
				let Some(window) = web_sys::window() else {
					log::error!("No window is available to show the submission notice");
					return;
				};
				if window.alert_with_message(&success_summary(&accepted)).is_err() {
					log::error!("Failed to show the submission notice");
				}
			}
			SubmitOutcome::Rejected(failure) => errors_signal.set(failure.into_errors()),
		}
	};

	let displayed_errors = create_memo(ctx, || (*errors_signal.get()).clone());

	view! {
		ctx,
		div(id="signup_page") {
			h1 { "Sign Up Form" }
			form(id="signup_form", on:submit=form_submission_handler) {
				div(class="signup_field") {
					label(for="signup_name") { "Name:" }
					input(id="signup_name", type="text", on:input=name_handler)
				}
				div(class="signup_field") {
					label(for="signup_email") { "Email:" }
					input(id="signup_email", type="email", on:input=email_handler)
				}
				div(class="signup_field") {
					label(for="signup_password") { "Password:" }
					input(id="signup_password", type="password", on:input=password_handler)
				}
				div(class="signup_field") {
					label(for="signup_confirm_password") { "Confirm Password:" }
					input(id="signup_confirm_password", type="password", on:input=confirm_password_handler)
				}
				div(class="signup_field") {
					label(for="signup_accept_terms") {
						input(id="signup_accept_terms", type="checkbox", on:change=accept_terms_handler)
						"I accept terms & conditions"
					}
				}
				button(type="submit") { "Sign Up" }
			}
			(if errors_signal.get().is_empty() {
				view! { ctx, }
			} else {
				view! {
					ctx,
					ul(id="signup_errors") {
						Indexed(
							iterable=displayed_errors,
							view=|ctx, error| view! { ctx, li(class="signup_error_entry") { (error) } }
						)
					}
				}
			})
		}
	}
}
