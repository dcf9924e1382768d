use std::fmt;

/// Identifies one of the five fields collected by the sign-up form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormField {
	Name,
	Email,
	Password,
	ConfirmPassword,
	AcceptTerms,
}

impl fmt::Display for FormField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Name => "name",
			Self::Email => "email",
			Self::Password => "password",
			Self::ConfirmPassword => "confirm_password",
			Self::AcceptTerms => "accept_terms",
		};
		f.write_str(name)
	}
}

/// A value destined for a form field: text for the input controls, a flag for the checkbox.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldValue {
	Text(String),
	Flag(bool),
}

/// The live form state. One instance exists for the lifetime of the form view; every
/// input event replaces it wholesale through [`FormData::with_field`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormData {
	pub name: String,
	pub email: String,
	pub password: String,
	pub confirm_password: String,
	pub accept_terms: bool,
}

impl FormData {
	/// Constructs a new record with exactly the named field replaced and all other fields
	/// copied unchanged. No validation happens here; any text (including empty) and any
	/// flag state are accepted verbatim. A value of the wrong kind for the field (a flag
	/// aimed at a text field or text aimed at the checkbox) leaves the record as it was.
	pub fn with_field(&self, field: FormField, value: FieldValue) -> Self {
		match (field, value) {
			(FormField::Name, FieldValue::Text(text)) => Self {
				name: text,
				..self.clone()
			},
			(FormField::Email, FieldValue::Text(text)) => Self {
				email: text,
				..self.clone()
			},
			(FormField::Password, FieldValue::Text(text)) => Self {
				password: text,
				..self.clone()
			},
			(FormField::ConfirmPassword, FieldValue::Text(text)) => Self {
				confirm_password: text,
				..self.clone()
			},
			(FormField::AcceptTerms, FieldValue::Flag(flag)) => Self {
				accept_terms: flag,
				..self.clone()
			},
			(field, value) => {
				log::debug!("Ignoring mismatched value {:?} for field {}", value, field);
				self.clone()
			}
		}
	}
}
