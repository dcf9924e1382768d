use sycamore::prelude::*;

mod model;
mod pages;
mod submission;
mod validation;

use pages::signup::SignUpView;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	log::debug!("Rendering the sign-up form page");
	sycamore::render(|ctx| {
		view! { ctx, SignUpView }
	});
}
