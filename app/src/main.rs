//! Entrypoint for the CSR bundle.

use paperwalk_app::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
