//! Binary entry point: mounts the portfolio app into the document body.

use portfolio_site::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
