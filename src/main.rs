//! Binary entry point: mounts the app to the document body.

use graph_search_client::{App, init_logging};
use leptos::mount::mount_to_body;

fn main() {
	init_logging();
	mount_to_body(App);
}
