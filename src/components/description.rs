use leptos::prelude::*;

/// Short/long description swap ("Read more"/"Read less"). The only state is
/// which of the two blocks is shown.
#[component]
pub fn ProjectDescription() -> impl IntoView {
	let expanded = RwSignal::new(false);

	view! {
		<div class="description">
			<div
				id="short-description"
				style:display=move || if expanded.get() { "none" } else { "block" }
			>
				<p>
					"Enter a weighted graph edge by edge, pick start and goal nodes, and "
					"the server searches for a route between them with a bidirectional "
					"heuristic search. "
					<a
						href="#"
						id="read-more"
						on:click=move |ev| {
							ev.prevent_default();
							expanded.set(true);
						}
					>
						"Read more"
					</a>
				</p>
			</div>
			<div
				id="full-description"
				style:display=move || if expanded.get() { "block" } else { "none" }
			>
				<p>
					"Enter a weighted graph edge by edge, pick start and goal nodes, and "
					"the server searches for a route between them with a near-optimal "
					"front-to-end bidirectional heuristic search. The search expands two "
					"frontiers at once, one growing out of the start node and one growing "
					"back from the goal, and meets somewhere in the middle."
				</p>
				<p>
					"The demo renders that process: each generated photo is a snapshot of "
					"the two frontiers after a round of expansions, and the final photo "
					"highlights the route the search settled on. Captions list the edges "
					"of the found path. You can also ask the server for a fresh random "
					"graph of a chosen size instead of typing edges in by hand. "
					<a
						href="#"
						id="read-less"
						on:click=move |ev| {
							ev.prevent_default();
							expanded.set(false);
						}
					>
						"Read less"
					</a>
				</p>
			</div>
		</div>
	}
}
