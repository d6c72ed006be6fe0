use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use web_sys::{HtmlFormElement, KeyboardEvent, SubmitEvent};

use super::state::EdgeList;
use super::validate::{
	SubmissionState, compute_node_set, gate_submission, parse_node_count, random_graph_url,
};

fn alert(message: &str) {
	let _ = web_sys::window().unwrap().alert_with_message(message);
}

fn navigate(url: &str) {
	let _ = web_sys::window().unwrap().location().set_href(url);
}

/// Node-count field plus the "generate" button. A valid count navigates to
/// `/?num_nodes=N` for a full server-side regeneration; the field is
/// pre-filled from the current URL query when present.
#[component]
pub fn RandomGraphControls() -> impl IntoView {
	let query = use_query_map();
	let num_nodes = RwSignal::new(
		query.with_untracked(|params| params.get("num_nodes").unwrap_or_default()),
	);

	let generate = move || match parse_node_count(&num_nodes.get_untracked()) {
		Ok(count) => navigate(&random_graph_url(count)),
		Err(err) => alert(&err.to_string()),
	};

	view! {
		<div class="random-graph">
			<label for="num_nodes">"Number of nodes:"</label>
			<input
				type="number"
				id="num_nodes"
				prop:value=move || num_nodes.get()
				on:input=move |ev| num_nodes.set(event_target_value(&ev))
				on:keydown=move |ev: KeyboardEvent| {
					if ev.key() == "Enter" {
						ev.prevent_default();
						generate();
					}
				}
			/>
			<button type="button" id="generate-random-graph-btn" on:click=move |_| generate()>
				"Generate Random Graph"
			</button>
		</div>
	}
}

/// The edge-entry form. Submission posts `node1[]`/`node2[]`/`weight[]` and
/// the start/goal fields to `/`, but only after the gate confirms that both
/// endpoints appear among the entered edges.
#[component]
pub fn GraphForm() -> impl IntoView {
	let edges = RwSignal::new(EdgeList::new());
	let start_node = RwSignal::new(String::new());
	let goal_node = RwSignal::new(String::new());
	let submission = RwSignal::new(SubmissionState::Pending);
	let form_ref = NodeRef::<leptos::html::Form>::new();

	let on_submit = move |ev: SubmitEvent| {
		// Suppress the native submit unconditionally; it is re-issued below
		// only once the gate passes.
		ev.prevent_default();

		// Recomputed from the live rows on every attempt, never cached.
		let node_set = edges.with_untracked(|list| compute_node_set(list.rows()));
		log::debug!("node set: {node_set:?}");

		let decision = gate_submission(
			&node_set,
			&start_node.get_untracked(),
			&goal_node.get_untracked(),
		);
		match decision {
			Ok(()) => {
				log::info!("validation passed, submitting form");
				submission.set(SubmissionState::Submitted);
				let form: HtmlFormElement = form_ref.get().unwrap().into();
				// HtmlFormElement::submit skips submit handlers, so this
				// cannot re-enter the gate.
				let _ = form.submit();
			}
			Err(err) => alert(&err.to_string()),
		}
	};

	view! {
		<form class="graph-form" method="post" action="/" node_ref=form_ref on:submit=on_submit>
			<div id="edges-container">
				<div class="edge-row header">
					<span></span>
					<span>"Node 1"</span>
					<span>"Node 2"</span>
					<span>"Weight"</span>
				</div>
				<For
					each=move || edges.with(|list| list.labeled_rows())
					key=|(_, row)| row.id
					children=move |(label, row)| {
						let id = row.id;
						view! {
							<div class="edge-row">
								<label>{format!("{label}:")}</label>
								<input
									type="number"
									name="node1[]"
									required=true
									value=row.node1.clone()
									on:input=move |ev| {
										edges.update(|list| {
											if let Some(row) = list.row_mut(id) {
												row.node1 = event_target_value(&ev);
											}
										})
									}
								/>
								<input
									type="number"
									name="node2[]"
									required=true
									value=row.node2.clone()
									on:input=move |ev| {
										edges.update(|list| {
											if let Some(row) = list.row_mut(id) {
												row.node2 = event_target_value(&ev);
											}
										})
									}
								/>
								<input
									type="number"
									name="weight[]"
									required=true
									placeholder="Weight"
									value=row.weight.clone()
									on:input=move |ev| {
										edges.update(|list| {
											if let Some(row) = list.row_mut(id) {
												row.weight = event_target_value(&ev);
											}
										})
									}
								/>
							</div>
						}
					}
				/>
			</div>

			<div class="edge-buttons">
				<button type="button" on:click=move |_| edges.update(EdgeList::add_edge)>
					"Add Edge"
				</button>
				<button type="button" on:click=move |_| edges.update(EdgeList::remove_edge)>
					"Remove Edge"
				</button>
			</div>

			<div class="endpoint-fields">
				<label for="start_node">"Start node:"</label>
				<input
					type="number"
					id="start_node"
					name="start_node"
					required=true
					prop:value=move || start_node.get()
					on:input=move |ev| start_node.set(event_target_value(&ev))
				/>
				<label for="goal_node">"Goal node:"</label>
				<input
					type="number"
					id="goal_node"
					name="goal_node"
					required=true
					prop:value=move || goal_node.get()
					on:input=move |ev| goal_node.set(event_target_value(&ev))
				/>
			</div>

			<button
				type="submit"
				prop:disabled=move || submission.get() == SubmissionState::Submitted
			>
				"Find Route"
			</button>
		</form>
	}
}
