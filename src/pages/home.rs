use leptos::prelude::*;

use crate::components::description::ProjectDescription;
use crate::components::gallery::DemoGallery;
use crate::components::graph_form::{GraphForm, RandomGraphControls};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<main class="page">
				<h1>"Bidirectional Graph Search"</h1>
				<ProjectDescription />
				<section class="graph-input">
					<RandomGraphControls />
					<GraphForm />
				</section>
				<DemoGallery />
			</main>
		</ErrorBoundary>
	}
}
