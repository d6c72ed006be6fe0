use leptos::prelude::*;
use web_sys::MouseEvent;

/// Overlay dialog for server-reported generation failures. Dismissed by the
/// close control or a click on the backdrop outside the content box; there
/// is no auto-dismiss.
#[component]
pub fn ErrorModal(visible: RwSignal<bool>) -> impl IntoView {
	let on_backdrop = move |ev: MouseEvent| {
		// The backdrop is the modal element itself; clicks on the content
		// box bubble up with a different target and are ignored.
		if ev.target() == ev.current_target() {
			visible.set(false);
		}
	};

	view! {
		<div
			id="errorModal"
			class="modal"
			style:display=move || if visible.get() { "block" } else { "none" }
			on:click=on_backdrop
		>
			<div class="modal-content">
				<span class="close" on:click=move |_| visible.set(false)>
					"×"
				</span>
				<p>
					"Could not generate the demo. Make sure the graph has been "
					"submitted and a route exists between the start and goal nodes."
				</p>
			</div>
		</div>
	}
}
