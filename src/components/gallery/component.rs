use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::types::GalleryItem;
use crate::components::error_modal::ErrorModal;

/// Demo trigger button plus the photo gallery it fills. Every response
/// replaces the gallery wholesale; when requests overlap, the last response
/// to arrive wins the region.
#[component]
pub fn DemoGallery() -> impl IntoView {
	let items: RwSignal<Vec<GalleryItem>> = RwSignal::new(Vec::new());
	let error_visible = RwSignal::new(false);

	let on_generate = move |_| {
		spawn_local(async move {
			match api::request_demo_photos().await {
				Ok(response) if response.is_error() => error_visible.set(true),
				Ok(response) => items.set(response.into_items()),
				// Transport and decode failures stay in the console; the
				// gallery keeps its previous contents.
				Err(err) => log::error!("demo photo request failed: {err}"),
			}
		});
	};

	view! {
		<div class="demo-section">
			<button type="button" id="generate-demo-btn" on:click=on_generate>
				"Generate Demo"
			</button>
			<div id="new-demo-container">
				{move || items.get().into_iter().map(photo_frame).collect_view()}
			</div>
			<ErrorModal visible=error_visible />
		</div>
	}
}

fn photo_frame(item: GalleryItem) -> impl IntoView {
	let src = item.data_url();
	let captions = (!item.captions.is_empty()).then(|| {
		let lines = item
			.captions
			.into_iter()
			.map(|line| {
				let class = line.is_title.then_some("title");
				view! { <div class=class>{line.text}</div> }
			})
			.collect_view();
		view! { <div class="message">{lines}</div> }
	});

	view! {
		<div class="photo-frame">
			<img src=src alt="Generated Photo" class="photo" />
			{captions}
		</div>
	}
}
