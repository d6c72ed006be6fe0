use gloo_net::http::Request;

use super::types::PhotosResponse;

pub const GENERATE_PHOTOS_URL: &str = "/generate_photos";

/// One round trip to the demo-photo generator. The endpoint takes no body;
/// server-side failures come back as a JSON `error` field rather than a
/// bare HTTP error, so any well-formed JSON body decodes here.
pub async fn request_demo_photos() -> Result<PhotosResponse, gloo_net::Error> {
	Request::post(GENERATE_PHOTOS_URL)
		.header("Content-Type", "application/json")
		.send()
		.await?
		.json()
		.await
}
