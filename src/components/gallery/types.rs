use serde::Deserialize;
use serde_json::Value;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CaptionLine {
	pub text: String,
	#[serde(default)]
	pub is_title: bool,
}

/// Wire shape of a `/generate_photos` response: either an `error` field, or
/// base64 photos with an optional parallel list of caption lines.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PhotosResponse {
	#[serde(default)]
	pub error: Option<Value>,
	#[serde(default)]
	pub photos: Vec<String>,
	#[serde(default)]
	pub messages: Vec<Vec<CaptionLine>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryItem {
	pub image: String,
	pub captions: Vec<CaptionLine>,
}

impl PhotosResponse {
	/// The server signals failure with any truthy `error` value.
	pub fn is_error(&self) -> bool {
		match &self.error {
			None | Some(Value::Null) => false,
			Some(Value::Bool(flag)) => *flag,
			Some(Value::String(text)) => !text.is_empty(),
			Some(Value::Number(num)) => num.as_f64() != Some(0.0),
			Some(_) => true,
		}
	}

	/// Photos paired with their caption lines, in response order. A missing
	/// or empty `messages` entry leaves the frame caption-free.
	pub fn into_items(self) -> Vec<GalleryItem> {
		let mut captions = self.messages.into_iter();
		self.photos
			.into_iter()
			.map(|image| GalleryItem {
				image,
				captions: captions.next().unwrap_or_default(),
			})
			.collect()
	}
}

impl GalleryItem {
	pub fn data_url(&self) -> String {
		format!("data:image/png;base64,{}", self.image)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn response_maps_photos_to_frames_in_order() {
		let body = r#"{
			"photos": ["aGVsbG8=", "d29ybGQ="],
			"messages": [[{"text": "Start", "is_title": true}], []]
		}"#;
		let response: PhotosResponse = serde_json::from_str(body).unwrap();
		assert!(!response.is_error());

		let items = response.into_items();
		assert_eq!(items.len(), 2);
		assert_eq!(items[0].image, "aGVsbG8=");
		assert_eq!(
			items[0].captions,
			vec![CaptionLine {
				text: "Start".into(),
				is_title: true,
			}]
		);
		assert!(items[1].captions.is_empty());
	}

	#[test]
	fn missing_messages_leaves_frames_caption_free() {
		let response: PhotosResponse = serde_json::from_str(r#"{"photos": ["YQ=="]}"#).unwrap();

		let items = response.into_items();
		assert_eq!(items.len(), 1);
		assert!(items[0].captions.is_empty());
	}

	#[test]
	fn data_url_prefixes_base64_payload() {
		let item = GalleryItem {
			image: "aGVsbG8=".into(),
			captions: Vec::new(),
		};
		assert_eq!(item.data_url(), "data:image/png;base64,aGVsbG8=");
	}

	#[test]
	fn truthy_error_values_fail() {
		for body in [
			r#"{"error": true}"#,
			r#"{"error": "No graph found"}"#,
			r#"{"error": 1}"#,
			r#"{"error": {"code": 400}}"#,
		] {
			let response: PhotosResponse = serde_json::from_str(body).unwrap();
			assert!(response.is_error(), "expected error for {body}");
		}
	}

	#[test]
	fn falsy_error_values_pass() {
		for body in [
			r#"{}"#,
			r#"{"error": null}"#,
			r#"{"error": false}"#,
			r#"{"error": ""}"#,
			r#"{"error": 0}"#,
		] {
			let response: PhotosResponse = serde_json::from_str(body).unwrap();
			assert!(!response.is_error(), "expected success for {body}");
		}
	}

	#[test]
	fn caption_title_flag_defaults_to_false() {
		let line: CaptionLine = serde_json::from_str(r#"{"text": "plain"}"#).unwrap();
		assert!(!line.is_title);
	}
}
