mod api;
mod component;
mod types;

pub use component::DemoGallery;
pub use types::{CaptionLine, GalleryItem, PhotosResponse};
