mod component;
mod state;
mod types;
pub mod validate;

pub use component::{GraphForm, RandomGraphControls};
pub use state::EdgeList;
pub use types::EdgeRow;
