pub mod description;
pub mod error_modal;
pub mod gallery;
pub mod graph_form;
