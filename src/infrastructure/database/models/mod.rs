pub mod document_model;
pub mod faq_model;

pub use document_model::*;
pub use faq_model::*;
