pub mod document;
pub mod faq;

pub use document::Document;
pub use faq::Faq;
