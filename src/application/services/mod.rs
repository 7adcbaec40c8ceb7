pub mod faq_synthesis;

pub use faq_synthesis::{FaqSynthesisError, FaqSynthesisService};
