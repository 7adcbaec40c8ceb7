pub mod text_generator;

pub use text_generator::{GenerationError, GenerationParams, TextGenerator};
