pub mod document_routes;
pub mod health_routes;

pub use document_routes::*;
pub use health_routes::*;
