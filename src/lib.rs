pub mod constants;
pub mod core;
pub mod error;
pub mod middleware;
pub mod prelude;

// Re-export commonly used types for convenience
pub use crate::core::{HeaderPolicy, HelmetConfig, HelmetConfigBuilder, HstsPolicy, RequestFilter};
pub use error::HelmetError;
pub use middleware::{helmet, helmet_with, Helmet, HelmetService};
