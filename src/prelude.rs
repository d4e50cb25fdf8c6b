pub use crate::core::{HeaderPolicy, HelmetConfig, HelmetConfigBuilder, HstsPolicy};
pub use crate::error::HelmetError;
pub use crate::middleware::{helmet, helmet_with, Helmet};
