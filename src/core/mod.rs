pub mod config;
pub mod hsts;
pub mod policy;

pub use config::{HelmetConfig, HelmetConfigBuilder, RequestFilter};
pub use hsts::HstsPolicy;
pub use policy::HeaderPolicy;
