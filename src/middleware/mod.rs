pub mod helmet;

pub use helmet::{helmet, helmet_with, is_secure, Helmet, HelmetService};
