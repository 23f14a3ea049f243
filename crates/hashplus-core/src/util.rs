//! Common utility functions.

pub mod data;
pub mod domain;
pub mod fs;
pub mod id;
pub mod text;

// Re-export commonly used items
pub use data::{deep_merge, load_yaml, load_yaml_file};
pub use domain::registrable_domain;
pub use fs::expand_path;
pub use id::new_id;
pub use text::bump;
