//! Configuration Stores
//!
//! | Store | Description |
//! |-------|-------------|
//! | [`JsonFileConfigurationStore`] | One JSON document per section in a directory |
//! | [`InMemoryConfigurationStore`] | Concurrent map with read failure and rejection injection |
//!
//! Both validate documents with [`validate_section`] before accepting them.

mod json_file;
mod memory;
mod validation;

pub use json_file::JsonFileConfigurationStore;
pub use memory::InMemoryConfigurationStore;
pub use validation::validate_section;
