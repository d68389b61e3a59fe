//! Configuration types module

pub mod app;
pub mod backup;
pub mod logging;
pub mod store;

// Re-export main types
pub use app::AppConfig;
pub use backup::BackupConfig;
pub use logging::LoggingConfig;
pub use store::StoreConfig;
