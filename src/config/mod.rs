//! Configuration and path management for saldo

pub mod paths;
pub mod settings;

pub use paths::SaldoPaths;
pub use settings::Settings;
