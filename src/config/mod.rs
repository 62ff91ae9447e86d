//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::SatchelPaths;
pub use settings::Settings;
