pub mod config;
pub mod directory;
pub mod observers;
pub mod principal_builder;

pub use config::*;
pub use directory::*;
pub use observers::*;
pub use principal_builder::*;
