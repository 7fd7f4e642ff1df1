pub mod composite_observer;
pub mod logging_observer;
pub mod memory_directory;

pub use composite_observer::*;
pub use logging_observer::*;
pub use memory_directory::*;
