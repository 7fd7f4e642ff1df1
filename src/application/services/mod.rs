pub mod aggregation;
pub mod principal_factory;
pub mod resolver;

pub use aggregation::*;
pub use principal_factory::*;
pub use resolver::*;
