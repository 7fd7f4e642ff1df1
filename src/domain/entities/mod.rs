pub mod domain;
pub mod principal;
pub mod user;

pub use domain::*;
pub use principal::*;
pub use user::*;
