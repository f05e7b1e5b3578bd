pub mod error;
pub mod handlers;
pub mod problem;
pub mod routes;

pub use error::*;
pub use problem::*;
pub use routes::*;
