pub mod error;
pub mod formatter;
pub mod merger;
pub mod outcome;
pub mod service;
