//! Data models for the application

mod issue;

pub use issue::*;
