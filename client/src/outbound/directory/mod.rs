//! Reqwest-backed adapter for the [`UserDirectory`] port.
//!
//! [`UserDirectory`]: crate::domain::ports::UserDirectory

mod dto;
mod http_directory;

pub use http_directory::{DEFAULT_DIRECTORY_ENDPOINT, HttpUserDirectory};
