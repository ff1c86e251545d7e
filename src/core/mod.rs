//! Error handling, logging and configuration

pub mod error;
pub mod logging;
pub mod config;

pub use error::{Error, Result};
pub use config::ConvertConfig;
