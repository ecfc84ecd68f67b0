//! skywalker-core: AI-assisted security dashboard library

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod gateway;
pub mod gemini;
pub mod i18n;
pub mod models;
pub mod store;

pub use error::{Error, Result};
