//! Infrastructure layer providing external service integrations.
//!
//! This module contains the navigation payload codec, configuration
//! loading, and logging setup.

pub mod config;
pub mod logging;
pub mod transfer;

pub use config::*;
pub use logging::*;
pub use transfer::{TransferError, TransferMessage, TransferResult};
