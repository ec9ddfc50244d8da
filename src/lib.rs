pub mod analyzers;
pub mod cli;
pub mod error;
pub mod models;
pub mod query;
pub mod readers;
pub mod utils;
pub mod writers;

pub use error::{AnalyticsError, Result};
