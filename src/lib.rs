pub mod airtable;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod mail;
pub mod models;
pub mod split;
pub mod telemetry;

pub use config::Config;
pub use dispatcher::{Dispatcher, RunSummary};
pub use error::{AppError, Result};

#[cfg(test)]
mod test_support;
