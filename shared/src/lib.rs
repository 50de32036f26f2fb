//! Shared types for the MLM commission service
//!
//! Contains the domain records read from the data provider (users, sales,
//! referral edges), the reporting period, and the logging setup used by every
//! crate in the workspace.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
