//! Commission engine for a multi-level referral sales network
//!
//! Splits each sale across the seller and up to three upstream sponsors using a
//! fixed rate table, and aggregates period, referral and network earnings on
//! top of a read-only [`DataProvider`].

pub mod core;
pub mod engine;
pub mod error;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use core::{
    CommissionLine, EarningsEntry, LevelDistribution, NetworkCommissions, NetworkEarnings,
    PeriodCommission, ReferralCommission, Verification,
};
pub use engine::CommissionEngine;
pub use error::{CommissionError, CommissionResult, DataProviderError, DataResult, ErrorKind};
pub use services::{Dataset, InMemoryDataProvider};
pub use traits::{DataProvider, MockDataProvider};
