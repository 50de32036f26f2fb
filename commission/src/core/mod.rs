//! Core business logic modules
//!
//! Pure commission arithmetic with no I/O dependencies. The engine resolves
//! records through a data provider and hands them to these modules.

pub mod distribution;
pub mod earnings;
pub mod network;
pub mod period;
pub mod rates;

pub use distribution::{CommissionLine, LevelDistribution, Verification};
pub use earnings::{EarningsAccumulator, EarningsEntry, NetworkEarnings};
pub use network::{CallerRole, NetworkCommissions, ReferralCommission};
pub use period::PeriodCommission;
