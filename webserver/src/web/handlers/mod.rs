pub mod api;
pub mod health;

pub use api::{
    calculate_commission, level_commission, network_commissions, network_earnings, test_mlm,
    USER_ROLE_HEADER,
};
pub use health::health_check;
