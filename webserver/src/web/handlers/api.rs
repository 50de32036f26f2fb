//! Commission REST API handlers
//!
//! Thin adapters: validate the request, call the engine, serialize the result.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::HeaderMap,
    response::Json,
};
use commission::{DataProvider, LevelDistribution, NetworkCommissions, NetworkEarnings, PeriodCommission};
use rust_decimal::Decimal;
use shared::{SaleId, UserId};

use crate::error::ApiError;
use crate::web::query::{rejected, CalculateQuery, LevelCommissionQuery};
use crate::webserver_impl::WebServer;

/// Header carrying the caller's role for network queries
pub const USER_ROLE_HEADER: &str = "user-role";

/// Sale used by the fixed-amount smoke route
const SMOKE_TEST_SALE: &str = "sale-1";

/// Period commission - /commission/calculate
pub async fn calculate_commission<D>(
    State(server): State<WebServer<D>>,
    query: Result<Query<CalculateQuery>, QueryRejection>,
) -> Result<Json<PeriodCommission>, ApiError>
where
    D: DataProvider + 'static,
{
    let Query(query) = query.map_err(rejected)?;
    let (user_id, period) = query.validate()?;

    let summary = server
        .engine()
        .calculate_period_commission(&user_id, period.month(), period.year())
        .await?;

    Ok(Json(summary))
}

/// Level distribution - /commission/level-commission
pub async fn level_commission<D>(
    State(server): State<WebServer<D>>,
    query: Result<Query<LevelCommissionQuery>, QueryRejection>,
) -> Result<Json<LevelDistribution>, ApiError>
where
    D: DataProvider + 'static,
{
    let Query(query) = query.map_err(rejected)?;
    let (sale_id, sale_amount) = query.validate()?;

    let distribution = server
        .engine()
        .distribute_level_commission(&sale_id, sale_amount)
        .await?;

    Ok(Json(distribution))
}

/// Direct referral commissions - /commission/network/:userId
pub async fn network_commissions<D>(
    State(server): State<WebServer<D>>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<NetworkCommissions>, ApiError>
where
    D: DataProvider + 'static,
{
    let role = headers
        .get(USER_ROLE_HEADER)
        .and_then(|value| value.to_str().ok());

    let network = server
        .engine()
        .get_direct_referral_commissions(&UserId::new(user_id), role)
        .await?;

    Ok(Json(network))
}

/// Network earnings - /commission/network-earnings/:userId
pub async fn network_earnings<D>(
    State(server): State<WebServer<D>>,
    Path(user_id): Path<String>,
) -> Result<Json<NetworkEarnings>, ApiError>
where
    D: DataProvider + 'static,
{
    let earnings = server
        .engine()
        .calculate_network_earnings(&UserId::new(user_id))
        .await?;

    Ok(Json(earnings))
}

/// Distribution of `sale-1` at 1.00 - /commission/test-mlm
pub async fn test_mlm<D>(State(server): State<WebServer<D>>) -> Result<Json<LevelDistribution>, ApiError>
where
    D: DataProvider + 'static,
{
    let distribution = server
        .engine()
        .distribute_level_commission(&SaleId::from(SMOKE_TEST_SALE), Decimal::ONE)
        .await?;

    Ok(Json(distribution))
}
