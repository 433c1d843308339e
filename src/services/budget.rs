use crate::api::{ApiClient, Method};
use crate::error::ApiResult;
use crate::models::BudgetRequest;

/// Sets (or replaces) this week's budget. The backend works out the week.
pub async fn set_weekly(api: &ApiClient, amount: f64) -> ApiResult<()> {
    api.send(Method::Post, "/budgets", Some(&BudgetRequest { amount }))
        .await?;
    log::info!("weekly budget set to {}", amount);
    Ok(())
}
