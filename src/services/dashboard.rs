use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::models::{BudgetSummary, ChartData};

pub async fn summary(api: &ApiClient) -> ApiResult<BudgetSummary> {
    api.get_data("/dashboard/summary").await
}

pub async fn charts(api: &ApiClient) -> ApiResult<ChartData> {
    api.get_data("/dashboard/charts").await
}

/// Both dashboard reads, each with its own outcome so one failing does
/// not hide the other.
pub struct Overview {
    pub summary: ApiResult<BudgetSummary>,
    pub charts: ApiResult<ChartData>,
}

pub async fn overview(api: &ApiClient) -> Overview {
    Overview {
        summary: summary(api).await,
        charts: charts(api).await,
    }
}
