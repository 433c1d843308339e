use crate::api::{ApiClient, Method, NO_BODY};
use crate::error::ApiResult;
use crate::models::{Category, NewCategory};

pub const DELETE_PROMPT: &str =
    "Are you sure you want to delete this category? Shopping items using it may be affected.";

pub async fn list(api: &ApiClient) -> ApiResult<Vec<Category>> {
    api.get_data("/kategori").await
}

pub async fn create(api: &ApiClient, category: &NewCategory) -> ApiResult<()> {
    api.send(Method::Post, "/kategori", Some(category)).await
}

pub async fn update(api: &ApiClient, id: i64, category: &NewCategory) -> ApiResult<()> {
    api.send(Method::Put, &format!("/kategori/{}", id), Some(category))
        .await
}

pub async fn delete(api: &ApiClient, id: i64) -> ApiResult<()> {
    api.send(Method::Delete, &format!("/kategori/{}", id), NO_BODY)
        .await
}

pub async fn delete_confirmed<F>(
    api: &ApiClient,
    id: i64,
    confirm: F,
) -> ApiResult<Option<Vec<Category>>>
where
    F: FnOnce(&str) -> bool,
{
    if !confirm(DELETE_PROMPT) {
        return Ok(None);
    }
    delete(api, id).await?;
    list(api).await.map(Some)
}

/// Display name for an item's category id.
pub fn name_for(categories: &[Category], id: i64) -> String {
    categories
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Uncategorized".to_string())
}
