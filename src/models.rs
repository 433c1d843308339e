//! Wire types. Field names follow the backend's JSON exactly; everything
//! here is server-owned and only displayed.

use serde::{Deserialize, Deserializer, Serialize};

/// Successful JSON responses wrap their payload as `{ "data": ... }`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `null` reads as the type's default, like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    #[serde(rename = "id_item", default)]
    pub id: i64,
    #[serde(rename = "id_kategori", default, deserialize_with = "null_as_default")]
    pub category_id: i64,
    #[serde(rename = "nama_item", default)]
    pub name: String,
    #[serde(rename = "jumlah_item", default)]
    pub quantity: i64,
    #[serde(rename = "harga_satuan", default)]
    pub unit_price: f64,
    #[serde(rename = "total_harga", default)]
    pub total: f64,
    #[serde(rename = "nama_kategori", default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchased_date: Option<String>,
}

/// Body of `POST /items` and `PUT /items/{id}`; the total is computed
/// by the server.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewItem {
    #[serde(rename = "nama_item")]
    pub name: String,
    #[serde(rename = "id_kategori")]
    pub category_id: i64,
    #[serde(rename = "jumlah_item")]
    pub quantity: i64,
    #[serde(rename = "harga_satuan")]
    pub unit_price: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "id_kategori", default)]
    pub id: i64,
    #[serde(rename = "nama_kategori", default)]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewCategory {
    #[serde(rename = "nama_kategori")]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BudgetRequest {
    #[serde(rename = "jumlah_anggaran")]
    pub amount: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    #[serde(rename = "total_belanja", default, deserialize_with = "null_as_default")]
    pub spent: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub budget: f64,
    #[serde(rename = "sisa_budget", default, skip_serializing_if = "Option::is_none")]
    pub remaining: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorySpending {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklySpending {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "pengeluaran", default)]
    pub spent: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(rename = "pie_chart", default, deserialize_with = "null_as_default")]
    pub by_category: Vec<CategorySpending>,
    #[serde(rename = "bar_chart", default, deserialize_with = "null_as_default")]
    pub by_week: Vec<WeeklySpending>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(rename = "nama")]
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(rename = "nama", default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}
