//! Form state behind each page, with the checks that run before any
//! request goes out.

use crate::api::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    BudgetSummary, Category, LoginRequest, NewCategory, NewItem, RegisterRequest, ShoppingItem,
};
use crate::services::{budget, categories, dashboard, items};

/// Outcome of the reload that follows a successful save. An `Err` here
/// means the write went through but the fresh data could not be fetched.
pub type Refreshed<T> = ApiResult<T>;

fn required(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn positive_int(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok().filter(|v| *v > 0)
}

fn positive_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> ApiResult<LoginRequest> {
        match (required(&self.username), self.password.is_empty()) {
            (Some(username), false) => Ok(LoginRequest {
                username,
                password: self.password.clone(),
            }),
            _ => Err(ApiError::validation("Username and password are required.")),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
}

impl RegisterForm {
    pub fn validate(&self) -> ApiResult<RegisterRequest> {
        let username = required(&self.username);
        let name = required(&self.name);
        let email = required(&self.email);
        match (username, name, email, self.password.is_empty()) {
            (Some(username), Some(name), Some(email), false) => Ok(RegisterRequest {
                username,
                password: self.password.clone(),
                name,
                email,
            }),
            _ => Err(ApiError::validation("All fields are required.")),
        }
    }
}

/// Add and edit form for a shopping item. Inputs stay as typed text so
/// the view can bind them directly.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemForm {
    pub name: String,
    pub category_id: String,
    pub quantity: String,
    pub unit_price: String,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category_id: String::new(),
            quantity: "1".to_string(),
            unit_price: String::new(),
        }
    }
}

impl ItemForm {
    pub fn from_item(item: &ShoppingItem) -> Self {
        let category_id = if item.category_id > 0 {
            item.category_id.to_string()
        } else {
            String::new()
        };
        Self {
            name: item.name.clone(),
            category_id,
            quantity: item.quantity.max(1).to_string(),
            unit_price: item.unit_price.to_string(),
        }
    }

    pub fn validate(&self) -> ApiResult<NewItem> {
        let name = required(&self.name);
        let category_id = positive_int(&self.category_id);
        let quantity = positive_int(&self.quantity);
        let unit_price = positive_number(&self.unit_price);

        match (name, category_id, quantity, unit_price) {
            (Some(name), Some(category_id), Some(quantity), Some(unit_price)) => Ok(NewItem {
                name,
                category_id,
                quantity,
                unit_price,
            }),
            _ => Err(ApiError::validation(
                "All fields are required and must be valid.",
            )),
        }
    }

    /// Creates the item. Once the server accepts it the form is reset and
    /// the inner result carries the refetched list; on failure the typed
    /// values are kept.
    pub async fn submit(&mut self, api: &ApiClient) -> ApiResult<Refreshed<Vec<ShoppingItem>>> {
        let payload = self.validate()?;
        items::create(api, &payload).await?;
        *self = Self::default();
        Ok(items::list(api).await)
    }

    pub async fn save_edit(&self, api: &ApiClient, id: i64) -> ApiResult<Refreshed<Vec<ShoppingItem>>> {
        let payload = self.validate()?;
        items::update(api, id, &payload).await?;
        Ok(items::list(api).await)
    }
}

/// One form for both adding and renaming a category.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryForm {
    pub name: String,
    pub editing: Option<i64>,
}

impl CategoryForm {
    pub fn start_edit(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            editing: Some(category.id),
        }
    }

    pub fn validate(&self) -> ApiResult<NewCategory> {
        required(&self.name)
            .map(|name| NewCategory { name })
            .ok_or_else(|| ApiError::validation("Category name cannot be empty."))
    }

    pub async fn submit(&mut self, api: &ApiClient) -> ApiResult<Refreshed<Vec<Category>>> {
        let payload = self.validate()?;
        match self.editing {
            Some(id) => categories::update(api, id, &payload).await?,
            None => categories::create(api, &payload).await?,
        }
        *self = Self::default();
        Ok(categories::list(api).await)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BudgetForm {
    pub amount: String,
}

impl BudgetForm {
    pub fn prefilled(summary: &BudgetSummary) -> Self {
        let amount = if summary.budget > 0.0 {
            summary.budget.to_string()
        } else {
            String::new()
        };
        Self { amount }
    }

    pub fn validate(&self) -> ApiResult<f64> {
        positive_number(&self.amount)
            .ok_or_else(|| ApiError::validation("Budget amount must be a positive number."))
    }

    /// Saves the budget; the inner result is the refreshed summary.
    pub async fn submit(&self, api: &ApiClient) -> ApiResult<Refreshed<BudgetSummary>> {
        let amount = self.validate()?;
        budget::set_weekly(api, amount).await?;
        Ok(dashboard::summary(api).await)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;
    use serde_json::json;

    use super::*;
    use crate::api::transport::fake::FakeTransport;
    use crate::api::Method;
    use crate::config::AppConfig;
    use crate::session::Session;

    fn client(fake: FakeTransport) -> (ApiClient, Rc<FakeTransport>) {
        let fake = Rc::new(fake);
        let api = ApiClient::new(&AppConfig::default(), Session::in_memory(), fake.clone());
        (api, fake)
    }

    fn beras() -> ItemForm {
        ItemForm {
            name: "Beras".into(),
            category_id: "1".into(),
            quantity: "2".into(),
            unit_price: "15000".into(),
        }
    }

    #[test]
    fn add_item_posts_once_then_resets_and_refetches() {
        let (api, fake) = client(
            FakeTransport::default()
                .reply(201, r#"{"message":"Item berhasil ditambahkan"}"#)
                .reply(
                    200,
                    r#"{"data":[{"id_item":1,"id_kategori":1,"nama_item":"Beras","jumlah_item":2,"harga_satuan":15000,"total_harga":30000}]}"#,
                ),
        );
        let mut form = beras();

        let list = block_on(form.submit(&api)).unwrap().unwrap();

        let sent = fake.sent();
        let posts: Vec<_> = sent.iter().filter(|r| r.method == Method::Post).collect();
        assert_eq!(posts.len(), 1);
        assert!(posts[0].url.ends_with("/items"));
        let body = fake.sent_json(0);
        assert_eq!(body.as_object().unwrap().len(), 4);
        assert_eq!(body["nama_item"], "Beras");
        assert_eq!(body["id_kategori"], 1);
        assert_eq!(body["jumlah_item"], 2);
        assert_eq!(body["harga_satuan"].as_f64(), Some(15000.0));

        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].method, Method::Get);
        assert!(sent[1].url.ends_with("/items"));

        assert_eq!(form, ItemForm::default());
        assert_eq!(list[0].total, 30000.0);
    }

    #[test]
    fn failed_add_keeps_form_values() {
        let (api, fake) =
            client(FakeTransport::default().reply(400, r#"{"error":"Kategori tidak ditemukan"}"#));
        let mut form = beras();

        let err = block_on(form.submit(&api)).unwrap_err();

        assert_eq!(err.to_string(), "Kategori tidak ditemukan");
        assert_eq!(form, beras());
        assert_eq!(fake.sent().len(), 1);
    }

    #[test]
    fn created_item_resets_form_even_when_refetch_fails() {
        let (api, fake) = client(
            FakeTransport::default()
                .reply(201, r#"{"message":"Item berhasil ditambahkan"}"#)
                .reply(500, r#"{"error":"db down"}"#),
        );
        let mut form = beras();

        let refreshed = block_on(form.submit(&api)).unwrap();

        assert_eq!(refreshed.unwrap_err().to_string(), "db down");
        assert_eq!(form, ItemForm::default());
        assert_eq!(fake.sent().len(), 2);
    }

    #[test]
    fn saved_category_leaves_edit_mode_even_when_refetch_fails() {
        let (api, _fake) = client(
            FakeTransport::default()
                .reply(200, r#"{"message":"ok"}"#)
                .reply(500, ""),
        );
        let mut form = CategoryForm::start_edit(&Category { id: 3, name: "Tagihan".into() });

        let refreshed = block_on(form.submit(&api)).unwrap();

        assert_eq!(refreshed.unwrap_err().status(), Some(500));
        assert_eq!(form, CategoryForm::default());
    }

    #[test]
    fn invalid_item_never_reaches_network() {
        let (api, fake) = client(FakeTransport::default());
        let cases = [
            ItemForm { name: "  ".into(), ..beras() },
            ItemForm { category_id: "".into(), ..beras() },
            ItemForm { quantity: "0".into(), ..beras() },
            ItemForm { quantity: "1.5".into(), ..beras() },
            ItemForm { unit_price: "-100".into(), ..beras() },
            ItemForm { unit_price: "abc".into(), ..beras() },
        ];
        for mut form in cases {
            let err = block_on(form.submit(&api)).unwrap_err();
            assert!(matches!(err, ApiError::Validation(_)), "{:?}", form);
        }
        assert!(fake.sent().is_empty());
    }

    #[test]
    fn item_name_is_trimmed() {
        let form = ItemForm { name: "  Gula  ".into(), ..beras() };
        assert_eq!(form.validate().unwrap().name, "Gula");
    }

    #[test]
    fn edit_form_from_item_and_save() {
        let item = ShoppingItem {
            id: 4,
            category_id: 0,
            name: "Sabun".into(),
            quantity: 0,
            unit_price: 4500.0,
            ..ShoppingItem::default()
        };
        let mut form = ItemForm::from_item(&item);
        assert_eq!(form.category_id, "");
        assert_eq!(form.quantity, "1");
        assert!(form.validate().is_err());

        form.category_id = "2".into();
        let (api, fake) = client(FakeTransport::default());
        block_on(form.save_edit(&api, item.id)).unwrap().unwrap();
        assert_eq!(fake.sent()[0].method, Method::Put);
        assert!(fake.sent()[0].url.ends_with("/items/4"));
        assert_eq!(fake.sent_json(0)["harga_satuan"].as_f64(), Some(4500.0));
    }

    #[test]
    fn category_form_create_and_edit() {
        let (api, fake) = client(FakeTransport::default());

        let mut form = CategoryForm { name: " Hiburan ".into(), editing: None };
        block_on(form.submit(&api)).unwrap();
        assert_eq!(form, CategoryForm::default());

        let mut form = CategoryForm::start_edit(&Category { id: 3, name: "Tagihan".into() });
        form.name = "Tagihan Bulanan".into();
        block_on(form.submit(&api)).unwrap();

        let sent = fake.sent();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(fake.sent_json(0), json!({"nama_kategori": "Hiburan"}));
        assert_eq!(sent[2].method, Method::Put);
        assert!(sent[2].url.ends_with("/kategori/3"));
        assert_eq!(form.editing, None);
    }

    #[test]
    fn empty_category_is_rejected() {
        let (api, fake) = client(FakeTransport::default());
        let mut form = CategoryForm { name: "   ".into(), editing: Some(1) };
        assert!(block_on(form.submit(&api)).is_err());
        assert_eq!(form.editing, Some(1));
        assert!(fake.sent().is_empty());
    }

    #[test]
    fn budget_form_validates_and_refreshes_summary() {
        let (api, fake) = client(
            FakeTransport::default()
                .reply(200, r#"{"message":"ok"}"#)
                .reply(200, r#"{"data":{"total_belanja":850000,"budget":1200000,"sisa_budget":350000}}"#),
        );
        for bad in ["", "0", "-5", "lots"] {
            assert!(BudgetForm { amount: bad.into() }.validate().is_err());
        }

        let summary = block_on(BudgetForm { amount: "1200000".into() }.submit(&api))
            .unwrap()
            .unwrap();
        assert_eq!(summary.budget, 1_200_000.0);
        assert_eq!(fake.sent().len(), 2);
        assert_eq!(BudgetForm::prefilled(&summary).amount, "1200000");
        assert_eq!(BudgetForm::prefilled(&BudgetSummary::default()).amount, "");
    }

    #[test]
    fn auth_forms_require_every_field() {
        assert!(LoginForm::default().validate().is_err());
        let login = LoginForm { username: " sari ".into(), password: "x".into() };
        assert_eq!(login.validate().unwrap().username, "sari");

        let register = RegisterForm {
            username: "sari".into(),
            password: "rahasia".into(),
            name: "Sari".into(),
            email: "".into(),
        };
        assert!(register.validate().is_err());
        let register = RegisterForm { email: "s@x.id".into(), ..register };
        assert_eq!(register.validate().unwrap().email, "s@x.id");
    }
}
