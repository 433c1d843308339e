use crate::api::{ApiClient, Method, NO_BODY};
use crate::error::ApiResult;
use crate::models::{NewItem, ShoppingItem};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this item?";

pub async fn list(api: &ApiClient) -> ApiResult<Vec<ShoppingItem>> {
    api.get_data("/items").await
}

pub async fn create(api: &ApiClient, item: &NewItem) -> ApiResult<()> {
    api.send(Method::Post, "/items", Some(item)).await
}

pub async fn update(api: &ApiClient, id: i64, item: &NewItem) -> ApiResult<()> {
    api.send(Method::Put, &format!("/items/{}", id), Some(item)).await
}

pub async fn delete(api: &ApiClient, id: i64) -> ApiResult<()> {
    api.send(Method::Delete, &format!("/items/{}", id), NO_BODY).await
}

/// Deletes after `confirm` agrees and returns the refreshed list.
/// `Ok(None)` means the user backed out and nothing was sent.
pub async fn delete_confirmed<F>(
    api: &ApiClient,
    id: i64,
    confirm: F,
) -> ApiResult<Option<Vec<ShoppingItem>>>
where
    F: FnOnce(&str) -> bool,
{
    if !confirm(DELETE_PROMPT) {
        log::debug!("delete of item {} cancelled", id);
        return Ok(None);
    }
    delete(api, id).await?;
    list(api).await.map(Some)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;

    use super::*;
    use crate::api::transport::fake::FakeTransport;
    use crate::config::AppConfig;
    use crate::session::Session;

    fn client(fake: FakeTransport) -> (ApiClient, Rc<FakeTransport>) {
        let fake = Rc::new(fake);
        let api = ApiClient::new(&AppConfig::default(), Session::in_memory(), fake.clone());
        (api, fake)
    }

    #[test]
    fn list_reads_envelope() {
        let (api, fake) = client(FakeTransport::default().reply(
            200,
            r#"{"data":[{"id_item":1,"id_kategori":2,"nama_item":"Telur","jumlah_item":1,"harga_satuan":28000,"total_harga":28000}]}"#,
        ));
        let items = block_on(list(&api)).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Telur");
        assert_eq!(fake.sent()[0].url, "http://localhost:8080/api/v1/items");
    }

    #[test]
    fn empty_list_envelope() {
        let (api, _) = client(FakeTransport::default().reply(200, r#"{"data":null}"#));
        assert!(block_on(list(&api)).unwrap().is_empty());
    }

    #[test]
    fn update_targets_item_path() {
        let (api, fake) = client(FakeTransport::default());
        let item = NewItem {
            name: "Minyak".into(),
            category_id: 3,
            quantity: 1,
            unit_price: 18500.0,
        };
        block_on(update(&api, 12, &item)).unwrap();
        assert_eq!(fake.sent()[0].method, Method::Put);
        assert!(fake.sent()[0].url.ends_with("/items/12"));
        assert_eq!(fake.sent_json(0)["nama_item"], "Minyak");
    }

    #[test]
    fn declined_delete_sends_nothing() {
        let (api, fake) = client(FakeTransport::default());
        let mut asked = None;
        let outcome = block_on(delete_confirmed(&api, 5, |prompt| {
            asked = Some(prompt.to_string());
            false
        }))
        .unwrap();

        assert_eq!(outcome, None);
        assert_eq!(asked.as_deref(), Some(DELETE_PROMPT));
        assert!(fake.sent().is_empty());
    }

    #[test]
    fn confirmed_delete_then_refetch() {
        let (api, fake) = client(
            FakeTransport::default()
                .reply(200, r#"{"message":"Item berhasil dihapus"}"#)
                .reply(200, r#"{"data":[]}"#),
        );
        let outcome = block_on(delete_confirmed(&api, 5, |_| true)).unwrap();

        assert_eq!(outcome, Some(Vec::new()));
        let sent = fake.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].method, Method::Delete);
        assert!(sent[0].url.ends_with("/items/5"));
        assert_eq!(sent[1].method, Method::Get);
    }

    #[test]
    fn failed_delete_does_not_refetch() {
        let (api, fake) = client(
            FakeTransport::default().reply(500, r#"{"error":"Gagal menghapus item"}"#),
        );
        let err = block_on(delete_confirmed(&api, 5, |_| true)).unwrap_err();
        assert_eq!(err.to_string(), "Gagal menghapus item");
        assert_eq!(fake.sent().len(), 1);
    }
}
