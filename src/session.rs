//! Where the bearer token lives between page loads.
//!
//! The token is the only state that survives a reload. Login writes it,
//! logout removes it, and every request reads it through [`Session`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{ApiError, ApiResult};

pub trait TokenStore {
    fn load(&self) -> ApiResult<Option<String>>;
    fn save(&self, token: &str) -> ApiResult<()>;
    fn clear(&self) -> ApiResult<()>;
}

/// Token kept in `window.localStorage` under a fixed key.
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> ApiResult<web_sys::Storage> {
        let window =
            web_sys::window().ok_or_else(|| ApiError::Storage("no window".to_string()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(ApiError::Storage("localStorage disabled".to_string())),
            Err(err) => Err(ApiError::Storage(format!("{:?}", err))),
        }
    }
}

impl TokenStore for LocalStorageStore {
    fn load(&self) -> ApiResult<Option<String>> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|err| ApiError::Storage(format!("{:?}", err)))
    }

    fn save(&self, token: &str) -> ApiResult<()> {
        self.storage()?
            .set_item(&self.key, token)
            .map_err(|err| ApiError::Storage(format!("{:?}", err)))
    }

    fn clear(&self) -> ApiResult<()> {
        self.storage()?
            .remove_item(&self.key)
            .map_err(|err| ApiError::Storage(format!("{:?}", err)))
    }
}

#[derive(Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> ApiResult<Option<String>> {
        Ok(self.token.borrow().clone())
    }

    fn save(&self, token: &str) -> ApiResult<()> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> ApiResult<()> {
        self.token.borrow_mut().take();
        Ok(())
    }
}

/// Session context handed to the API client and the auth flows.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Rc<dyn TokenStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryTokenStore::default()))
    }

    /// Storage failures read as "signed out".
    pub fn token(&self) -> Option<String> {
        match self.store.load() {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(err) => {
                log::warn!("could not read session token: {}", err);
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn sign_in(&self, token: &str) -> ApiResult<()> {
        self.store.save(token)?;
        log::info!("session token stored");
        Ok(())
    }

    pub fn sign_out(&self) {
        if let Err(err) = self.store.clear() {
            log::warn!("could not clear session token: {}", err);
        }
        log::info!("session cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_not_a_session() {
        let session = Session::new(Rc::new(MemoryTokenStore::with_token("")));
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn sign_in_then_out() {
        let session = Session::in_memory();
        assert!(!session.is_authenticated());

        session.sign_in("jwt-abc").unwrap();
        assert_eq!(session.token().as_deref(), Some("jwt-abc"));

        session.sign_out();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn clones_share_the_same_store() {
        let session = Session::in_memory();
        let other = session.clone();
        session.sign_in("shared").unwrap();
        assert_eq!(other.token().as_deref(), Some("shared"));
    }

    struct BrokenStore;

    impl TokenStore for BrokenStore {
        fn load(&self) -> ApiResult<Option<String>> {
            Err(ApiError::Storage("quota".to_string()))
        }
        fn save(&self, _: &str) -> ApiResult<()> {
            Err(ApiError::Storage("quota".to_string()))
        }
        fn clear(&self) -> ApiResult<()> {
            Err(ApiError::Storage("quota".to_string()))
        }
    }

    #[test]
    fn storage_failures_do_not_panic() {
        let session = Session::new(Rc::new(BrokenStore));
        assert!(!session.is_authenticated());
        assert!(matches!(session.sign_in("x"), Err(ApiError::Storage(_))));
        session.sign_out();
    }
}
