use crate::cart::{Cart, CartError, CartItem, Selection};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Key the cart is persisted under.
pub const CART_STORAGE_KEY: &str = "fooz-cart";

/// Key/value persistence for serialized carts.
pub trait CartStorage {
    fn read(&self, key: &str) -> Result<Option<String>, CartError>;
    fn write(&self, key: &str, value: &str) -> Result<(), CartError>;
}

/// One `<key>.json` file per key inside `dir`.
#[derive(Debug, Clone)]
pub struct JsonFileCartStorage {
    dir: PathBuf,
}

impl JsonFileCartStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonFileCartStorage { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl CartStorage for JsonFileCartStorage {
    fn read(&self, key: &str) -> Result<Option<String>, CartError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CartError::Storage(e.to_string())),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), CartError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| CartError::Storage(e.to_string()))?;
        std::fs::write(self.path_for(key), value).map_err(|e| CartError::Storage(e.to_string()))
    }
}

/// Clones share the same entries, so a store reopened on a clone sees earlier writes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCartStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryCartStorage {
    pub fn new() -> Self {
        InMemoryCartStorage::default()
    }
}

impl CartStorage for InMemoryCartStorage {
    fn read(&self, key: &str) -> Result<Option<String>, CartError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| CartError::Storage("cart storage lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), CartError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CartError::Storage("cart storage lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stored envelope: `{"state": {"items": [...]}, "version": 0}`.
#[derive(Serialize, Deserialize, Debug)]
struct PersistedCart {
    state: Cart,
    #[serde(default)]
    version: u32,
}

/// A cart bound to a storage backend. Loaded on open, saved after every change.
pub struct CartStore<S: CartStorage> {
    storage: S,
    cart: Cart,
}

impl<S: CartStorage> CartStore<S> {
    /// Unreadable saved state starts an empty cart instead of failing.
    pub fn open(storage: S) -> Result<Self, CartError> {
        let cart = match storage.read(CART_STORAGE_KEY)? {
            Some(raw) => match serde_json::from_str::<PersistedCart>(&raw) {
                Ok(persisted) => persisted.state,
                Err(e) => {
                    tracing::warn!("Discarding unreadable saved cart: {}", e);
                    Cart::new()
                }
            },
            None => Cart::new(),
        };

        Ok(CartStore { storage, cart })
    }

    fn save(&self) -> Result<(), CartError> {
        let persisted = PersistedCart {
            state: self.cart.clone(),
            version: 0,
        };
        let raw = serde_json::to_string(&persisted).map_err(|e| CartError::Storage(e.to_string()))?;

        self.storage.write(CART_STORAGE_KEY, &raw)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[CartItem] {
        &self.cart.items
    }

    pub fn add_item(&mut self, selection: Selection, quantity: u32) -> Result<String, CartError> {
        let key = self.cart.add(selection, quantity)?;
        self.save()?;
        Ok(key)
    }

    pub fn remove_item(&mut self, key: &str) -> Result<(), CartError> {
        self.cart.remove(key);
        self.save()
    }

    pub fn set_quantity(&mut self, key: &str, quantity: u32) -> Result<(), CartError> {
        self.cart.set_quantity(key, quantity)?;
        self.save()
    }

    pub fn clear(&mut self) -> Result<(), CartError> {
        self.cart.clear();
        self.save()
    }

    pub fn total(&self) -> f64 {
        self.cart.total()
    }

    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }
}
