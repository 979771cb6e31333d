// ============================================================================
// STORAGE - Almacén clave/valor (localStorage o memoria)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};

pub const LS_REPORTS: &str = "gronkilde_reports";
pub const LS_DEVICE: &str = "gronkilde_device";
pub const LS_LIKES: &str = "gronkilde_likes";
pub const LS_ROLE: &str = "gronkilde_role";

#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    Unavailable,
    Write { key: String, reason: String },
    Serialize(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "localStorage no disponible"),
            StorageError::Write { key, reason } => {
                write!(f, "Error guardando '{}': {}", key, reason)
            }
            StorageError::Serialize(msg) => write!(f, "Error serializando: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Blob store de strings indexado por clave
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub type SharedStore = Rc<dyn KeyValueStore>;

/// localStorage del navegador (vía gloo-storage)
pub struct BrowserStorage {
    _private: (),
}

impl BrowserStorage {
    /// Falla si el navegador no expone localStorage (modo privado puede bloquearlo)
    pub fn open() -> Result<Self, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { _private: () })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

/// Almacén en memoria: fallback sin localStorage y backend de los tests
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Copia en memoria delante de otro store. Lo escrito se lee de la copia aunque
/// el backend rechace la escritura (cuota llena, storage bloqueado).
pub struct CachedStore {
    backend: SharedStore,
    cache: RefCell<HashMap<String, String>>,
}

impl CachedStore {
    pub fn new(backend: SharedStore) -> Self {
        Self {
            backend,
            cache: RefCell::new(HashMap::new()),
        }
    }
}

impl KeyValueStore for CachedStore {
    fn get(&self, key: &str) -> Option<String> {
        if let Some(value) = self.cache.borrow().get(key) {
            return Some(value.clone());
        }
        let value = self.backend.get(key)?;
        self.cache.borrow_mut().insert(key.to_string(), value.clone());
        Some(value)
    }

    /// Devuelve el error del backend; la copia en memoria ya quedó actualizada
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.cache.borrow_mut().insert(key.to_string(), value.to_string());
        self.backend.set(key, value)
    }
}

/// Abre localStorage o cae a memoria (la sesión funciona, pero no persiste)
pub fn open_default_store() -> SharedStore {
    match BrowserStorage::open() {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            log::warn!("⚠️ [STORAGE] {}, usando memoria", e);
            Rc::new(MemoryStorage::new())
        }
    }
}

/// Lee JSON de `key`; ausente o corrupto = `T::default()`
pub fn load_json_or_default<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = store.get(key) else {
        return T::default();
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("⚠️ [STORAGE] '{}' corrupto, se usa valor vacío: {}", key, e);
            T::default()
        }
    }
}

pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))?;
    store.set(key, &json)
}

/// Escalar string: acepta JSON (`"organizer"`) y el formato crudo antiguo (`organizer`)
pub fn load_scalar(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    let raw = store.get(key)?;
    match serde_json::from_str::<String>(&raw) {
        Ok(value) => Some(value),
        Err(_) => Some(raw),
    }
}

/// Backend de tests que rechaza toda escritura (cuota llena)
#[cfg(test)]
pub struct FailingStore;

#[cfg(test)]
impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write {
            key: key.to_string(),
            reason: "QuotaExceededError".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_default() {
        let store = MemoryStorage::new();
        let reports: Vec<u32> = load_json_or_default(&store, LS_REPORTS);
        assert!(reports.is_empty());
    }

    #[test]
    fn test_corrupt_json_is_swallowed() {
        let store = MemoryStorage::new();
        store.set(LS_LIKES, "{not json").unwrap();
        let likes: HashMap<String, HashMap<String, bool>> = load_json_or_default(&store, LS_LIKES);
        assert!(likes.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStorage::new();
        save_json(&store, "k", &vec![1, 2, 3]).unwrap();
        assert_eq!(store.get("k").as_deref(), Some("[1,2,3]"));
        let back: Vec<i32> = load_json_or_default(&store, "k");
        assert_eq!(back, vec![1, 2, 3]);
    }

    #[test]
    fn test_scalar_accepts_json_and_legacy_raw() {
        let store = MemoryStorage::new();
        store.set(LS_ROLE, "\"volunteer\"").unwrap();
        assert_eq!(load_scalar(&store, LS_ROLE).as_deref(), Some("volunteer"));

        store.set(LS_ROLE, "organizer").unwrap();
        assert_eq!(load_scalar(&store, LS_ROLE).as_deref(), Some("organizer"));

        assert_eq!(load_scalar(&store, LS_DEVICE), None);
    }

    #[test]
    fn test_cached_store_keeps_rejected_writes() {
        let store = CachedStore::new(Rc::new(FailingStore));
        let result = save_json(&store, LS_ROLE, "volunteer");
        assert!(matches!(result, Err(StorageError::Write { .. })));
        assert_eq!(load_scalar(&store, LS_ROLE).as_deref(), Some("volunteer"));
    }

    #[test]
    fn test_cached_store_reads_through_to_backend() {
        let backend = Rc::new(MemoryStorage::new());
        backend.set(LS_REPORTS, "[]").unwrap();
        let store = CachedStore::new(backend.clone());
        assert_eq!(store.get(LS_REPORTS).as_deref(), Some("[]"));

        store.set(LS_REPORTS, "[1]").unwrap();
        assert_eq!(backend.get(LS_REPORTS).as_deref(), Some("[1]"));
    }
}
