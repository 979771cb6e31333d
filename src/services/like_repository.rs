// ============================================================================
// LIKE REPOSITORY - Un like por dispositivo y puesto
// ============================================================================

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::Stall;
use crate::utils::storage::{
    load_json_or_default, load_scalar, save_json, SharedStore, LS_DEVICE, LS_LIKES,
};

/// device_id -> { stall_id -> true }
pub type LikeMap = HashMap<String, HashMap<String, bool>>;

#[derive(Clone)]
pub struct LikeRepository {
    store: SharedStore,
}

impl LikeRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Id estable del navegador; se genera la primera vez.
    /// Sobre un `CachedStore` sigue estable aunque no se pueda persistir.
    pub fn device_id(&self) -> String {
        if let Some(id) = load_scalar(self.store.as_ref(), LS_DEVICE).filter(|id| !id.is_empty()) {
            return id;
        }

        let id = generate_device_id();
        if let Err(e) = save_json(self.store.as_ref(), LS_DEVICE, &id) {
            log::error!("❌ [LIKES] No se pudo guardar device id: {}", e);
        } else {
            log::info!("🆔 [LIKES] Nuevo device id {}", id);
        }
        id
    }

    fn load_likes(&self) -> LikeMap {
        load_json_or_default(self.store.as_ref(), LS_LIKES)
    }

    pub fn has_liked(&self, device_id: &str, stall_id: &str) -> bool {
        self.load_likes()
            .get(device_id)
            .and_then(|stalls| stalls.get(stall_id))
            .copied()
            .unwrap_or(false)
    }

    /// Suma un like al contador en memoria del puesto si el dispositivo aún no lo hizo.
    /// Devuelve false para un like repetido.
    pub fn like(&self, device_id: &str, stall: &mut Stall) -> bool {
        if self.has_liked(device_id, &stall.id) {
            return false;
        }

        let mut likes = self.load_likes();
        likes
            .entry(device_id.to_string())
            .or_default()
            .insert(stall.id.clone(), true);
        if let Err(e) = save_json(self.store.as_ref(), LS_LIKES, &likes) {
            log::error!("❌ [LIKES] {} (se mantiene en memoria)", e);
        }

        stall.likes += 1;
        log::info!("👍 [LIKES] {} → {} likes", stall.id, stall.likes);
        true
    }
}

fn generate_device_id() -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("dev_{}", &random[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::{CachedStore, FailingStore, KeyValueStore, MemoryStorage};
    use std::rc::Rc;

    fn stall(id: &str) -> Stall {
        Stall {
            id: id.to_string(),
            name: "Test".to_string(),
            coords: [55.0, 12.0],
            food_type: String::new(),
            energy: String::new(),
            co2_per_meal_kg: 1.0,
            organic_pct: 0.0,
            local_pct: 0.0,
            food_waste_pct: 0.0,
            donates_surplus: false,
            waste_fractions: vec![],
            likes: 3,
        }
    }

    #[test]
    fn test_like_is_idempotent() {
        let repo = LikeRepository::new(Rc::new(MemoryStorage::new()));
        let mut s = stall("s1");

        assert!(!repo.has_liked("dev_a", "s1"));
        assert!(repo.like("dev_a", &mut s));
        assert!(repo.has_liked("dev_a", "s1"));
        assert!(!repo.like("dev_a", &mut s));
        assert_eq!(s.likes, 4);
    }

    #[test]
    fn test_likes_are_per_device_and_stall() {
        let repo = LikeRepository::new(Rc::new(MemoryStorage::new()));
        let mut s1 = stall("s1");
        let mut s2 = stall("s2");

        repo.like("dev_a", &mut s1);
        assert!(!repo.has_liked("dev_b", "s1"));
        assert!(!repo.has_liked("dev_a", "s2"));

        assert!(repo.like("dev_b", &mut s1));
        assert!(repo.like("dev_a", &mut s2));
        assert_eq!(s1.likes, 5);
        assert_eq!(s2.likes, 4);
    }

    #[test]
    fn test_like_map_wire_format() {
        let store = Rc::new(MemoryStorage::new());
        let repo = LikeRepository::new(store.clone());
        repo.like("dev_a", &mut stall("s1"));

        let raw: serde_json::Value = serde_json::from_str(&store.get(LS_LIKES).unwrap()).unwrap();
        assert_eq!(raw, serde_json::json!({ "dev_a": { "s1": true } }));
    }

    #[test]
    fn test_device_id_is_generated_once() {
        let store = Rc::new(MemoryStorage::new());
        let repo = LikeRepository::new(store.clone());
        let first = repo.device_id();
        assert!(first.starts_with("dev_"));
        assert_eq!(first.len(), 12);
        assert_eq!(repo.device_id(), first);
        assert_eq!(LikeRepository::new(store).device_id(), first);
    }

    #[test]
    fn test_legacy_raw_device_id_is_kept() {
        let store = Rc::new(MemoryStorage::new());
        store.set(LS_DEVICE, "dev_k3j2h1g0").unwrap();
        assert_eq!(LikeRepository::new(store).device_id(), "dev_k3j2h1g0");
    }

    #[test]
    fn test_rejected_writes_keep_device_and_likes() {
        let repo = LikeRepository::new(Rc::new(CachedStore::new(Rc::new(FailingStore))));
        let device = repo.device_id();
        assert_eq!(repo.device_id(), device);

        let mut s = stall("s1");
        assert!(repo.like(&device, &mut s));
        assert_eq!(s.likes, 4);
        assert!(repo.has_liked(&device, "s1"));
        assert!(!repo.like(&device, &mut s));
        assert_eq!(s.likes, 4);
    }
}
