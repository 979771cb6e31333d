use crate::models::Role;
use crate::utils::storage::{load_scalar, save_json, SharedStore, StorageError, LS_ROLE};

/// Rol persistido (por defecto `guest`)
#[derive(Clone)]
pub struct RoleStore {
    store: SharedStore,
}

impl RoleStore {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn get_role(&self) -> Role {
        load_scalar(self.store.as_ref(), LS_ROLE)
            .and_then(|raw| Role::parse(&raw))
            .unwrap_or_default()
    }

    pub fn set_role(&self, role: Role) -> Result<(), StorageError> {
        save_json(self.store.as_ref(), LS_ROLE, role.as_str())?;
        log::info!("🎭 [ROLE] Rol cambiado a {}", role.as_str());
        Ok(())
    }
}
