#![allow(dead_code)]

use async_trait::async_trait;
use roles::abstract_trait::{
    HealthServiceTrait, RoleCommandRepositoryTrait, RoleQueryRepositoryTrait,
};
use shared::{
    domain::requests::{CreateRoleRequest, UpdateRoleRequest},
    errors::{RepositoryError, ServiceError},
    model::{Role, RoleDeletion},
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

pub const FALLBACK_ROLE_NAME: &str = "Usuario";

pub fn role(id: i32, name: &str, description: &str) -> Role {
    Role {
        id,
        name: name.into(),
        description: description.into(),
    }
}

struct Store {
    roles: Vec<Role>,
    /// (user id, rol_id) pairs standing in for the `usuarios` table.
    users: Vec<(i32, i32)>,
    next_id: i32,
}

/// In-memory stand-in for both role repositories, mirroring the SQL
/// semantics including the fallback lookup inside delete.
pub struct MockRoleRepository {
    store: Mutex<Store>,
    calls: AtomicUsize,
}

impl MockRoleRepository {
    pub fn new(roles: Vec<Role>, users: Vec<(i32, i32)>) -> Arc<Self> {
        let next_id = roles.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Arc::new(Self {
            store: Mutex::new(Store {
                roles,
                users,
                next_id,
            }),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn roles(&self) -> Vec<Role> {
        self.store.lock().unwrap().roles.clone()
    }

    pub fn users(&self) -> Vec<(i32, i32)> {
        self.store.lock().unwrap().users.clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoleQueryRepositoryTrait for MockRoleRepository {
    async fn find_all(&self) -> Result<Vec<Role>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.store.lock().unwrap().roles.clone())
    }
}

#[async_trait]
impl RoleCommandRepositoryTrait for MockRoleRepository {
    async fn create(&self, req: &CreateRoleRequest) -> Result<i32, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let mut store = self.store.lock().unwrap();
        let id = store.next_id;
        store.next_id += 1;
        store.roles.push(Role {
            id,
            name: req.name.clone(),
            description: req.description.clone(),
        });
        Ok(id)
    }

    async fn update(&self, req: &UpdateRoleRequest) -> Result<bool, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let mut store = self.store.lock().unwrap();
        match store.roles.iter_mut().find(|r| r.id == req.id) {
            Some(existing) => {
                existing.name = req.name.clone();
                existing.description = req.description.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, role_id: i32) -> Result<RoleDeletion, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let mut store = self.store.lock().unwrap();

        let Some(fallback_id) = store
            .roles
            .iter()
            .find(|r| r.name == FALLBACK_ROLE_NAME)
            .map(|r| r.id)
        else {
            return Err(RepositoryError::FallbackRoleMissing);
        };

        let mut reassigned = 0;
        for (_, rol_id) in store.users.iter_mut() {
            if *rol_id == role_id {
                *rol_id = fallback_id;
                reassigned += 1;
            }
        }

        let before = store.roles.len();
        store.roles.retain(|r| r.id != role_id);
        let deleted = store.roles.len() < before;

        Ok(RoleDeletion {
            deleted,
            reassigned_users: reassigned,
        })
    }
}

/// Query repository that always fails with a storage error.
pub struct FailingRoleRepository;

#[async_trait]
impl RoleQueryRepositoryTrait for FailingRoleRepository {
    async fn find_all(&self) -> Result<Vec<Role>, RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx::Error::PoolClosed))
    }
}

pub struct HealthyProbe;

#[async_trait]
impl HealthServiceTrait for HealthyProbe {
    async fn ping(&self) -> Result<(), ServiceError> {
        Ok(())
    }
}

pub struct FailingProbe;

#[async_trait]
impl HealthServiceTrait for FailingProbe {
    async fn ping(&self) -> Result<(), ServiceError> {
        Err(ServiceError::Internal("Base de datos no disponible".into()))
    }
}
