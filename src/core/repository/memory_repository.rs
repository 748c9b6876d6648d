use std::collections::HashMap;
use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryRepository keeps entities keyed by their id for the lifetime of the process.
#[derive(Debug)]
pub struct MemoryRepository<Entity> {
    name: String,
    items: RwLock<HashMap<String, Entity>>,
}

impl<Entity> MemoryRepository<Entity> {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            items: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl<Entity> Repository<Entity> for MemoryRepository<Entity>
    where Entity: Identifiable + Clone + Sync + Send {
    async fn create(&self, entity: &Entity) -> LibraryResult<usize> {
        let mut items = self.items.write().await;
        let id = entity.id();
        if items.contains_key(id.as_str()) {
            return Err(LibraryError::duplicate_key(
                format!("{} with id {} already exists", self.name, id).as_str()));
        }
        items.insert(id, entity.clone());
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<Entity> {
        self.items.read().await.get(id).cloned().ok_or_else(|| LibraryError::not_found(
            format!("{} with id {} not found", self.name, id).as_str()))
    }
}
