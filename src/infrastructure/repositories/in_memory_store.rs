use tokio::sync::RwLock;
use uuid::Uuid;

use crate::infrastructure::entities::{BlogPostEntity, ProjectEntity, ServiceEntity, UserEntity};
use crate::infrastructure::mappers::EntityMapper;

/// Storage key of an entity row
pub trait Keyed {
    fn key(&self) -> Uuid;
}

impl Keyed for ProjectEntity {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for ServiceEntity {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for BlogPostEntity {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for UserEntity {
    fn key(&self) -> Uuid {
        self.id
    }
}

/// Entity rows kept in insertion order
///
/// Insertion order is the "natural" order used to break sort ties. Every
/// operation holds the lock for its whole duration, so the upsert's
/// existence check and write are atomic here.
#[derive(Debug)]
pub struct InMemoryStore<E> {
    rows: RwLock<Vec<E>>,
}

impl<E> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl<E: Keyed + Clone> InMemoryStore<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, key: Uuid) -> Option<E> {
        let rows = self.rows.read().await;
        rows.iter().find(|row| row.key() == key).cloned()
    }

    /// Rows matching `predicate`, in insertion order
    pub async fn filter<F>(&self, predicate: F) -> Vec<E>
    where
        F: Fn(&E) -> bool,
    {
        let rows = self.rows.read().await;
        rows.iter().filter(|row| predicate(row)).cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    /// Insert-or-update through `mapper`
    ///
    /// Merges into the row keyed by `key` when one exists, otherwise
    /// appends a fresh entity built from `model`.
    pub async fn upsert<M>(&self, mapper: &M, key: Option<Uuid>, model: &M::Model) -> M::Model
    where
        M: EntityMapper<Entity = E>,
    {
        let mut rows = self.rows.write().await;

        if let Some(row) = key.and_then(|key| rows.iter_mut().find(|row| row.key() == key)) {
            mapper.update_entity(row, model);
            return mapper.to_model(row);
        }

        let entity = mapper.to_entity(model);
        let saved = mapper.to_model(&entity);
        rows.push(entity);
        saved
    }

    /// Applies `change` to the row keyed by `key`, returning the new row
    pub async fn modify<F>(&self, key: Uuid, change: F) -> Option<E>
    where
        F: FnOnce(&mut E),
    {
        let mut rows = self.rows.write().await;
        let row = rows.iter_mut().find(|row| row.key() == key)?;
        change(row);
        Some(row.clone())
    }

    /// Removes the row keyed by `key`, returning whether one existed
    pub async fn remove(&self, key: Uuid) -> bool {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| row.key() != key);
        rows.len() != before
    }
}

/// Zero-based page of `items`
pub(crate) fn paginate<T>(items: Vec<T>, page: u32, size: u32) -> Vec<T> {
    let offset = (page as usize).saturating_mul(size as usize);
    items.into_iter().skip(offset).take(size as usize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::Project;
    use crate::infrastructure::mappers::ProjectMapper;

    #[test]
    fn paginate_is_zero_based() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(paginate(items.clone(), 0, 10), (0..10).collect::<Vec<_>>());
        assert_eq!(paginate(items.clone(), 2, 10), (20..25).collect::<Vec<_>>());
        assert!(paginate(items.clone(), 3, 10).is_empty());
        assert!(paginate(items, 0, 0).is_empty());
    }

    #[tokio::test]
    async fn upsert_inserts_then_updates() {
        let store: InMemoryStore<ProjectEntity> = InMemoryStore::new();
        let mapper = ProjectMapper;

        let created = store
            .upsert(&mapper, None, &Project {
                title: "First".to_string(),
                ..Project::default()
            })
            .await;
        assert_eq!(store.len().await, 1);

        let key = created.id.parse::<Uuid>().unwrap();
        let renamed = Project {
            title: "Second".to_string(),
            ..created.clone()
        };
        let updated = store.upsert(&mapper, Some(key), &renamed).await;

        assert_eq!(store.len().await, 1);
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Second");
    }

    #[tokio::test]
    async fn remove_reports_existence() {
        let store: InMemoryStore<ProjectEntity> = InMemoryStore::new();
        let saved = store.upsert(&ProjectMapper, None, &Project::default()).await;
        let key = saved.id.parse::<Uuid>().unwrap();

        assert!(store.remove(key).await);
        assert!(!store.remove(key).await);
        assert!(store.is_empty().await);
    }
}
