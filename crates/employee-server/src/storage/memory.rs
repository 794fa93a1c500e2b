//! In-memory store using DashMap (test double for the SQLite store)

use async_trait::async_trait;
use dashmap::DashMap;
use employee_core::{Employee, EmployeeStore, Result};
use std::sync::atomic::{AtomicI64, Ordering};

/// Ephemeral `EmployeeStore` with the same insert-or-update semantics as the
/// SQLite store. Ids count up from 1 and are never reused.
pub struct MemoryStore {
    rows: DashMap<i64, Employee>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_id: AtomicI64::new(0),
        }
    }

    fn fresh_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Employee>> {
        let mut all: Vec<Employee> = self.rows.iter().map(|e| e.value().clone()).collect();
        all.sort_by_key(|e| e.id);
        Ok(all)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>> {
        Ok(self.rows.get(&id).map(|e| e.value().clone()))
    }

    async fn save(&self, employee: &Employee) -> Result<Employee> {
        let id = match employee.id {
            // Overwrite only when the id matches a stored row
            Some(id) if self.rows.contains_key(&id) => id,
            _ => self.fresh_id(),
        };
        let saved = employee.clone().with_id(id);
        self.rows.insert(id, saved.clone());
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.rows.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn find_all_on_empty_store_is_empty() {
        let store = MemoryStore::new();
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_assigns_fresh_unique_ids() {
        let store = MemoryStore::new();

        let harry = store
            .save(&Employee::new("Harry", "Potter", "harry@gmail.com"))
            .await
            .unwrap();
        let tony = store
            .save(&Employee::new("Tony", "Stark", "tony@gmail.com"))
            .await
            .unwrap();

        assert!(harry.id.is_some());
        assert!(tony.id.is_some());
        assert_ne!(harry.id, tony.id);

        let all = store.find_all().await.unwrap();
        assert_eq!(all, vec![harry.clone(), tony]);

        let found = store.find_by_id(harry.id.unwrap()).await.unwrap();
        assert_eq!(found, Some(harry));
    }

    #[tokio::test]
    async fn save_with_matching_id_overwrites_in_place() {
        let store = MemoryStore::new();

        let saved = store
            .save(&Employee::new("Harry", "Potter", "harry@gmail.com"))
            .await
            .unwrap();
        let id = saved.id.unwrap();

        let updated = store
            .save(&Employee::new("Harry", "Styles", "harry@yahoo.com").with_id(id))
            .await
            .unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(store.find_all().await.unwrap().len(), 1);
        let found = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.last_name, "Styles");
        assert_eq!(found.email, "harry@yahoo.com");
    }

    #[tokio::test]
    async fn save_with_unknown_id_inserts_with_a_fresh_id() {
        let store = MemoryStore::new();

        let saved = store
            .save(&Employee::new("Harry", "Potter", "harry@gmail.com").with_id(42))
            .await
            .unwrap();

        // Ids are store-assigned; a submitted id that matches nothing is ignored
        assert_eq!(saved.id, Some(1));
        assert_eq!(store.find_by_id(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn find_by_id_miss_is_none_not_an_error() {
        let store = MemoryStore::new();
        assert_eq!(store.find_by_id(7).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_removes_row_and_missing_id_is_a_noop() {
        let store = MemoryStore::new();

        let saved = store
            .save(&Employee::new("Harry", "Potter", "harry@gmail.com"))
            .await
            .unwrap();
        let id = saved.id.unwrap();

        store.delete_by_id(id).await.unwrap();
        assert!(store.find_all().await.unwrap().is_empty());

        // Deleting again is still a success
        store.delete_by_id(id).await.unwrap();
    }
}
