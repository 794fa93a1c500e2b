//! Storage trait for persistence

use crate::types::Employee;
use crate::Result;
use async_trait::async_trait;

/// Employee store
///
/// `save` is insert-or-update: an employee whose id is unset (or matches no
/// stored row) is inserted with a freshly assigned id; otherwise the existing
/// row's fields are overwritten. Missing ids are `Ok(None)` / no-ops, never
/// errors.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Employee>>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>>;
    async fn save(&self, employee: &Employee) -> Result<Employee>;
    async fn delete_by_id(&self, id: i64) -> Result<()>;
}
