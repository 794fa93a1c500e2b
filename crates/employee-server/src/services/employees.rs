//! Employee service
//!
//! The HTTP layer depends on the `EmployeeService` trait rather than the
//! store, so tests can swap in a mock.

use async_trait::async_trait;
use employee_core::{Employee, EmployeeStore, Result};
use std::sync::Arc;
use tracing::{debug, info};

#[async_trait]
pub trait EmployeeService: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Employee>>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>>;
    async fn save(&self, employee: &Employee) -> Result<Employee>;
    async fn delete_by_id(&self, id: i64) -> Result<()>;
}

/// Production service: a 1:1 pass-through to the store.
pub struct EmployeeManager {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeManager {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EmployeeService for EmployeeManager {
    async fn find_all(&self) -> Result<Vec<Employee>> {
        debug!("Listing all employees");
        self.store.find_all().await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>> {
        debug!("Fetching employee {}", id);
        self.store.find_by_id(id).await
    }

    async fn save(&self, employee: &Employee) -> Result<Employee> {
        info!(
            "Saving employee: {} {} <{}>",
            employee.first_name, employee.last_name, employee.email
        );
        self.store.save(employee).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        info!("Deleting employee: {}", id);
        self.store.delete_by_id(id).await
    }
}
