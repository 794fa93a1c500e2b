//! SQLite database layer (embedded, no external dependencies)

use anyhow::{Context, Result};
use async_trait::async_trait;
use employee_core::{Employee, EmployeeError, EmployeeStore};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    pub async fn new(database_path: &str) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path);

        // Create parent directory if needed
        if let Some(parent) = std::path::Path::new(database_path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_path)
            })?;

        // Run migrations (inline for simplicity)
        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS employee (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                email TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

fn db_err(e: sqlx::Error) -> EmployeeError {
    EmployeeError::Database(e.to_string())
}

#[async_trait]
impl EmployeeStore for Database {
    async fn find_all(&self) -> employee_core::Result<Vec<Employee>> {
        let rows: Vec<EmployeeRow> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, email FROM employee
            ORDER BY id
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(db_err)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_id(&self, id: i64) -> employee_core::Result<Option<Employee>> {
        let row: Option<EmployeeRow> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, email FROM employee
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await
        .map_err(db_err)?;

        Ok(row.map(|r| r.into()))
    }

    async fn save(&self, employee: &Employee) -> employee_core::Result<Employee> {
        // Update in place when the id matches an existing row
        if let Some(id) = employee.id {
            let result = sqlx::query(
                r#"
                UPDATE employee SET first_name = ?1, last_name = ?2, email = ?3
                WHERE id = ?4
                "#,
            )
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(&employee.email)
            .bind(id)
            .execute(&*self.pool)
            .await
            .map_err(db_err)?;

            if result.rows_affected() > 0 {
                return Ok(employee.clone());
            }
        }

        // Insert; SQLite assigns the id
        let result = sqlx::query(
            r#"
            INSERT INTO employee (first_name, last_name, email)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .execute(&*self.pool)
        .await
        .map_err(db_err)?;

        Ok(employee.clone().with_id(result.last_insert_rowid()))
    }

    async fn delete_by_id(&self, id: i64) -> employee_core::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM employee WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&*self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
}

impl From<EmployeeRow> for Employee {
    fn from(r: EmployeeRow) -> Self {
        Employee {
            id: Some(r.id),
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn temp_db(name: &str) -> Database {
        let path = std::env::temp_dir().join(format!(
            "employee-db-{}-{}.db",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        Database::new(path.to_str().unwrap()).await.unwrap()
    }

    #[tokio::test]
    async fn insert_assigns_id_and_row_is_retrievable() {
        let db = temp_db("insert").await;

        let saved = db
            .save(&Employee::new("Harry", "Potter", "harry@gmail.com"))
            .await
            .unwrap();
        let id = saved.id.expect("insert assigns an id");

        let found = db.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found, saved);
    }

    #[tokio::test]
    async fn update_overwrites_fields_without_changing_count() {
        let db = temp_db("update").await;

        let saved = db
            .save(&Employee::new("Harry", "Potter", "harry@gmail.com"))
            .await
            .unwrap();
        let id = saved.id.unwrap();

        let updated = db
            .save(&Employee::new("Harry", "Styles", "harry@yahoo.com").with_id(id))
            .await
            .unwrap();
        assert_eq!(updated.id, Some(id));

        let all = db.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].last_name, "Styles");
        assert_eq!(all[0].email, "harry@yahoo.com");
    }

    #[tokio::test]
    async fn delete_missing_id_is_a_noop() {
        let db = temp_db("delete").await;
        db.delete_by_id(9999).await.unwrap();
        assert!(db.find_all().await.unwrap().is_empty());
    }
}
