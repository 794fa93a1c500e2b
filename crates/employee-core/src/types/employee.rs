//! Employee record

use serde::{Deserialize, Serialize};

/// A single employee row.
///
/// `id` is `None` until the store assigns one on insert; once assigned it is
/// immutable and never reused. The wire shape uses camelCase field names
/// (`firstName`, `lastName`, `email`) and must keep them exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Employee {
    /// A not-yet-persisted employee (no id).
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_is_camel_case() {
        let employee = Employee::new("Harry", "Potter", "harry@gmail.com").with_id(1);
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "firstName": "Harry",
                "lastName": "Potter",
                "email": "harry@gmail.com",
            })
        );
    }

    #[test]
    fn unsaved_employee_serializes_without_id() {
        let employee = Employee::new("Tony", "Stark", "tony@gmail.com");
        let json = serde_json::to_value(&employee).unwrap();
        assert!(json.get("id").is_none());
    }

    #[test]
    fn deserializes_body_without_id() {
        let employee: Employee = serde_json::from_str(
            r#"{"firstName":"Harry","lastName":"Potter","email":"harry@gmail.com"}"#,
        )
        .unwrap();
        assert_eq!(employee.id, None);
        assert_eq!(employee.first_name, "Harry");
        assert_eq!(employee.last_name, "Potter");
        assert_eq!(employee.email, "harry@gmail.com");
    }
}
