//! Student row types
//!
//! The persisted table keeps the phone column under its legacy name
//! `number`; every read path aliases it back to `phone`, so the API shape
//! is always `{id, first_name, last_name, phone, birthdate, email}`.

use serde::{Deserialize, Serialize};

/// A persisted student row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Primary key; dense `1..N` after any resequencing pass.
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Ten digits, leading digit 5-9; unique across all rows.
    pub phone: String,
    /// ISO calendar date, `YYYY-MM-DD`.
    pub birthdate: String,
    /// Unique across all rows (hard constraint at the storage layer).
    pub email: String,
}

/// Candidate field values for an insert or a full-replace update.
///
/// Carries no id: inserts receive one from the storage layer, updates
/// address an existing row. Absent fields deserialize as empty strings so
/// the validator reports them as rule violations instead of the request
/// dying in the JSON layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentInput {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub birthdate: String,
    pub email: String,
}

impl StudentInput {
    /// JSON object of the field values, used for audit records.
    pub fn audit_fields(&self) -> serde_json::Value {
        serde_json::json!({
            "first_name": self.first_name,
            "last_name": self.last_name,
            "phone": self.phone,
            "birthdate": self.birthdate,
            "email": self.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_serializes_with_phone_field() {
        let student = Student {
            id: 1,
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            phone: "9123456789".to_string(),
            birthdate: "2000-01-01".to_string(),
            email: "ann@x.com".to_string(),
        };
        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(json["phone"], "9123456789");
        assert!(json.get("number").is_none());
    }

    #[test]
    fn test_partial_body_deserializes_with_empty_fields() {
        let input: StudentInput =
            serde_json::from_str(r#"{"first_name":"Ann"}"#).unwrap();
        assert_eq!(input.first_name, "Ann");
        assert_eq!(input.last_name, "");
        assert_eq!(input.phone, "");
        assert_eq!(input.birthdate, "");
        assert_eq!(input.email, "");
    }

    #[test]
    fn test_audit_fields_shape() {
        let input = StudentInput {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            phone: "9123456789".to_string(),
            birthdate: "2000-01-01".to_string(),
            email: "ann@x.com".to_string(),
        };
        let fields = input.audit_fields();
        assert_eq!(fields["email"], "ann@x.com");
        assert_eq!(fields.as_object().unwrap().len(), 5);
    }
}
