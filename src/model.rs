//! Customer record as stored in the `customer` table and exchanged as JSON.

use serde::{Deserialize, Serialize};

/// One customer. `id` is `None` until the store assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

impl Customer {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Overwrite the editable fields from `other`, keeping this record's id.
    pub fn merge_from(&mut self, other: Customer) {
        self.first_name = other.first_name;
        self.last_name = other.last_name;
        self.email = other.email;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_camel_case_names() {
        let c = Customer {
            id: Some(3),
            ..Customer::new("Ann", "Lee", "ann@x.com")
        };
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"id": 3, "firstName": "Ann", "lastName": "Lee", "email": "ann@x.com"})
        );
    }

    #[test]
    fn id_may_be_absent_on_input() {
        let c: Customer =
            serde_json::from_str(r#"{"firstName":"Ann","lastName":"Lee","email":"ann@x.com"}"#).unwrap();
        assert_eq!(c.id, None);
        assert_eq!(c.first_name, "Ann");
    }

    #[test]
    fn merge_keeps_own_id() {
        let mut stored = Customer {
            id: Some(1),
            ..Customer::new("Ann", "Lee", "ann@x.com")
        };
        stored.merge_from(Customer {
            id: Some(99),
            ..Customer::new("Anna", "Lee", "anna@x.com")
        });
        assert_eq!(stored.id, Some(1));
        assert_eq!(stored.first_name, "Anna");
        assert_eq!(stored.email, "anna@x.com");
    }
}
