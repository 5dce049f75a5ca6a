//! Client models and DTOs.
//!
//! Clients are the guests/customers managed from the client console.
//! The backend soft-deletes clients; `deleted_at` is exposed so the
//! console can distinguish archived rows when the backend includes them.

use serde::{Deserialize, Serialize};

use hostal_core::types::{DbId, Timestamp};

/// A client as represented by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Set when the backend has soft-deleted the client.
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a new client. Carries no identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClient {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// DTO for partially updating a client. Only set fields are changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateClient {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_deserializes_backend_payload() {
        let payload = serde_json::json!({
            "id": 12,
            "name": "Ana Morales",
            "email": "ana@example.com",
            "phone": null,
            "deleted_at": null,
            "created_at": "2026-03-01T10:00:00Z",
            "updated_at": "2026-03-02T09:30:00Z",
        });

        let client: Client = serde_json::from_value(payload).unwrap();
        assert_eq!(client.id, 12);
        assert_eq!(client.name, "Ana Morales");
        assert_eq!(client.email.as_deref(), Some("ana@example.com"));
        assert!(client.phone.is_none());
        assert!(client.deleted_at.is_none());
    }

    #[test]
    fn test_create_dto_serializes_without_id() {
        let dto = CreateClient {
            name: "Ana".to_string(),
            email: None,
            phone: Some("555-0101".to_string()),
        };

        let value = serde_json::to_value(&dto).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["name"], "Ana");
        assert_eq!(value["phone"], "555-0101");
    }
}
