//! Wire types for the identity provider REST API.

use serde::{Deserialize, Serialize};

/// Response envelope used by the identity provider (`{ "data": ... }`).
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// User attributes as returned by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityUser {
    pub id: i32,
    pub username: String,
    pub name: String,
    /// Account type (e.g. "admin", "manager", "staff")
    #[serde(rename = "type")]
    pub user_type: String,
    pub company_id: Option<i32>,
}

/// Token endpoint response for the client-credentials grant.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_user_deserializes_type_field() {
        let json = r#"{
            "id": 7,
            "username": "hkim",
            "name": "Hana Kim",
            "type": "manager",
            "company_id": 3
        }"#;

        let user: IdentityUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.user_type, "manager");
        assert_eq!(user.company_id, Some(3));
    }

    #[test]
    fn test_identity_user_without_company() {
        let json = r#"{"id": 1, "username": "root", "name": "Root", "type": "admin", "company_id": null}"#;
        let user: IdentityUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.company_id, None);
    }

    #[test]
    fn test_token_response_deserializes() {
        let json = r#"{"access_token": "abc", "token_type": "Bearer", "expires_in": 3600}"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.expires_in, 3600);
    }

    #[test]
    fn test_data_envelope_list() {
        let json = r#"{"data": [{"id": 1, "username": "a", "name": "A", "type": "staff", "company_id": null}]}"#;
        let envelope: DataEnvelope<Vec<IdentityUser>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.len(), 1);
    }
}
