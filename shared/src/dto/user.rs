use serde::{Deserialize, Serialize};

/// Telegram user object as exposed by the host client in `initDataUnsafe.user`.
///
/// Every field except `id` is optional; the host only guarantees the numeric
/// identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TelegramUser {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Profile response from `GET /users/telegram/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub telegram_id: i64,
    #[serde(default)]
    pub username: Option<String>,
    /// Wallet address; the API sends an empty string when none is assigned.
    #[serde(default)]
    pub wallet: String,
    /// Products owned by this user, in server order.
    #[serde(rename = "productos", default)]
    pub products: Vec<ProductSummary>,
}

/// Product entry inside a [`UserProfile`] (no owner or timestamp; the owner
/// is the profile itself).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSummary {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precio")]
    pub price: f64,
}

/// Request body for `PUT /users/{id}/wallet`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletUpdateRequest {
    pub wallet: String,
}

/// Error body the API attaches to non-2xx responses (FastAPI convention).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_deserializes_wire_names() {
        let json = r#"{
            "telegram_id": 42,
            "username": "alice",
            "wallet": "0xabc",
            "productos": [
                {"id": 1, "nombre": "Chair", "descripcion": "Wooden chair", "precio": 10.5},
                {"id": 2, "nombre": "Lamp", "descripcion": "Desk lamp", "precio": 3.0}
            ]
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.telegram_id, 42);
        assert_eq!(profile.wallet, "0xabc");
        assert_eq!(profile.products.len(), 2);
        assert_eq!(profile.products[0].name, "Chair");
        assert_eq!(profile.products[1].price, 3.0);
    }

    #[test]
    fn profile_tolerates_missing_optional_fields() {
        let json = r#"{"telegram_id": 7, "username": null}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.username, None);
        assert_eq!(profile.wallet, "");
        assert!(profile.products.is_empty());
    }

    #[test]
    fn wallet_update_serializes() {
        let req = WalletUpdateRequest { wallet: "0xdef".into() };
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"wallet":"0xdef"}"#);
    }
}
