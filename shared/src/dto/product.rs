use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product as returned by `GET /products/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precio")]
    pub price: f64,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "usuario_id")]
    pub owner_id: i64,
}

/// Request body for `POST /products/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProductRequest {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "usuario_id")]
    pub owner_id: i64,
}

/// Request body for `PUT /products/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateProductRequest {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precio")]
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_deserializes_wire_names() {
        let json = r#"{
            "id": 9,
            "nombre": "Table",
            "descripcion": "Round table",
            "precio": 25.0,
            "created_at": "2024-01-01T00:00:00Z",
            "usuario_id": 42
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.name, "Table");
        assert_eq!(product.owner_id, 42);
    }

    #[test]
    fn new_product_serializes_wire_names() {
        let req = NewProductRequest {
            name: "Chair".into(),
            description: "Wooden chair".into(),
            price: 10.5,
            owner_id: 42,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["nombre"], "Chair");
        assert_eq!(json["descripcion"], "Wooden chair");
        assert_eq!(json["precio"], 10.5);
        assert_eq!(json["usuario_id"], 42);
    }
}
