use serde::{Deserialize, Serialize};

/// Request body for `POST /compras/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseRequest {
    #[serde(rename = "producto_id")]
    pub product_id: i64,
    #[serde(rename = "comprador_id")]
    pub buyer_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_serializes_wire_names() {
        let req = PurchaseRequest { product_id: 9, buyer_id: 42 };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"producto_id":9,"comprador_id":42}"#
        );
    }
}
