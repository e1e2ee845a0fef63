//! HTTP client for the marketplace REST API.
//!
//! Thin wrappers over `gloo_net` requests. Every authenticated call carries
//! the init-data token in the `X-Telegram-Init-Data` header. The bootstrap
//! calls (probe, profile fetch) classify failures into [`BootstrapError`];
//! the CRUD calls surface a plain message string, which the views show as a
//! blocking alert.

use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use shared::dto::product::{NewProductRequest, Product, UpdateProductRequest};
use shared::dto::purchase::PurchaseRequest;
use shared::dto::user::{ApiErrorBody, UserProfile, WalletUpdateRequest};

use super::bootstrap::BootstrapError;
use crate::utils::constants::{api_base, PROBE_TIMEOUT_MS};

/// Header that forwards the host-signed init-data token verbatim.
pub const INIT_DATA_HEADER: &str = "X-Telegram-Init-Data";

fn endpoint(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

// ============================================================================
// BOOTSTRAP CALLS (classified errors)
// ============================================================================

/// Liveness probe: `GET /users/health`, raced against a client-side timeout.
pub async fn health_probe(init_data: &str) -> Result<(), BootstrapError> {
    let request = Box::pin(
        Request::get(&endpoint("/users/health"))
            .header(INIT_DATA_HEADER, init_data)
            .send(),
    );
    let timeout = Box::pin(TimeoutFuture::new(PROBE_TIMEOUT_MS));

    match select(request, timeout).await {
        Either::Left((Ok(response), _)) => classify_probe_status(response.status()),
        Either::Left((Err(err), _)) => {
            log::warn!("health probe got no response: {:?}", err);
            Err(BootstrapError::ServerUnreachable)
        }
        Either::Right(((), _)) => Err(BootstrapError::Timeout),
    }
}

/// `GET /users/telegram/{id}`: fetch the profile for the checked identity.
pub async fn fetch_profile(user_id: i64, init_data: &str) -> Result<UserProfile, BootstrapError> {
    let url = endpoint(&format!("/users/telegram/{}", user_id));
    let response = Request::get(&url)
        .header(INIT_DATA_HEADER, init_data)
        .send()
        .await
        .map_err(|err| {
            log::warn!("profile fetch got no response: {:?}", err);
            BootstrapError::ServerUnreachable
        })?;

    if response.ok() {
        let body = response.text().await.unwrap_or_default();
        parse_profile_body(&body)
    } else {
        let status = response.status();
        let detail = error_detail(response).await;
        Err(classify_profile_failure(status, detail))
    }
}

/// Probe responses only distinguish "HTTP error" from success.
fn classify_probe_status(status: u16) -> Result<(), BootstrapError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(BootstrapError::ServerError)
    }
}

/// Map a non-2xx profile response to its error class.
fn classify_profile_failure(status: u16, detail: Option<String>) -> BootstrapError {
    match status {
        404 => BootstrapError::ProfileNotFound,
        401 => BootstrapError::Unauthorized,
        500..=599 => BootstrapError::ServerError,
        _ => BootstrapError::UnclassifiedHttp { status, detail },
    }
}

/// Decode a 2xx profile body. An empty or undecodable body means the server
/// sent no usable profile.
fn parse_profile_body(body: &str) -> Result<UserProfile, BootstrapError> {
    if body.trim().is_empty() {
        return Err(BootstrapError::EmptyProfile);
    }
    serde_json::from_str(body).map_err(|err| {
        log::warn!("profile body did not decode: {}", err);
        BootstrapError::EmptyProfile
    })
}

/// Pull the `detail` text out of an API error body, if there is one.
async fn error_detail(response: Response) -> Option<String> {
    let body = response.text().await.ok()?;
    serde_json::from_str::<ApiErrorBody>(&body)
        .ok()
        .and_then(|e| e.detail)
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
}

// ============================================================================
// CRUD CALLS (message-string errors, shown as blocking alerts)
// ============================================================================

/// `PUT /users/{id}/wallet`
pub async fn update_wallet(user_id: i64, wallet: &str, init_data: &str) -> Result<(), String> {
    let url = endpoint(&format!("/users/{}/wallet", user_id));
    let body = WalletUpdateRequest {
        wallet: wallet.to_string(),
    };
    let response = Request::put(&url)
        .header(INIT_DATA_HEADER, init_data)
        .json(&body)
        .map_err(|err| format!("Could not encode the request: {:?}", err))?
        .send()
        .await
        .map_err(|_| "Could not reach the server.".to_string())?;
    ensure_ok(response, "Could not update the wallet").await
}

/// `GET /products/`
pub async fn list_products(init_data: &str) -> Result<Vec<Product>, String> {
    let response = Request::get(&endpoint("/products/"))
        .header(INIT_DATA_HEADER, init_data)
        .send()
        .await
        .map_err(|_| "Could not reach the server.".to_string())?;
    if !response.ok() {
        return Err(failure_message(&response, "Could not load the products").await);
    }
    response
        .json::<Vec<Product>>()
        .await
        .map_err(|err| format!("Unexpected product list format: {:?}", err))
}

/// `POST /products/`
pub async fn create_product(request: &NewProductRequest, init_data: &str) -> Result<(), String> {
    let response = Request::post(&endpoint("/products/"))
        .header(INIT_DATA_HEADER, init_data)
        .json(request)
        .map_err(|err| format!("Could not encode the request: {:?}", err))?
        .send()
        .await
        .map_err(|_| "Could not reach the server.".to_string())?;
    ensure_ok(response, "Could not create the product").await
}

/// `PUT /products/{id}`
pub async fn update_product(
    product_id: i64,
    request: &UpdateProductRequest,
    init_data: &str,
) -> Result<(), String> {
    let url = endpoint(&format!("/products/{}", product_id));
    let response = Request::put(&url)
        .header(INIT_DATA_HEADER, init_data)
        .json(request)
        .map_err(|err| format!("Could not encode the request: {:?}", err))?
        .send()
        .await
        .map_err(|_| "Could not reach the server.".to_string())?;
    ensure_ok(response, "Could not update the product").await
}

/// `DELETE /products/{id}`
pub async fn delete_product(product_id: i64, init_data: &str) -> Result<(), String> {
    let url = endpoint(&format!("/products/{}", product_id));
    let response = Request::delete(&url)
        .header(INIT_DATA_HEADER, init_data)
        .send()
        .await
        .map_err(|_| "Could not reach the server.".to_string())?;
    ensure_ok(response, "Could not delete the product").await
}

/// `POST /compras/`
pub async fn create_purchase(request: &PurchaseRequest, init_data: &str) -> Result<(), String> {
    let response = Request::post(&endpoint("/compras/"))
        .header(INIT_DATA_HEADER, init_data)
        .json(request)
        .map_err(|err| format!("Could not encode the request: {:?}", err))?
        .send()
        .await
        .map_err(|_| "Could not reach the server.".to_string())?;
    ensure_ok(response, "The purchase could not be completed").await
}

async fn ensure_ok(response: Response, context: &str) -> Result<(), String> {
    if response.ok() {
        Ok(())
    } else {
        Err(failure_message(&response, context).await)
    }
}

async fn failure_message(response: &Response, context: &str) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) => {
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|e| e.detail)
                .unwrap_or(body);
            if detail.trim().is_empty() {
                format!("{} (HTTP {}).", context, status)
            } else {
                format!("{} (HTTP {}): {}", context, status, detail.trim())
            }
        }
        Err(_) => format!("{} (HTTP {}).", context, status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_accepts_2xx_only() {
        assert!(classify_probe_status(200).is_ok());
        assert!(classify_probe_status(204).is_ok());
        assert_eq!(
            classify_probe_status(503).unwrap_err(),
            BootstrapError::ServerError
        );
        assert_eq!(
            classify_probe_status(404).unwrap_err(),
            BootstrapError::ServerError
        );
    }

    #[test]
    fn profile_failures_classify_by_status() {
        assert_eq!(
            classify_profile_failure(404, None),
            BootstrapError::ProfileNotFound
        );
        assert_eq!(
            classify_profile_failure(401, None),
            BootstrapError::Unauthorized
        );
        assert_eq!(
            classify_profile_failure(502, Some("bad gateway".into())),
            BootstrapError::ServerError
        );
        assert_eq!(
            classify_profile_failure(409, Some("conflict".into())),
            BootstrapError::UnclassifiedHttp {
                status: 409,
                detail: Some("conflict".into()),
            }
        );
    }

    #[test]
    fn empty_profile_body_is_empty_profile() {
        assert_eq!(
            parse_profile_body("").unwrap_err(),
            BootstrapError::EmptyProfile
        );
        assert_eq!(
            parse_profile_body("  \n").unwrap_err(),
            BootstrapError::EmptyProfile
        );
        assert_eq!(
            parse_profile_body("not json").unwrap_err(),
            BootstrapError::EmptyProfile
        );
    }

    #[test]
    fn valid_profile_body_decodes_unmodified() {
        let body = r#"{
            "telegram_id": 42,
            "username": "alice",
            "wallet": "0xA1b2C3",
            "productos": [
                {"id": 1, "nombre": "Chair", "descripcion": "Wooden chair", "precio": 10.5},
                {"id": 2, "nombre": "Lamp", "descripcion": "Desk lamp", "precio": 3.0}
            ]
        }"#;
        let profile = parse_profile_body(body).unwrap();
        assert_eq!(profile.wallet, "0xA1b2C3");
        assert_eq!(profile.products.len(), 2);
    }
}
