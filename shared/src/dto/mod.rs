//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the marketplace REST API.
//!
//! ## Module Organization
//!
//! - [`user`] - Telegram identity and user profile DTOs
//! - [`product`] - Product listings and CRUD request bodies
//! - [`purchase`] - Purchase request body
//!
//! ## Serialization Format
//!
//! - **Field naming**: the API uses Spanish snake_case field names; Rust
//!   fields are English and carry `#[serde(rename = "...")]` where the two
//!   differ
//! - **Optional fields**: `Option<T>`, deserialized from `null` or absent
//! - **All types**: implement both `Serialize` and `Deserialize`
//!
//! ## Example Request/Response Pair
//!
//! ```text
//! GET /users/telegram/42
//! X-Telegram-Init-Data: query_id=...&user=...&hash=...
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "telegram_id": 42,
//!   "username": "alice",
//!   "wallet": "0xA1b2C3d4E5f6A7b8C9d0E1f2A3b4C5d6E7f8A9b0",
//!   "productos": [
//!     { "id": 1, "nombre": "Chair", "descripcion": "Wooden chair", "precio": 10.5 }
//!   ]
//! }
//! ```

pub mod product;
pub mod purchase;
pub mod user;

pub use product::*;
pub use purchase::*;
pub use user::*;
