//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the Mini App front-end and the
//! marketplace REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::user`]**: Telegram identity and user profile DTOs
//!   - **[`dto::product`]**: Product listing and CRUD request DTOs
//!   - **[`dto::purchase`]**: Purchase request DTO
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::truncate_wallet`]**: Shorten wallet addresses for display
//!
//! ## Wire Format
//!
//! The API speaks Spanish field names on the wire (`nombre`, `descripcion`,
//! `precio`, `usuario_id`, ...). Rust code uses English names; the mapping is
//! done with `#[serde(rename = "...")]` on each field, so changing a Rust
//! identifier can never silently change the wire contract.
//!
//! ## Usage in the front-end
//!
//! ```rust,no_run
//! use shared::dto::product::NewProductRequest;
//!
//! let request = NewProductRequest {
//!     name: "Chair".to_string(),
//!     description: "Wooden chair".to_string(),
//!     price: 10.5,
//!     owner_id: 42,
//! };
//! let body = serde_json::to_string(&request).unwrap();
//! assert!(body.contains("\"nombre\":\"Chair\""));
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
