//! Application constants

/// Default API base URL for local development.
const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Base URL of the marketplace API. Deployments override it at build time
/// via the `MARKETPLACE_API_URL` environment variable (the app ships as a
/// static site, so there is no runtime environment to read).
pub fn api_base() -> &'static str {
    option_env!("MARKETPLACE_API_URL").unwrap_or(DEFAULT_API_BASE)
}

/// Client-side timeout for the health probe.
pub const PROBE_TIMEOUT_MS: u32 = 8_000;

/// Whether the marketplace re-fetches the product list after a successful
/// purchase. Off matches the historical behavior: the bought item stays on
/// screen until the next visit.
pub const REFRESH_AFTER_PURCHASE: bool = false;

/// Currency label shown next to prices.
pub const CURRENCY: &str = "MNT";
