//! # Shared Utility Functions
//!
//! Display helpers shared between the front-end views.
//!
//! ## Wallet Formatting
//!
//! Wallet addresses are long hex/base58 strings; the profile card shows a
//! shortened form:
//! - [`format_wallet`] - first N and last M characters with an ellipsis
//! - [`truncate_wallet`] - [`format_wallet`] with the default 6/4 split

/// Format a wallet address by showing the first `prefix_len` and last
/// `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned
/// as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_wallet;
///
/// let addr = "0xA1b2C3d4E5f6A7b8C9d0E1f2A3b4C5d6E7f8A9b0";
/// assert_eq!(format_wallet(addr, 6, 4), "0xA1b2...A9b0");
/// assert_eq!(format_wallet("short", 6, 4), "short");
/// ```
pub fn format_wallet(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Guard against lengths exceeding the address length to prevent panics.
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    // Safe to slice: wallet addresses are ASCII-only.
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with the default 6-character prefix and
/// 4-character suffix.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_wallet;
///
/// let addr = "0xA1b2C3d4E5f6A7b8C9d0E1f2A3b4C5d6E7f8A9b0";
/// assert_eq!(truncate_wallet(addr), "0xA1b2...A9b0");
/// ```
pub fn truncate_wallet(address: &str) -> String {
    format_wallet(address, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_wallet() {
        let addr = "0xA1b2C3d4E5f6A7b8C9d0E1f2A3b4C5d6E7f8A9b0";
        assert_eq!(format_wallet(addr, 6, 4), "0xA1b2...A9b0");
        assert_eq!(format_wallet(addr, 4, 4), "0xA1...A9b0");
        assert_eq!(format_wallet(addr, 2, 2), "0x...b0");
    }

    #[test]
    fn test_format_wallet_short() {
        assert_eq!(format_wallet("short", 6, 4), "short");
        assert_eq!(format_wallet("abc", 4, 4), "abc");
        assert_eq!(format_wallet("", 4, 4), "");
    }

    #[test]
    fn test_truncate_wallet() {
        let addr = "0xA1b2C3d4E5f6A7b8C9d0E1f2A3b4C5d6E7f8A9b0";
        assert_eq!(truncate_wallet(addr), "0xA1b2...A9b0");
    }
}
