//! Telegram WebApp Integration via wasm-bindgen
//!
//! JavaScript interop for the `window.Telegram.WebApp` surface the host
//! client injects. Everything here degrades gracefully outside Telegram:
//! probes return `null`/`false`, lifecycle calls are no-ops.
//!
//! Host reads are performed on demand (at view activation), never cached at
//! module load: the host object can appear after our WASM has initialized.

use serde::{Deserialize, Serialize};
use shared::dto::user::TelegramUser;
use wasm_bindgen::prelude::*;

use super::bootstrap::BootstrapError;

#[wasm_bindgen(inline_js = "
export function telegramAvailable() {
    return !!(window.Telegram && window.Telegram.WebApp);
}

export function telegramInitData() {
    const tg = window.Telegram && window.Telegram.WebApp;
    if (tg && tg.initData && tg.initData.length > 0) {
        return tg.initData;
    }
    return null;
}

export function telegramUser() {
    const tg = window.Telegram && window.Telegram.WebApp;
    if (tg && tg.initDataUnsafe && tg.initDataUnsafe.user) {
        return tg.initDataUnsafe.user;
    }
    return null;
}

export function telegramReady() {
    try {
        if (window.Telegram && window.Telegram.WebApp) {
            window.Telegram.WebApp.ready();
        }
    } catch (e) {
        console.warn('Telegram WebApp ready() failed:', e);
    }
}

export function telegramExpand() {
    try {
        if (window.Telegram && window.Telegram.WebApp) {
            window.Telegram.WebApp.expand();
        }
    } catch (e) {
        console.warn('Telegram WebApp expand() failed:', e);
    }
}
")]
extern "C" {
    /// Whether the host injected `window.Telegram.WebApp`
    fn telegramAvailable() -> bool;

    /// The raw init-data token, or null when absent/empty
    fn telegramInitData() -> Option<String>;

    /// The `initDataUnsafe.user` object, or null
    fn telegramUser() -> JsValue;

    /// Signal the host that the app finished loading
    fn telegramReady();

    /// Ask the host for the full viewport
    fn telegramExpand();
}

/// Signal the host that the app finished loading. No-op outside Telegram.
pub fn notify_ready() {
    telegramReady();
}

/// Ask the host for the full viewport. No-op outside Telegram.
pub fn expand_viewport() {
    telegramExpand();
}

/// Point-in-time view of the host session surface. Taken fresh on every
/// bootstrap run so a host that appears late is still picked up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostSnapshot {
    pub available: bool,
    pub user: Option<TelegramUser>,
    pub init_data: Option<String>,
}

/// A usable host session: identity plus the token that must accompany every
/// authenticated request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelegramSession {
    pub user_id: i64,
    pub username: Option<String>,
    pub init_data: String,
}

/// Read the current state of the host surface.
pub fn snapshot_host() -> HostSnapshot {
    if !telegramAvailable() {
        return HostSnapshot::default();
    }

    let user_js = telegramUser();
    let user = if user_js.is_null() || user_js.is_undefined() {
        None
    } else {
        match serde_wasm_bindgen::from_value::<TelegramUser>(user_js) {
            Ok(user) => Some(user),
            Err(err) => {
                log::warn!("failed to decode Telegram user object: {:?}", err);
                None
            }
        }
    };

    HostSnapshot {
        available: true,
        user,
        init_data: telegramInitData(),
    }
}

/// Turn a host snapshot into a session, or the guard error naming the first
/// missing piece. Pure: issues no network call and touches no JS.
pub fn session_from_snapshot(snapshot: HostSnapshot) -> Result<TelegramSession, BootstrapError> {
    if !snapshot.available {
        return Err(BootstrapError::NoHostEnvironment);
    }
    let user = snapshot.user.ok_or(BootstrapError::NoIdentity)?;
    let init_data = match snapshot.init_data {
        Some(data) if !data.is_empty() => data,
        _ => return Err(BootstrapError::NoSessionToken),
    };
    Ok(TelegramSession {
        user_id: user.id,
        username: user.username,
        init_data,
    })
}

/// Re-checked host read performed at view activation.
pub fn acquire_session() -> Result<TelegramSession, BootstrapError> {
    session_from_snapshot(snapshot_host())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64) -> TelegramUser {
        TelegramUser {
            id,
            username: Some("alice".into()),
            first_name: None,
            last_name: None,
            language_code: None,
            photo_url: None,
        }
    }

    #[test]
    fn missing_host_is_no_host_environment() {
        let err = session_from_snapshot(HostSnapshot::default()).unwrap_err();
        assert_eq!(err, BootstrapError::NoHostEnvironment);
    }

    #[test]
    fn missing_user_is_no_identity() {
        let snapshot = HostSnapshot {
            available: true,
            user: None,
            init_data: Some("token".into()),
        };
        assert_eq!(
            session_from_snapshot(snapshot).unwrap_err(),
            BootstrapError::NoIdentity
        );
    }

    #[test]
    fn missing_or_empty_token_is_no_session_token() {
        for init_data in [None, Some(String::new())] {
            let snapshot = HostSnapshot {
                available: true,
                user: Some(user(42)),
                init_data,
            };
            assert_eq!(
                session_from_snapshot(snapshot).unwrap_err(),
                BootstrapError::NoSessionToken
            );
        }
    }

    #[test]
    fn complete_snapshot_yields_session() {
        let snapshot = HostSnapshot {
            available: true,
            user: Some(user(42)),
            init_data: Some("query_id=abc".into()),
        };
        let session = session_from_snapshot(snapshot).unwrap();
        assert_eq!(session.user_id, 42);
        assert_eq!(session.username.as_deref(), Some("alice"));
        assert_eq!(session.init_data, "query_id=abc");
    }
}
