//! Session bootstrap: guard checks, optional liveness probe, profile fetch.
//!
//! One parametrized flow instead of per-view copies. The steps run in strict
//! order and short-circuit on the first failure; the guard checks (host,
//! identity, token) are pure reads and issue no network call. There is no
//! automatic retry at any step — the only recovery is the user reloading,
//! which runs the whole flow again from the first guard.

use shared::dto::user::UserProfile;
use thiserror::Error;

use super::{api, telegram};

/// Classification of every way the bootstrap flow can fail. The `Display`
/// text is the exact message shown to the user; views render it verbatim.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BootstrapError {
    #[error("Telegram app not detected. Open this page from the Telegram bot.")]
    NoHostEnvironment,

    #[error("No Telegram session detected.")]
    NoIdentity,

    #[error("Telegram init data is missing. Reopen the app from the bot.")]
    NoSessionToken,

    #[error("The server took too long to respond. Check your connection and reload.")]
    Timeout,

    #[error("Could not reach the server. Check your internet connection.")]
    ServerUnreachable,

    #[error("Server error. Please try again later.")]
    ServerError,

    #[error("Not authorized. Make sure you opened the app from the Telegram bot.")]
    Unauthorized,

    #[error("User not found. Create your wallet from the bot first.")]
    ProfileNotFound,

    #[error("The server returned no profile data.")]
    EmptyProfile,

    #[error("Could not load the profile: {}", .detail.as_deref().unwrap_or("unknown error"))]
    UnclassifiedHttp { status: u16, detail: Option<String> },
}

/// Knobs for the bootstrap flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapOptions {
    /// Hit `GET /users/health` before fetching the profile, so connectivity
    /// problems surface as such instead of as a failed profile fetch.
    pub probe_before_fetch: bool,
    /// Log each step at info level.
    pub verbose: bool,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            probe_before_fetch: true,
            verbose: false,
        }
    }
}

/// Result of a successful bootstrap: the session the flow ran under plus the
/// freshly fetched profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Bootstrap {
    pub session: telegram::TelegramSession,
    pub profile: UserProfile,
}

/// Run the full bootstrap flow.
///
/// Host reads happen here, at call time, so a host session that appears
/// after page load is still picked up on the next run.
pub async fn run(opts: &BootstrapOptions) -> Result<Bootstrap, BootstrapError> {
    let session = telegram::acquire_session()?;
    if opts.verbose {
        log::info!("bootstrap: session acquired for user {}", session.user_id);
    }

    if opts.probe_before_fetch {
        api::health_probe(&session.init_data).await?;
        if opts.verbose {
            log::info!("bootstrap: health probe ok");
        }
    }

    let profile = api::fetch_profile(session.user_id, &session.init_data).await?;
    if opts.verbose {
        log::info!(
            "bootstrap: profile loaded, {} product(s)",
            profile.products.len()
        );
    }
    Ok(Bootstrap { session, profile })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_probe_quietly() {
        let opts = BootstrapOptions::default();
        assert!(opts.probe_before_fetch);
        assert!(!opts.verbose);
    }

    #[test]
    fn user_messages_are_actionable() {
        assert_eq!(
            BootstrapError::ProfileNotFound.to_string(),
            "User not found. Create your wallet from the bot first."
        );
        assert_eq!(
            BootstrapError::UnclassifiedHttp {
                status: 418,
                detail: Some("teapot".into()),
            }
            .to_string(),
            "Could not load the profile: teapot"
        );
        assert_eq!(
            BootstrapError::UnclassifiedHttp {
                status: 418,
                detail: None,
            }
            .to_string(),
            "Could not load the profile: unknown error"
        );
    }
}
