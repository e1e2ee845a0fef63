//! Profile view state

use shared::dto::user::UserProfile;

use crate::services::bootstrap::BootstrapError;

/// What the profile screen is showing. The `Ready` profile is always the
/// last successful server response, replaced whole on every re-fetch; a
/// `Failed` state carries exactly one classified error.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileState {
    Loading,
    Ready(UserProfile),
    Failed(BootstrapError),
}
