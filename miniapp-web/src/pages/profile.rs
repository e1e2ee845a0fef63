//! Profile Page - session bootstrap plus wallet and product management
//!
//! Owns the bootstrap lifecycle: one load per activation or user-triggered
//! reload, guarded by a request epoch so a completion from a superseded load
//! never writes state.

use leptos::prelude::*;
use shared::dto::user::UserProfile;

use crate::components::{OwnedProducts, ProductForm, WalletEditor};
use crate::services::bootstrap::{self, BootstrapOptions};
use crate::services::telegram::TelegramSession;
use crate::state::profile::ProfileState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let state = RwSignal::new(ProfileState::Loading);
    let session = RwSignal::new(None::<TelegramSession>);
    let epoch = StoredValue::new(0u64);

    // probe=true runs the connectivity check before the fetch; re-fetches
    // after a successful mutation skip it.
    let load = move |probe: bool| {
        let my_epoch = epoch.get_value() + 1;
        epoch.set_value(my_epoch);
        state.set(ProfileState::Loading);

        leptos::task::spawn_local(async move {
            let opts = BootstrapOptions {
                probe_before_fetch: probe,
                ..Default::default()
            };
            let result = bootstrap::run(&opts).await;

            if epoch.get_value() != my_epoch {
                log::debug!("discarding stale profile load (epoch {})", my_epoch);
                return;
            }

            match result {
                Ok(outcome) => {
                    session.set(Some(outcome.session));
                    state.set(ProfileState::Ready(outcome.profile));
                }
                Err(err) => {
                    session.set(None);
                    state.set(ProfileState::Failed(err));
                }
            }
        });
    };

    // View activation
    load(true);

    // Mutations already proved the server reachable
    let refetch = Callback::new(move |_: ()| load(false));

    view! {
        <div style="min-height: 100vh; background: #f3f4f6; padding: 16px;">
            <div style="max-width: 480px; margin: 0 auto;">
                {move || match state.get() {
                    ProfileState::Loading => view! {
                        <p style="text-align: center; color: #6b7280; margin-top: 48px;">
                            "Loading profile..."
                        </p>
                    }.into_any(),
                    ProfileState::Failed(err) => {
                        let message = err.to_string();
                        view! {
                            <div style="background: #fee2e2; border: 1px solid #f87171; color: #b91c1c; padding: 12px 16px; border-radius: 8px; margin-top: 24px;">
                                <strong>"Error: "</strong>
                                <span>{message}</span>
                                <div style="margin-top: 12px;">
                                    <button
                                        style="background: #b91c1c; color: #ffffff; padding: 6px 16px; border: none; border-radius: 4px;"
                                        on:click=move |_| load(true)
                                    >
                                        "Reload"
                                    </button>
                                </div>
                            </div>
                        }.into_any()
                    }
                    ProfileState::Ready(profile) => match session.get() {
                        Some(sess) => view! {
                            <ProfileCard profile=profile session=sess on_changed=refetch/>
                        }.into_any(),
                        None => view! {
                            <p style="text-align: center; color: #6b7280;">"Session lost. Reload the app."</p>
                        }.into_any(),
                    },
                }}
            </div>
        </div>
    }
}

#[component]
fn ProfileCard(
    profile: UserProfile,
    session: TelegramSession,
    #[prop(into)] on_changed: Callback<()>,
) -> impl IntoView {
    let initial = profile
        .username
        .as_deref()
        .and_then(|u| u.chars().next())
        .map(|c| c.to_ascii_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());
    let handle = profile
        .username
        .clone()
        .unwrap_or_else(|| "unnamed".to_string());

    view! {
        <div style="background: #ffffff; border-radius: 16px; box-shadow: 0 1px 4px rgba(0,0,0,0.1); padding: 24px; margin-top: 16px;">
            <div style="display: flex; flex-direction: column; align-items: center;">
                <div style="width: 72px; height: 72px; border-radius: 50%; background: #dbeafe; color: #2563eb; display: flex; align-items: center; justify-content: center; font-size: 28px; margin-bottom: 12px;">
                    {initial}
                </div>
                <h2 style="font-size: 20px; font-weight: 600;">"@" {handle}</h2>
                <p style="font-size: 13px; color: #6b7280;">"Telegram ID: " {profile.telegram_id}</p>
            </div>

            <WalletEditor
                session=session.clone()
                current_wallet=profile.wallet.clone()
                on_updated=on_changed
            />

            <OwnedProducts
                session=session.clone()
                products=profile.products.clone()
                on_changed=on_changed
            />

            <ProductForm session=session on_created=on_changed/>
        </div>
    }
}
