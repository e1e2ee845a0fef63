//! Wallet display / inline edit (Profile view)
//!
//! Toggles between a read-only line and an edit field. A failed update keeps
//! the edit field open with an inline error so the user can retry by hand.

use leptos::prelude::*;
use shared::utils::truncate_wallet;

use crate::services::{api, telegram::TelegramSession};

#[component]
pub fn WalletEditor(
    session: TelegramSession,
    current_wallet: String,
    #[prop(into)] on_updated: Callback<()>,
) -> impl IntoView {
    let editing = RwSignal::new(false);
    let draft = RwSignal::new(current_wallet.clone());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let user_id = session.user_id;
    let init_data = StoredValue::new(session.init_data);
    let saved_wallet = StoredValue::new(current_wallet);

    let display_wallet = move || {
        let wallet = saved_wallet.get_value();
        if wallet.is_empty() {
            "Not assigned".to_string()
        } else {
            truncate_wallet(&wallet)
        }
    };

    let start_editing = move |_| {
        draft.set(saved_wallet.get_value());
        error.set(None);
        editing.set(true);
    };

    let save = move |_| {
        if busy.get() {
            return;
        }
        error.set(None);
        busy.set(true);
        leptos::task::spawn_local(async move {
            let token = init_data.get_value();
            let wallet = draft.get_untracked();
            match api::update_wallet(user_id, &wallet, &token).await {
                Ok(()) => {
                    editing.set(false);
                    on_updated.run(());
                }
                // Stay in edit mode; the draft is kept for a manual retry.
                Err(msg) => error.set(Some(msg)),
            }
            busy.set(false);
        });
    };

    view! {
        <div style="margin-top: 8px;">
            {move || if editing.get() {
                view! {
                    <div>
                        <input
                            type="text"
                            placeholder="Enter your wallet"
                            style="width: 100%; padding: 8px; border: 1px solid #d1d5db; border-radius: 4px;"
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(event_target_value(&ev))
                        />
                        <div style="display: flex; gap: 8px; margin-top: 8px;">
                            <button
                                disabled=move || busy.get()
                                style="background: #2563eb; color: #ffffff; padding: 8px 16px; border: none; border-radius: 4px;"
                                on:click=save
                            >
                                {move || if busy.get() { "Saving..." } else { "Save" }}
                            </button>
                            <button
                                style="color: #dc2626; background: none; border: none;"
                                on:click=move |_| editing.set(false)
                            >
                                "Cancel"
                            </button>
                        </div>
                        {move || error.get().map(|msg| view! {
                            <p style="color: #dc2626; font-size: 14px; margin-top: 8px;">{msg}</p>
                        })}
                    </div>
                }.into_any()
            } else {
                view! {
                    <div>
                        <p style="font-size: 14px;">
                            <strong>"Wallet: "</strong>
                            {display_wallet()}
                        </p>
                        <button
                            style="color: #2563eb; background: none; border: none; font-size: 14px; text-decoration: underline;"
                            on:click=start_editing
                        >
                            "Update wallet"
                        </button>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
