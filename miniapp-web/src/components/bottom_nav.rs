//! Bottom Tab Bar

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

const TABS: &[(&str, &str)] = &[("/profile", "Profile"), ("/marketplace", "Marketplace")];

#[component]
pub fn BottomNav() -> impl IntoView {
    // Memo is Copy, so each tab's style closure can capture it.
    let pathname = use_location().pathname;

    view! {
        <nav style="position: fixed; bottom: 0; left: 0; right: 0; background: #ffffff; border-top: 1px solid #e0e0e0; z-index: 50;">
            <div style="display: flex; justify-content: space-around; align-items: center; padding: 10px 0;">
                {TABS
                    .iter()
                    .map(|&(path, label)| {
                        let active_style = move || {
                            if pathname.get() == path {
                                "color: #2563eb; font-weight: 600; text-decoration: none;"
                            } else {
                                "color: #9ca3af; text-decoration: none;"
                            }
                        };
                        view! {
                            <A href=path>
                                <span style=active_style>{label}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
