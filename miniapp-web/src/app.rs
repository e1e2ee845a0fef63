//! Application shell: route table plus the bottom tab bar.

use leptos::prelude::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};

use crate::components::BottomNav;
use crate::pages::{MarketplacePage, ProfilePage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app-container" style="padding-bottom: 64px;">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/profile"/> }/>
                    <Route path=path!("/profile") view=ProfilePage/>
                    <Route path=path!("/marketplace") view=MarketplacePage/>
                </Routes>
                <BottomNav/>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="card" style="max-width: 420px; margin: 48px auto; text-align: center;">
            <h1 style="font-size: 24px; margin-bottom: 12px;">"Page not found"</h1>
            <p style="color: #666;">"This screen does not exist."</p>
        </div>
    }
}
