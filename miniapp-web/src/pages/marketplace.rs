//! Marketplace Page - browse and buy other users' products

use leptos::prelude::*;
use shared::dto::product::Product;
use shared::dto::purchase::PurchaseRequest;

use crate::services::{api, telegram};
use crate::utils::constants::REFRESH_AFTER_PURCHASE;
use crate::utils::format::format_price;

/// Everything except the viewer's own listings. With no identity there is
/// nothing to filter against, so the full list is shown.
pub(crate) fn visible_products(products: Vec<Product>, viewer_id: Option<i64>) -> Vec<Product> {
    match viewer_id {
        Some(viewer) => products.into_iter().filter(|p| p.owner_id != viewer).collect(),
        None => products,
    }
}

#[component]
pub fn MarketplacePage() -> impl IntoView {
    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    // One acknowledgment line for the last purchase attempt.
    let notice = RwSignal::new(None::<String>);

    // Fresh host read at view activation. Browsing works without a session;
    // buying does not.
    let session = StoredValue::new(telegram::acquire_session().ok());

    let fetch = move || {
        loading.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            let init_data = session
                .with_value(|s| s.as_ref().map(|s| s.init_data.clone()))
                .unwrap_or_default();
            match api::list_products(&init_data).await {
                Ok(all) => {
                    let viewer_id = session.with_value(|s| s.as_ref().map(|s| s.user_id));
                    products.set(visible_products(all, viewer_id));
                }
                Err(msg) => error.set(Some(msg)),
            }
            loading.set(false);
        });
    };

    fetch();

    let buy = move |product_id: i64| {
        notice.set(None);
        let Some((buyer_id, init_data)) =
            session.with_value(|s| s.as_ref().map(|s| (s.user_id, s.init_data.clone())))
        else {
            notice.set(Some("No Telegram session detected.".to_string()));
            return;
        };

        leptos::task::spawn_local(async move {
            let request = PurchaseRequest {
                product_id,
                buyer_id,
            };
            match api::create_purchase(&request, &init_data).await {
                Ok(()) => {
                    notice.set(Some("Purchase completed!".to_string()));
                    if REFRESH_AFTER_PURCHASE {
                        fetch();
                    }
                }
                Err(msg) => notice.set(Some(msg)),
            }
        });
    };

    view! {
        <div style="min-height: 100vh; background: #f3f4f6; padding: 16px;">
            <div style="max-width: 480px; margin: 0 auto;">
                <h2 style="font-size: 20px; font-weight: 600; margin-bottom: 12px;">"Marketplace"</h2>

                {move || notice.get().map(|msg| view! {
                    <p style="background: #eff6ff; border: 1px solid #bfdbfe; color: #1d4ed8; padding: 8px 12px; border-radius: 8px; margin-bottom: 12px;">
                        {msg}
                    </p>
                })}

                {move || {
                    if loading.get() {
                        view! {
                            <p style="color: #6b7280;">"Loading products..."</p>
                        }.into_any()
                    } else if let Some(msg) = error.get() {
                        view! {
                            <p style="color: #dc2626;">{msg}</p>
                        }.into_any()
                    } else {
                        let items = products.get();
                        if items.is_empty() {
                            view! {
                                <p style="color: #6b7280;">"Nothing for sale right now."</p>
                            }.into_any()
                        } else {
                            items
                                .into_iter()
                                .map(|product| {
                                    let product_id = product.id;
                                    view! {
                                        <div style="background: #ffffff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px; margin-bottom: 12px; box-shadow: 0 1px 2px rgba(0,0,0,0.05);">
                                            <div style="display: flex; justify-content: space-between;">
                                                <h3 style="font-size: 16px; font-weight: 700;">{product.name}</h3>
                                                <span style="color: #16a34a; font-weight: 600;">
                                                    {format_price(product.price)}
                                                </span>
                                            </div>
                                            <p style="color: #6b7280; margin: 4px 0 8px;">{product.description}</p>
                                            <button
                                                style="background: #2563eb; color: #ffffff; padding: 6px 16px; border: none; border-radius: 4px;"
                                                on:click=move |_| buy(product_id)
                                            >
                                                "Buy"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn product(id: i64, owner_id: i64) -> Product {
        Product {
            id,
            name: format!("product-{}", id),
            description: String::new(),
            price: 1.0,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            owner_id,
        }
    }

    #[test]
    fn own_products_are_filtered_out() {
        let all = vec![product(1, 42), product(2, 7), product(3, 9)];
        let visible = visible_products(all, Some(42));
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|p| p.owner_id != 42));
    }

    #[test]
    fn no_identity_means_no_filtering() {
        let all = vec![product(1, 42), product(2, 7), product(3, 9)];
        assert_eq!(visible_products(all, None).len(), 3);
    }

    #[test]
    fn filtering_preserves_server_order() {
        let all = vec![product(3, 7), product(1, 42), product(2, 9)];
        let visible = visible_products(all, Some(42));
        assert_eq!(visible[0].id, 3);
        assert_eq!(visible[1].id, 2);
    }
}
