//! Owned-product list with inline edit and two-step delete (Profile view)

use leptos::prelude::*;
use shared::dto::product::UpdateProductRequest;
use shared::dto::user::ProductSummary;

use super::product_form::parse_price;
use crate::services::{api, telegram::TelegramSession};
use crate::utils::format::format_price;

/// Outcome of pressing delete on a product, given which product (if any) is
/// currently awaiting confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeleteStep {
    /// Arm the confirmation; no request yet.
    Armed(i64),
    /// The armed product was pressed again; issue the DELETE.
    Fire(i64),
}

/// Two-step delete transition. Only a second press on the already-armed
/// product fires; anything else (first press, or a press on a different
/// product) just arms that product.
pub(crate) fn next_delete_step(pending: Option<i64>, pressed: i64) -> DeleteStep {
    match pending {
        Some(armed) if armed == pressed => DeleteStep::Fire(armed),
        _ => DeleteStep::Armed(pressed),
    }
}

/// Build the update request from the raw edit fields.
pub(crate) fn build_update_request(
    name: &str,
    description: &str,
    price_input: &str,
) -> Result<UpdateProductRequest, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required.".to_string());
    }
    Ok(UpdateProductRequest {
        name: name.to_string(),
        description: description.trim().to_string(),
        price: parse_price(price_input)?,
    })
}

#[component]
pub fn OwnedProducts(
    session: TelegramSession,
    products: Vec<ProductSummary>,
    #[prop(into)] on_changed: Callback<()>,
) -> impl IntoView {
    // Which product has an open edit form, and the draft fields.
    let editing = RwSignal::new(None::<i64>);
    let edit_name = RwSignal::new(String::new());
    let edit_description = RwSignal::new(String::new());
    let edit_price = RwSignal::new(String::new());

    // Delete is two-step: the first press arms the confirmation, only the
    // second press issues the request.
    let pending_delete = RwSignal::new(None::<i64>);

    let busy = RwSignal::new(false);
    let alert = RwSignal::new(None::<String>);

    let init_data = StoredValue::new(session.init_data);

    let submit_edit = move |product_id: i64| {
        if busy.get() {
            return;
        }
        alert.set(None);
        let request = match build_update_request(
            &edit_name.get(),
            &edit_description.get(),
            &edit_price.get(),
        ) {
            Ok(request) => request,
            Err(msg) => {
                alert.set(Some(msg));
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            let token = init_data.get_value();
            match api::update_product(product_id, &request, &token).await {
                Ok(()) => {
                    editing.set(None);
                    on_changed.run(());
                }
                Err(msg) => alert.set(Some(msg)),
            }
            busy.set(false);
        });
    };

    let fire_delete = move |product_id: i64| {
        if busy.get() {
            return;
        }
        alert.set(None);
        busy.set(true);
        leptos::task::spawn_local(async move {
            let token = init_data.get_value();
            match api::delete_product(product_id, &token).await {
                Ok(()) => {
                    pending_delete.set(None);
                    on_changed.run(());
                }
                Err(msg) => {
                    pending_delete.set(None);
                    alert.set(Some(msg));
                }
            }
            busy.set(false);
        });
    };

    let press_delete = move |product_id: i64| {
        match next_delete_step(pending_delete.get(), product_id) {
            DeleteStep::Armed(id) => pending_delete.set(Some(id)),
            DeleteStep::Fire(id) => fire_delete(id),
        }
    };

    let empty = products.is_empty();
    let items = products
        .into_iter()
        .map(|product| {
            let product_id = product.id;
            let name = product.name.clone();
            let description = product.description.clone();
            let price = product.price;

            let open_edit = {
                let name = name.clone();
                let description = description.clone();
                move |_| {
                    pending_delete.set(None);
                    alert.set(None);
                    edit_name.set(name.clone());
                    edit_description.set(description.clone());
                    edit_price.set(format!("{}", price));
                    editing.set(Some(product_id));
                }
            };

            view! {
                <li style="padding: 12px; background: #f3f4f6; border: 1px solid #e5e7eb; border-radius: 8px; margin-bottom: 8px;">
                    {move || if editing.get() == Some(product_id) {
                        view! {
                            <div>
                                <input
                                    type="text"
                                    required
                                    style="width: 100%; padding: 6px; margin-bottom: 6px; border: 1px solid #d1d5db; border-radius: 4px;"
                                    prop:value=move || edit_name.get()
                                    on:input=move |ev| edit_name.set(event_target_value(&ev))
                                />
                                <textarea
                                    required
                                    style="width: 100%; padding: 6px; margin-bottom: 6px; border: 1px solid #d1d5db; border-radius: 4px;"
                                    prop:value=move || edit_description.get()
                                    on:input=move |ev| edit_description.set(event_target_value(&ev))
                                ></textarea>
                                <input
                                    type="number"
                                    step="0.01"
                                    min="0"
                                    required
                                    style="width: 100%; padding: 6px; margin-bottom: 6px; border: 1px solid #d1d5db; border-radius: 4px;"
                                    prop:value=move || edit_price.get()
                                    on:input=move |ev| edit_price.set(event_target_value(&ev))
                                />
                                <div style="display: flex; gap: 8px;">
                                    <button
                                        disabled=move || busy.get()
                                        style="background: #2563eb; color: #ffffff; padding: 6px 12px; border: none; border-radius: 4px;"
                                        on:click=move |_| submit_edit(product_id)
                                    >
                                        "Save"
                                    </button>
                                    <button
                                        style="color: #dc2626; background: none; border: none;"
                                        on:click=move |_| editing.set(None)
                                    >
                                        "Cancel"
                                    </button>
                                </div>
                            </div>
                        }.into_any()
                    } else {
                        let name = name.clone();
                        let description = description.clone();
                        let open_edit = open_edit.clone();
                        view! {
                            <div>
                                <div style="display: flex; justify-content: space-between;">
                                    <strong>{name}</strong>
                                    <span style="color: #16a34a; font-weight: 600;">{format_price(price)}</span>
                                </div>
                                <p style="font-size: 13px; color: #6b7280; margin: 4px 0;">{description}</p>
                                <div style="display: flex; gap: 12px;">
                                    <button
                                        style="color: #2563eb; background: none; border: none; font-size: 14px;"
                                        on:click=open_edit
                                    >
                                        "Edit"
                                    </button>
                                    {move || if pending_delete.get() == Some(product_id) {
                                        view! {
                                            <span>
                                                <button
                                                    disabled=move || busy.get()
                                                    style="color: #ffffff; background: #dc2626; border: none; border-radius: 4px; padding: 2px 8px; font-size: 14px;"
                                                    on:click=move |_| press_delete(product_id)
                                                >
                                                    "Confirm delete"
                                                </button>
                                                <button
                                                    style="color: #6b7280; background: none; border: none; font-size: 14px; margin-left: 8px;"
                                                    on:click=move |_| pending_delete.set(None)
                                                >
                                                    "Keep"
                                                </button>
                                            </span>
                                        }.into_any()
                                    } else {
                                        view! {
                                            <span>
                                                <button
                                                    style="color: #dc2626; background: none; border: none; font-size: 14px;"
                                                    on:click=move |_| press_delete(product_id)
                                                >
                                                    "Delete"
                                                </button>
                                            </span>
                                        }.into_any()
                                    }}
                                </div>
                            </div>
                        }.into_any()
                    }}
                </li>
            }
        })
        .collect_view();

    view! {
        <div style="margin-top: 16px;">
            <h3 style="font-size: 18px; font-weight: 600; text-align: center; margin-bottom: 8px;">
                "Published products"
            </h3>
            {move || alert.get().map(|msg| view! {
                <p style="color: #dc2626; font-size: 14px; margin-bottom: 8px;">{msg}</p>
            })}
            {empty.then(|| view! {
                <p style="text-align: center; color: #6b7280;">"No products yet."</p>
            })}
            <ul style="list-style: none; padding: 0;">{items}</ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_update_request() {
        let request = build_update_request("Chair", "Fixed the legs", "12").unwrap();
        assert_eq!(request.name, "Chair");
        assert_eq!(request.description, "Fixed the legs");
        assert_eq!(request.price, 12.0);
    }

    #[test]
    fn rejects_invalid_edits() {
        assert!(build_update_request(" ", "desc", "1").is_err());
        assert!(build_update_request("Chair", "desc", "-1").is_err());
    }

    #[test]
    fn first_delete_press_arms_without_firing() {
        assert_eq!(next_delete_step(None, 5), DeleteStep::Armed(5));
    }

    #[test]
    fn pressing_delete_on_another_product_rearms() {
        // Still no request: the armed product changes, nothing fires.
        assert_eq!(next_delete_step(Some(3), 5), DeleteStep::Armed(5));
    }

    #[test]
    fn confirming_the_armed_product_fires_once() {
        assert_eq!(next_delete_step(Some(5), 5), DeleteStep::Fire(5));
    }
}
