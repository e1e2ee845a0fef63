//! Create-product form (Profile view)

use leptos::prelude::*;
use shared::dto::product::NewProductRequest;

use crate::services::{api, telegram::TelegramSession};

/// Parse a price field. The input carries `min="0"` and `step="0.01"`, but
/// the value still arrives as free text.
pub(crate) fn parse_price(input: &str) -> Result<f64, String> {
    let price: f64 = input
        .trim()
        .parse()
        .map_err(|_| "Price must be a number.".to_string())?;
    if !price.is_finite() || price < 0.0 {
        return Err("Price must be zero or positive.".to_string());
    }
    Ok(price)
}

/// Build the create request from the raw form fields, with the current
/// identity as owner.
pub(crate) fn build_create_request(
    name: &str,
    description: &str,
    price_input: &str,
    owner_id: i64,
) -> Result<NewProductRequest, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required.".to_string());
    }
    Ok(NewProductRequest {
        name: name.to_string(),
        description: description.trim().to_string(),
        price: parse_price(price_input)?,
        owner_id,
    })
}

#[component]
pub fn ProductForm(
    session: TelegramSession,
    #[prop(into)] on_created: Callback<()>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new("0".to_string());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let owner_id = session.user_id;
    let init_data = StoredValue::new(session.init_data);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(None);

        let request = match build_create_request(
            &name.get(),
            &description.get(),
            &price.get(),
            owner_id,
        ) {
            Ok(request) => request,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };

        busy.set(true);
        leptos::task::spawn_local(async move {
            let token = init_data.get_value();
            match api::create_product(&request, &token).await {
                Ok(()) => {
                    // Back to a blank form, then let the parent re-fetch.
                    name.set(String::new());
                    description.set(String::new());
                    price.set("0".to_string());
                    on_created.run(());
                }
                Err(msg) => error.set(Some(msg)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="card" style="margin-top: 24px; padding: 16px; background: #ffffff; border: 1px solid #e0e0e0; border-radius: 8px;">
            <h3 style="font-size: 18px; font-weight: 600; margin-bottom: 8px;">"Create new product"</h3>
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Name"
                    required
                    style="width: 100%; padding: 8px; margin-bottom: 8px; border: 1px solid #d1d5db; border-radius: 4px;"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Description"
                    required
                    style="width: 100%; padding: 8px; margin-bottom: 8px; border: 1px solid #d1d5db; border-radius: 4px;"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <input
                    type="number"
                    placeholder="Price in MNT"
                    step="0.01"
                    min="0"
                    required
                    style="width: 100%; padding: 8px; margin-bottom: 8px; border: 1px solid #d1d5db; border-radius: 4px;"
                    prop:value=move || price.get()
                    on:input=move |ev| price.set(event_target_value(&ev))
                />
                {move || error.get().map(|msg| view! {
                    <p style="color: #dc2626; font-size: 14px; margin-bottom: 8px;">{msg}</p>
                })}
                <button
                    type="submit"
                    disabled=move || busy.get()
                    style="background: #16a34a; color: #ffffff; padding: 8px 16px; border: none; border-radius: 4px;"
                >
                    {move || if busy.get() { "Creating..." } else { "Create product" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_request_with_owner_identity() {
        let request = build_create_request("Chair", "Wooden chair", "10.5", 42).unwrap();
        assert_eq!(request.name, "Chair");
        assert_eq!(request.description, "Wooden chair");
        assert_eq!(request.price, 10.5);
        assert_eq!(request.owner_id, 42);
    }

    #[test]
    fn trims_whitespace() {
        let request = build_create_request("  Chair ", " Wooden chair\n", " 10.5 ", 1).unwrap();
        assert_eq!(request.name, "Chair");
        assert_eq!(request.description, "Wooden chair");
        assert_eq!(request.price, 10.5);
    }

    #[test]
    fn rejects_empty_name_and_bad_price() {
        assert!(build_create_request("", "desc", "1", 1).is_err());
        assert!(build_create_request("Chair", "desc", "free", 1).is_err());
        assert!(build_create_request("Chair", "desc", "-2", 1).is_err());
        assert!(build_create_request("Chair", "desc", "NaN", 1).is_err());
    }

    #[test]
    fn zero_price_is_allowed() {
        assert_eq!(parse_price("0").unwrap(), 0.0);
    }
}
