//! Delete Button Component

use leptos::prelude::*;

use crate::models::Product;

/// Trash button handing its product to `on_click`
#[component]
pub fn DeleteButton(
    product: Product,
    #[prop(into)] on_click: Callback<Product>,
) -> impl IntoView {
    view! {
        <button
            class="btn btn-danger"
            title="delete"
            on:click=move |ev| {
                ev.stop_propagation();
                on_click.run(product.clone());
            }
        >
            "🗑"
        </button>
    }
}
