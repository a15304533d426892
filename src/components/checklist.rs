//! Checklist Component
//!
//! Every product, click to toggle bought. Not affected by the filter panel.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_all_products, store_toggle_bought, use_app_store, AppStateStoreFields};

#[component]
pub fn Checklist() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    view! {
        <ul class="list-group">
            <For
                each=move || store_all_products(&store)
                key=|product| product.id
                children=move |product| {
                    let id = product.id;
                    let label = format!(
                        "{} - {} - {}",
                        product.name,
                        ctx.shop_name(product.shop),
                        ctx.category_name(product.category),
                    );
                    let style = move || {
                        let is_bought = store.list().with(|list| list.get(id).is_some_and(|p| p.is_bought));
                        if is_bought { "text-decoration: line-through;" } else { "text-decoration: none;" }
                    };
                    view! {
                        <li
                            class="list-group-item"
                            style=style
                            on:click=move |_| store_toggle_bought(&store, id)
                        >
                            {label}
                        </li>
                    }
                }
            />
        </ul>
    }
}
