//! New Product Form Component
//!
//! Name input plus shop and category selects.

use leptos::prelude::*;

use crate::components::CatalogSelect;
use crate::context::use_app_context;
use crate::models::{CategoryId, ShopId};
use crate::store::{store_add_product, use_app_store, AppStateStoreFields};

/// Form for adding a product; invalid input is ignored silently
#[component]
pub fn NewProductForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let add_product = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match ctx.with_catalog(|catalog| store_add_product(&store, catalog)) {
            Ok(id) => log::info!("added product {}", id),
            Err(err) => log::debug!("add ignored: {}", err),
        }
    };

    view! {
        <form class="input-group mb-3" on:submit=add_product>
            <input
                type="text"
                class="form-control"
                placeholder="product name"
                prop:value=move || store.draft().with(|draft| draft.name.clone())
                on:input=move |ev| {
                    store.draft().write().name = event_target_value(&ev);
                }
            />
            <CatalogSelect
                options=ctx.shop_options()
                placeholder="select shop"
                selected=Signal::derive(move || store.draft().with(|draft| draft.shop.map(|id| id.0)))
                on_change={move |id: Option<u32>| {
                    store.draft().write().shop = id.map(ShopId);
                }}
            />
            <CatalogSelect
                options=ctx.category_options()
                placeholder="select category"
                selected=Signal::derive(move || store.draft().with(|draft| draft.category.map(|id| id.0)))
                on_change={move |id: Option<u32>| {
                    store.draft().write().category = id.map(CategoryId);
                }}
            />
            <button type="submit" class="btn btn-primary">"add"</button>
        </form>
    }
}
