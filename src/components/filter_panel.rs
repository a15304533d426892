//! Filter Panel Component
//!
//! Shop, category, bought-status and name filters for the product table.

use leptos::prelude::*;

use crate::components::CatalogSelect;
use crate::context::use_app_context;
use crate::filter::StatusFilter;
use crate::models::{CategoryId, ShopId};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterPanel() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    view! {
        <div class="filter-group mb-3">
            <CatalogSelect
                options=ctx.shop_options()
                placeholder="All Shops"
                selected=Signal::derive(move || store.filter().with(|filter| filter.shop.map(|id| id.0)))
                on_change={move |id: Option<u32>| {
                    store.filter().write().shop = id.map(ShopId);
                }}
            />
            <CatalogSelect
                options=ctx.category_options()
                placeholder="All Categories"
                selected=Signal::derive(move || store.filter().with(|filter| filter.category.map(|id| id.0)))
                on_change={move |id: Option<u32>| {
                    store.filter().write().category = id.map(CategoryId);
                }}
            />

            <div class="status-filter">
                {StatusFilter::OPTIONS.iter().map(|(status, label)| {
                    let status = *status;
                    view! {
                        <label>
                            <input
                                type="radio"
                                name="status-filter"
                                value=status.value()
                                prop:checked=move || store.filter().with(|filter| filter.status == status)
                                on:change=move |_| {
                                    store.filter().write().status = status;
                                }
                            />
                            {*label}
                        </label>
                    }
                }).collect_view()}
            </div>

            // Filtering reacts on every keystroke
            <input
                type="text"
                class="form-control"
                placeholder="product name"
                prop:value=move || store.filter().with(|filter| filter.name.clone())
                on:input=move |ev| {
                    store.filter().write().name = event_target_value(&ev);
                }
            />
        </div>
    }
}
