//! Shopping List App
//!
//! Top-level view: add form, filters, product table and checklist.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::celebrate::celebrate;
use crate::components::{Checklist, FilterPanel, NewProductForm, ProductTable};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{store_reset_session, AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(&config);

    // Provide state and config to all children
    provide_context(store);
    provide_context(ctx);

    // Completion watch, re-run after every list mutation
    Effect::new(move |_| {
        store.list().track();
        let completed = store.list().write_untracked().poll_completion();
        if completed {
            log::info!("all {} products bought", store.list().with_untracked(|list| list.len()));
            if let Err(err) = ctx.with_confetti(celebrate) {
                log::warn!("completion effect failed: {}", err);
            }
        }
    });

    view! {
        <div class="container">
            <h1 class="title">"SHOPPING LIST"</h1>

            <NewProductForm />

            <FilterPanel />

            <ProductTable />

            <Checklist />

            <div class="list-footer">
                <p class="item-count">
                    {move || store.list().with(|list| format!("{} products, {} bought", list.len(), list.bought_count()))}
                </p>
                <button class="btn btn-outline-secondary" on:click=move |_| store_reset_session(&store)>
                    "clear list"
                </button>
            </div>
        </div>
    }
}
