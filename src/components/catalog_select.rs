//! Catalog Select Component
//!
//! Dropdown over shop or category entries, keyed by numeric id.

use leptos::prelude::*;

/// `<select>` with an empty placeholder option meaning "none"
#[component]
pub fn CatalogSelect(
    options: Vec<(u32, String)>,
    #[prop(into)] placeholder: String,
    selected: Signal<Option<u32>>,
    #[prop(into)] on_change: Callback<Option<u32>>,
) -> impl IntoView {
    view! {
        <select
            class="form-select"
            prop:value=move || selected.get().map(|id| id.to_string()).unwrap_or_default()
            on:change=move |ev| on_change.run(event_target_value(&ev).parse::<u32>().ok())
        >
            <option value="">{placeholder}</option>
            {options.into_iter().map(|(id, name)| view! {
                <option value=id.to_string()>{name}</option>
            }).collect_view()}
        </select>
    }
}
