//! Product Table Component
//!
//! Numbered rows of the filtered products, each with a delete button.

use leptos::prelude::*;

use crate::components::DeleteButton;
use crate::context::use_app_context;
use crate::models::Product;
use crate::store::{store_delete_product, store_table_rows, use_app_store};

#[component]
pub fn ProductTable() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let on_delete = Callback::new(move |product: Product| {
        store_delete_product(&store, &product);
    });

    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Shopping List"</th>
                    <th>"product"</th>
                    <th>"shop"</th>
                    <th>"category"</th>
                    <th>"delete"</th>
                </tr>
            </thead>
            <tbody>
                // Row numbers are positions, so they are part of the key
                <For
                    each=move || store_table_rows(&store).into_iter().enumerate()
                    key={|(index, product)| (*index, product.id)}
                    children={move |(index, product)| {
                        let name = product.name.clone();
                        let shop = ctx.shop_name(product.shop);
                        let category = ctx.category_name(product.category);
                        view! {
                            <tr>
                                <td>{index + 1}</td>
                                <td>{name}</td>
                                <td>{shop}</td>
                                <td>{category}</td>
                                <td>
                                    <DeleteButton product=product on_click=on_delete />
                                </td>
                            </tr>
                        }
                    }}
                />
            </tbody>
        </table>
    }
}
