//! UI Components
//!
//! Reusable Leptos components.

mod catalog_select;
mod checklist;
mod delete_button;
mod filter_panel;
mod new_product_form;
mod product_table;

pub use catalog_select::CatalogSelect;
pub use checklist::Checklist;
pub use delete_button::DeleteButton;
pub use filter_panel::FilterPanel;
pub use new_product_form::NewProductForm;
pub use product_table::ProductTable;
