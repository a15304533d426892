//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::Catalog;
use crate::error::AddProductError;
use crate::filter::{filter_products, ProductFilter};
use crate::list::{validate_draft, ShoppingList};
use crate::models::{Product, ProductDraft, ProductId};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Products and completion state
    pub list: ShoppingList,
    /// Add-product form fields
    pub draft: ProductDraft,
    /// Filter panel fields
    pub filter: ProductFilter,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Turn the draft into a product and clear the form.
/// On error nothing changes, the draft included, and no subscriber is notified.
pub fn store_add_product(store: &AppStore, catalog: &Catalog) -> Result<ProductId, AddProductError> {
    let draft = store.draft().get_untracked();
    validate_draft(catalog, &draft)?;
    let id = store.list().write().add(catalog, &draft)?;
    store.draft().write().clear();
    Ok(id)
}

/// Flip a product's bought flag
pub fn store_toggle_bought(store: &AppStore, id: ProductId) {
    if !store.list().write().toggle_bought(id) {
        log::debug!("toggle ignored, no product {}", id);
    }
}

/// Remove a product by id
pub fn store_delete_product(store: &AppStore, product: &Product) {
    if !store.list().write().delete(product) {
        log::debug!("delete ignored, no product {}", product.id);
    }
}

/// Clear products, form and filters, and re-arm the completion effect
pub fn store_reset_session(store: &AppStore) {
    store.list().write().reset();
    store.draft().write().clear();
    *store.filter().write() = ProductFilter::default();
}

/// Rows for the product table: filtered when any filter is set, else everything
pub fn store_table_rows(store: &AppStore) -> Vec<Product> {
    store.filter().with(|filter| {
        store.list().with(|list| {
            if filter.is_active() {
                filter_products(list.products(), filter)
            } else {
                list.products().to_vec()
            }
        })
    })
}

/// Every product in list order, ignoring filters
pub fn store_all_products(store: &AppStore) -> Vec<Product> {
    store.list().with(|list| list.products().to_vec())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::filter::StatusFilter;
    use crate::list::CompletionState;
    use crate::models::{CategoryId, ShopId};

    fn new_store() -> (Owner, AppStore) {
        let owner = Owner::new();
        owner.set();
        (owner, Store::new(AppState::default()))
    }

    fn fill_draft(store: &AppStore, name: &str, shop: u32, category: u32) {
        *store.draft().write() = ProductDraft {
            name: name.to_string(),
            shop: Some(ShopId(shop)),
            category: Some(CategoryId(category)),
        };
    }

    #[test]
    fn test_add_clears_draft() {
        let (_owner, store) = new_store();
        let catalog = Catalog::default();
        fill_draft(&store, "Milk", 1, 2);

        let id = store_add_product(&store, &catalog).unwrap();

        assert_eq!(store.draft().get_untracked(), ProductDraft::default());
        store.list().with_untracked(|list| {
            assert_eq!(list.len(), 1);
            assert_eq!(list.get(id).unwrap().name, "Milk");
        });
    }

    #[test]
    fn test_failed_add_keeps_draft() {
        let (_owner, store) = new_store();
        let catalog = Catalog::default();
        fill_draft(&store, "  ", 1, 2);
        let before = store.draft().get_untracked();

        assert_eq!(store_add_product(&store, &catalog), Err(AddProductError::EmptyName));

        assert_eq!(store.draft().get_untracked(), before);
        assert_eq!(store.list().with_untracked(|list| list.len()), 0);
    }

    #[test]
    fn test_failed_add_does_not_notify_list() {
        let (_owner, store) = new_store();
        let catalog = Catalog::default();
        *store.draft().write() = ProductDraft { name: "Milk".to_string(), ..Default::default() };
        let runs = Arc::new(AtomicUsize::new(0));
        let counted = Memo::new({
            let runs = Arc::clone(&runs);
            move |_| {
                store.list().track();
                runs.fetch_add(1, Ordering::SeqCst) + 1
            }
        });
        assert_eq!(counted.get_untracked(), 1);

        // no shop selected
        assert!(store_add_product(&store, &catalog).is_err());
        assert_eq!(counted.get_untracked(), 1);

        fill_draft(&store, "Milk", 1, 2);
        assert!(store_add_product(&store, &catalog).is_ok());
        assert_eq!(counted.get_untracked(), 2);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_toggle_and_delete() {
        let (_owner, store) = new_store();
        let catalog = Catalog::default();
        fill_draft(&store, "Milk", 1, 2);
        let milk = store_add_product(&store, &catalog).unwrap();
        fill_draft(&store, "Bread", 1, 2);
        let bread = store_add_product(&store, &catalog).unwrap();

        store_toggle_bought(&store, milk);
        store_toggle_bought(&store, ProductId(999));
        store.list().with_untracked(|list| {
            assert!(list.get(milk).unwrap().is_bought);
            assert!(!list.get(bread).unwrap().is_bought);
        });

        let milk_product = store.list().with_untracked(|list| list.get(milk).cloned()).unwrap();
        store_delete_product(&store, &milk_product);
        store_delete_product(&store, &milk_product);
        let remaining: Vec<_> = store_all_products(&store).into_iter().map(|p| p.id).collect();
        assert_eq!(remaining, vec![bread]);
    }

    #[test]
    fn test_table_rows_follow_filter() {
        let (_owner, store) = new_store();
        let catalog = Catalog::default();
        fill_draft(&store, "Milk", 1, 2);
        let milk = store_add_product(&store, &catalog).unwrap();
        fill_draft(&store, "Cola", 3, 3);
        store_add_product(&store, &catalog).unwrap();
        store_toggle_bought(&store, milk);

        assert_eq!(store_table_rows(&store).len(), 2);

        store.filter().write().status = StatusFilter::Bought;
        let rows: Vec<_> = store_table_rows(&store).into_iter().map(|p| p.id).collect();
        assert_eq!(rows, vec![milk]);
        // the checklist ignores filters
        assert_eq!(store_all_products(&store).len(), 2);
    }

    #[test]
    fn test_reset_session_clears_everything() {
        let (_owner, store) = new_store();
        let catalog = Catalog::default();
        fill_draft(&store, "Milk", 1, 2);
        let milk = store_add_product(&store, &catalog).unwrap();
        store_toggle_bought(&store, milk);
        assert!(store.list().write().poll_completion());

        fill_draft(&store, "half typed", 2, 3);
        *store.filter().write() = ProductFilter {
            shop: Some(ShopId(1)),
            status: StatusFilter::NotBought,
            name: "mil".to_string(),
            ..Default::default()
        };

        store_reset_session(&store);

        assert_eq!(store.draft().get_untracked(), ProductDraft::default());
        assert_eq!(store.filter().get_untracked(), ProductFilter::default());
        store.list().with_untracked(|list| {
            assert_eq!(list.len(), 0);
            assert_eq!(list.completion(), CompletionState::Pending);
        });
    }
}
