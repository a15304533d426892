//! Shopping List
//!
//! In-memory product collection with the one-shot completion state.
//! Holds no DOM or reactive handles so it can be exercised natively.

use crate::catalog::Catalog;
use crate::error::AddProductError;
use crate::models::{CategoryId, Product, ProductDraft, ProductId, ShopId};

/// Check a draft against the presence rules and the catalog.
///
/// The name is kept as typed; only its trimmed form must be non-empty.
/// Shop and category must both be selected and present in the catalog.
pub fn validate_draft(catalog: &Catalog, draft: &ProductDraft) -> Result<(ShopId, CategoryId), AddProductError> {
    if draft.name.trim().is_empty() {
        return Err(AddProductError::EmptyName);
    }
    let shop = draft.shop.ok_or(AddProductError::NoShop)?;
    let category = draft.category.ok_or(AddProductError::NoCategory)?;
    if catalog.shop(shop).is_none() {
        return Err(AddProductError::UnknownShop(shop));
    }
    if catalog.category(category).is_none() {
        return Err(AddProductError::UnknownCategory(category));
    }
    Ok((shop, category))
}

/// Whether the completion effect has already fired this session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompletionState {
    #[default]
    Pending,
    Shown,
}

#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    products: Vec<Product>,
    next_id: u32,
    completion: CompletionState,
}

impl ShoppingList {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn bought_count(&self) -> usize {
        self.products.iter().filter(|p| p.is_bought).count()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Append a product built from the draft, see [`validate_draft`].
    pub fn add(&mut self, catalog: &Catalog, draft: &ProductDraft) -> Result<ProductId, AddProductError> {
        let (shop, category) = validate_draft(catalog, draft)?;

        self.next_id += 1;
        let id = ProductId(self.next_id);
        self.products.push(Product {
            id,
            name: draft.name.clone(),
            shop,
            category,
            is_bought: false,
        });
        log::debug!("added product {} ({} total)", id, self.products.len());
        Ok(id)
    }

    /// Flip the bought flag. Returns false if no product has this id.
    pub fn toggle_bought(&mut self, id: ProductId) -> bool {
        match self.products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.is_bought = !product.is_bought;
                true
            }
            None => false,
        }
    }

    /// Remove the entry with the same id as `product`. Returns false if absent.
    pub fn delete(&mut self, product: &Product) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != product.id);
        self.products.len() != before
    }

    pub fn is_all_bought(&self) -> bool {
        !self.products.is_empty() && self.products.iter().all(|p| p.is_bought)
    }

    #[cfg(test)]
    pub fn completion(&self) -> CompletionState {
        self.completion
    }

    /// Returns true exactly once per session: the first time every product
    /// of a non-empty list is bought.
    pub fn poll_completion(&mut self) -> bool {
        if self.completion == CompletionState::Pending && self.is_all_bought() {
            self.completion = CompletionState::Shown;
            return true;
        }
        false
    }

    /// Drop every product and re-arm the completion effect.
    /// The id counter is kept so ids are never handed out twice.
    pub fn reset(&mut self) {
        self.products.clear();
        self.completion = CompletionState::Pending;
    }
}
