//! Product Filtering
//!
//! Pure predicate over (products, filter), recomputed on every read.

use crate::models::{CategoryId, Product, ShopId};

/// Bought-status criterion of the filter panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Bought,
    NotBought,
}

impl StatusFilter {
    /// Radio options in display order
    pub const OPTIONS: [(StatusFilter, &'static str); 3] = [
        (StatusFilter::All, "All"),
        (StatusFilter::Bought, "Purchased"),
        (StatusFilter::NotBought, "Not Purchased"),
    ];

    pub fn value(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Bought => "bought",
            StatusFilter::NotBought => "notBought",
        }
    }

    pub fn matches(self, is_bought: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Bought => is_bought,
            StatusFilter::NotBought => !is_bought,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub shop: Option<ShopId>,
    pub category: Option<CategoryId>,
    pub status: StatusFilter,
    /// Case-insensitive substring of the product name
    pub name: String,
}

impl ProductFilter {
    pub fn is_active(&self) -> bool {
        self.shop.is_some()
            || self.category.is_some()
            || self.status != StatusFilter::All
            || !self.name.is_empty()
    }

    pub fn matches(&self, product: &Product) -> bool {
        let matches_shop = self.shop.map_or(true, |shop| product.shop == shop);
        let matches_category = self.category.map_or(true, |category| product.category == category);
        let matches_name = product.name.to_lowercase().contains(&self.name.to_lowercase());

        matches_shop && matches_category && self.status.matches(product.is_bought) && matches_name
    }
}

/// Products passing every criterion, in list order
pub fn filter_products(products: &[Product], filter: &ProductFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|product| filter.matches(product))
        .cloned()
        .collect()
}
