//! Shop & Category Catalog
//!
//! Fixed reference lists that products point into by id.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::models::{Category, CategoryId, Shop, ShopId};

const DEFAULT_SHOPS: &[(u32, &str)] = &[
    (1, "migros"),
    (2, "A 101"),
    (3, "Bim"),
    (4, "File"),
    (5, "CarrefourSa"),
    (6, "Şok"),
];

const DEFAULT_CATEGORIES: &[(u32, &str)] = &[
    (1, "Fruits and Vegetables"),
    (2, "Bakery Products"),
    (3, "Beverages"),
    (4, "Butcher"),
    (5, "Canned Spices"),
    (6, "Cleaning Products"),
    (7, "Electronics"),
    (8, "Camping Supplies"),
    (9, "Chocolate and Sweets"),
];

/// Shown in place of a name when a product points at a missing entry
pub const UNKNOWN_NAME: &str = "?";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Catalog {
    pub shops: Vec<Shop>,
    pub categories: Vec<Category>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            shops: DEFAULT_SHOPS
                .iter()
                .map(|(id, name)| Shop { id: ShopId(*id), name: name.to_string() })
                .collect(),
            categories: DEFAULT_CATEGORIES
                .iter()
                .map(|(id, name)| Category { id: CategoryId(*id), name: name.to_string() })
                .collect(),
        }
    }
}

impl Catalog {
    pub fn shop(&self, id: ShopId) -> Option<&Shop> {
        self.shops.iter().find(|shop| shop.id == id)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn shop_name(&self, id: ShopId) -> &str {
        self.shop(id).map(|shop| shop.name.as_str()).unwrap_or(UNKNOWN_NAME)
    }

    pub fn category_name(&self, id: CategoryId) -> &str {
        self.category(id)
            .map(|category| category.name.as_str())
            .unwrap_or(UNKNOWN_NAME)
    }

    /// (id, label) pairs for shop dropdowns
    pub fn shop_options(&self) -> Vec<(u32, String)> {
        self.shops.iter().map(|shop| (shop.id.0, shop.name.clone())).collect()
    }

    /// (id, label) pairs for category dropdowns
    pub fn category_options(&self) -> Vec<(u32, String)> {
        self.categories
            .iter()
            .map(|category| (category.id.0, category.name.clone()))
            .collect()
    }

    /// Ids must be unique within each list
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for shop in &self.shops {
            if !seen.insert(shop.id.0) {
                return Err(ConfigError::DuplicateShop(shop.id));
            }
        }
        seen.clear();
        for category in &self.categories {
            if !seen.insert(category.id.0) {
                return Err(ConfigError::DuplicateCategory(category.id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_lookup() {
        let catalog = Catalog::default();
        assert_eq!(catalog.shops.len(), 6);
        assert_eq!(catalog.categories.len(), 9);
        assert_eq!(catalog.shop_name(ShopId(1)), "migros");
        assert_eq!(catalog.shop_name(ShopId(6)), "Şok");
        assert_eq!(catalog.category_name(CategoryId(2)), "Bakery Products");
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_missing_entries_render_placeholder() {
        let catalog = Catalog::default();
        assert!(catalog.shop(ShopId(42)).is_none());
        assert_eq!(catalog.shop_name(ShopId(42)), UNKNOWN_NAME);
        assert_eq!(catalog.category_name(CategoryId(0)), UNKNOWN_NAME);
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut catalog = Catalog::default();
        catalog.shops.push(Shop { id: ShopId(3), name: "Bim again".to_string() });
        assert!(matches!(catalog.validate(), Err(ConfigError::DuplicateShop(ShopId(3)))));

        let mut catalog = Catalog::default();
        catalog.categories.push(Category { id: CategoryId(9), name: "Sweets".to_string() });
        assert!(matches!(
            catalog.validate(),
            Err(ConfigError::DuplicateCategory(CategoryId(9)))
        ));
    }

    #[test]
    fn test_options_follow_catalog_order() {
        let options = Catalog::default().category_options();
        assert_eq!(options[0], (1, "Fruits and Vegetables".to_string()));
        assert_eq!(options[8], (9, "Chocolate and Sweets".to_string()));
    }
}
