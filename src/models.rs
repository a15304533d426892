//! Frontend Models
//!
//! Products and the catalog entries they reference.

use std::fmt;

use serde::Deserialize;

/// Identifier of a product, handed out by the list and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub u32);

/// Foreign key into the shop catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ShopId(pub u32);

/// Foreign key into the category catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single shopping-list entry
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub shop: ShopId,
    pub category: CategoryId,
    pub is_bought: bool,
}

/// Shop catalog entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Shop {
    pub id: ShopId,
    pub name: String,
}

/// Category catalog entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Contents of the add-product form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub shop: Option<ShopId>,
    pub category: Option<CategoryId>,
}

impl ProductDraft {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
