//! Error Types

use thiserror::Error;

use crate::models::{CategoryId, ShopId};

/// Why a draft could not be turned into a product
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddProductError {
    #[error("product name is empty")]
    EmptyName,
    #[error("no shop selected")]
    NoShop,
    #[error("no category selected")]
    NoCategory,
    #[error("shop {0} is not in the catalog")]
    UnknownShop(ShopId),
    #[error("category {0} is not in the catalog")]
    UnknownCategory(CategoryId),
}

/// Failure to parse or validate the embedded configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate shop id {0}")]
    DuplicateShop(ShopId),
    #[error("duplicate category id {0}")]
    DuplicateCategory(CategoryId),
}

/// Failure to run the completion effect
#[derive(Debug, Error)]
pub enum EffectError {
    #[error("no browser window")]
    NoWindow,
    #[error("confetti is not loaded on this page")]
    ConfettiMissing,
    #[error("could not encode confetti options: {0}")]
    Encode(String),
    #[error("javascript error: {0}")]
    Js(String),
}
