//! Application Context
//!
//! Read-only configuration provided via Leptos Context API.

use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::celebrate::ConfettiOptions;
use crate::config::AppConfig;
use crate::models::{CategoryId, ShopId};

/// Catalog and effect settings, fixed at startup
#[derive(Clone, Copy)]
pub struct AppContext {
    catalog: StoredValue<Catalog>,
    confetti: StoredValue<ConfettiOptions>,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            catalog: StoredValue::new(config.catalog.clone()),
            confetti: StoredValue::new(config.confetti.clone()),
        }
    }

    pub fn with_catalog<R>(&self, f: impl FnOnce(&Catalog) -> R) -> R {
        self.catalog.with_value(f)
    }

    pub fn with_confetti<R>(&self, f: impl FnOnce(&ConfettiOptions) -> R) -> R {
        self.confetti.with_value(f)
    }

    pub fn shop_name(&self, id: ShopId) -> String {
        self.with_catalog(|catalog| catalog.shop_name(id).to_string())
    }

    pub fn category_name(&self, id: CategoryId) -> String {
        self.with_catalog(|catalog| catalog.category_name(id).to_string())
    }

    pub fn shop_options(&self) -> Vec<(u32, String)> {
        self.with_catalog(Catalog::shop_options)
    }

    pub fn category_options(&self) -> Vec<(u32, String)> {
        self.with_catalog(Catalog::category_options)
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
