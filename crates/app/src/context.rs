//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use crate::domain::products::{InMemoryProductsService, ProductsService};

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(products: Arc<dyn ProductsService>) -> Self {
        Self { products }
    }

    /// Build an application context backed by process memory.
    ///
    /// With `seed` set, the catalogue starts with the house coffees.
    #[must_use]
    pub fn in_memory(seed: bool) -> Self {
        let products = if seed {
            InMemoryProductsService::seeded()
        } else {
            InMemoryProductsService::new()
        };

        Self::new(Arc::new(products))
    }
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
