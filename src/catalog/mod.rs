use std::collections::HashSet;

use tracing::{info, warn};

use crate::models::Product;
use crate::seed;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate product id {0}")]
    DuplicateId(i64),

    #[error("invalid date literal {value:?}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Read-only, ordered product collection. Built once before the listener
/// starts and shared between requests behind an `Arc`; there is no mutation
/// API, so concurrent readers need no locking.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Wrap `products`, keeping their order. Ids must be unique.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// The fixed catalog the service ships with, image URLs rooted at
    /// `image_base_url`.
    pub fn seeded(image_base_url: &str) -> Result<Self, CatalogError> {
        let catalog = Self::new(seed::products(image_base_url)?)?;
        if catalog.is_empty() {
            warn!("Catalog is empty; product endpoints will return nothing");
        }
        info!(
            products = catalog.len(),
            perishable = catalog.perishable_count(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Linear scan by id; first match wins.
    pub fn find(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn perishable_count(&self) -> usize {
        self.products.iter().filter(|p| p.is_perishable()).count()
    }
}
