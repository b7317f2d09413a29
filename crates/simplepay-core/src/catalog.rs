//! # Catalog Store
//!
//! The authoritative list of products and their stock counts.
//!
//! ## Stock Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Stock Update Strategy                                │
//! │                                                                         │
//! │  Every stock change goes through adjust_stock(id, delta):              │
//! │                                                                         │
//! │    add to cart        → adjust_stock(id, -1)                           │
//! │    raise cart qty     → adjust_stock(id, -(new - old))                 │
//! │    remove from cart   → adjust_stock(id, +qty)                         │
//! │    manual restock     → adjust_stock(id, +delta)                       │
//! │                                                                         │
//! │  A delta that would take the level below zero is rejected with         │
//! │  InsufficientStock and nothing changes. `Product.stock >= 0` is        │
//! │  therefore observable at every point outside a single operation.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are never deleted; historical sales keep referencing their ids.

use chrono::Utc;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::types::{NewProduct, Product};
use crate::validation::validate_product_fields;

/// The product and stock store.
///
/// Owned by [`crate::Register`]; presentation layers read through it but
/// mutate only via the register's operations.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            products: Vec::new(),
        }
    }

    /// Restores a catalog from a persisted snapshot.
    pub fn from_products(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// Adds a product, assigning a fresh unique id and timestamps.
    ///
    /// ## Errors
    /// `Validation` if the name is empty/oversized or any numeric field
    /// is negative (or a dimension is non-finite).
    pub fn add_product(&mut self, data: NewProduct) -> CoreResult<&Product> {
        validate_product_fields(&data)?;

        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: data.name,
            price_cents: data.price_cents,
            price_per_unit_cents: data.price_per_unit_cents,
            length: data.length,
            width: data.width,
            stock: data.stock,
            created_at: now,
            updated_at: now,
        };

        self.products.push(product);
        Ok(self.products.last().expect("just pushed"))
    }

    /// Replaces the entry matching `product.id` in place.
    ///
    /// The original implementation silently no-opped when the id was
    /// unknown; here that is a `ProductNotFound` the caller may still
    /// choose to ignore. `created_at` is preserved from the existing
    /// entry and `updated_at` is refreshed.
    pub fn edit_product(&mut self, product: Product) -> CoreResult<()> {
        validate_product_fields(&NewProduct {
            name: product.name.clone(),
            price_cents: product.price_cents,
            price_per_unit_cents: product.price_per_unit_cents,
            length: product.length,
            width: product.width,
            stock: product.stock,
        })?;

        let existing = self
            .products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| CoreError::ProductNotFound(product.id.clone()))?;

        let created_at = existing.created_at;
        *existing = Product {
            created_at,
            updated_at: Utc::now(),
            ..product
        };
        Ok(())
    }

    /// Applies a stock delta and returns the new level.
    ///
    /// ## Errors
    /// - `ProductNotFound` if the id is unknown
    /// - `InsufficientStock` if the result would be negative; the level
    ///   is left unchanged
    pub fn adjust_stock(&mut self, product_id: &str, delta: i64) -> CoreResult<i64> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

        let new_stock = product.stock + delta;
        if new_stock < 0 {
            return Err(CoreError::InsufficientStock {
                product_id: product_id.to_string(),
                available: product.stock,
                requested: -delta,
            });
        }

        product.stock = new_stock;
        product.updated_at = Utc::now();
        Ok(new_stock)
    }

    /// Gets a product by id.
    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn glass_sheet(stock: i64) -> NewProduct {
        NewProduct {
            name: "Kaca Bening 5mm".to_string(),
            price_cents: 7500,
            price_per_unit_cents: 2500,
            length: 2.0,
            width: 1.5,
            stock,
        }
    }

    #[test]
    fn test_add_product_assigns_id_and_timestamps() {
        let mut catalog = Catalog::new();
        let product = catalog.add_product(glass_sheet(5)).unwrap().clone();

        assert!(!product.id.is_empty());
        assert_eq!(product.name, "Kaca Bening 5mm");
        assert_eq!(product.stock, 5);
        assert_eq!(catalog.len(), 1);

        // Ids are unique across adds.
        let second = catalog.add_product(glass_sheet(2)).unwrap();
        assert_ne!(second.id, product.id);
    }

    #[test]
    fn test_add_product_rejects_invalid_fields() {
        let mut catalog = Catalog::new();

        let mut bad = glass_sheet(5);
        bad.name = "  ".to_string();
        assert!(catalog.add_product(bad).is_err());

        let mut bad = glass_sheet(5);
        bad.price_cents = -1;
        assert!(catalog.add_product(bad).is_err());

        assert!(catalog.is_empty());
    }

    #[test]
    fn test_edit_product_replaces_matching_entry() {
        let mut catalog = Catalog::new();
        let mut product = catalog.add_product(glass_sheet(5)).unwrap().clone();

        product.name = "Kaca Riben 5mm".to_string();
        product.price_cents = 8000;
        catalog.edit_product(product.clone()).unwrap();

        let stored = catalog.get(&product.id).unwrap();
        assert_eq!(stored.name, "Kaca Riben 5mm");
        assert_eq!(stored.price_cents, 8000);
        assert_eq!(stored.created_at, product.created_at);
    }

    #[test]
    fn test_edit_product_unknown_id() {
        let mut catalog = Catalog::new();
        let product = catalog.add_product(glass_sheet(5)).unwrap().clone();

        let mut ghost = product;
        ghost.id = "no-such-id".to_string();
        let err = catalog.edit_product(ghost).unwrap_err();
        assert_eq!(err, CoreError::ProductNotFound("no-such-id".to_string()));
    }

    #[test]
    fn test_adjust_stock() {
        let mut catalog = Catalog::new();
        let id = catalog.add_product(glass_sheet(5)).unwrap().id.clone();

        assert_eq!(catalog.adjust_stock(&id, -2).unwrap(), 3);
        assert_eq!(catalog.adjust_stock(&id, 4).unwrap(), 7);
        assert_eq!(catalog.get(&id).unwrap().stock, 7);
    }

    #[test]
    fn test_adjust_stock_never_goes_negative() {
        let mut catalog = Catalog::new();
        let id = catalog.add_product(glass_sheet(2)).unwrap().id.clone();

        let err = catalog.adjust_stock(&id, -3).unwrap_err();
        assert_eq!(
            err,
            CoreError::InsufficientStock {
                product_id: id.clone(),
                available: 2,
                requested: 3,
            }
        );
        // Level unchanged after the rejected delta.
        assert_eq!(catalog.get(&id).unwrap().stock, 2);
    }

    #[test]
    fn test_adjust_stock_unknown_product() {
        let mut catalog = Catalog::new();
        assert_eq!(
            catalog.adjust_stock("ghost", 1).unwrap_err(),
            CoreError::ProductNotFound("ghost".to_string())
        );
    }
}
