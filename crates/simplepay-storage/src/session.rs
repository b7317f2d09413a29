//! # Session
//!
//! Glue between the pure [`Register`] and the [`SnapshotStore`]: the
//! three slots are read once when the session opens, and every mutating
//! operation writes back the aggregates it touched.
//!
//! ## Persistence per Operation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation                          Slots written afterwards           │
//! │  ─────────                          ──────────────────────────         │
//! │  add_product / edit_product         products                           │
//! │  adjust_stock                       products                           │
//! │  add_to_cart / update_quantity      products   (stock moved;           │
//! │  remove_from_cart / void_cart                   cart is transient)     │
//! │  checkout                           sales      (stock already          │
//! │                                                 consumed at add-time)  │
//! │  update_sale                        sales                              │
//! │  set_shop_info                      shop_info                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Writes are per-aggregate with no cross-slot transaction; a crash
//! between two writes can leave the slots out of step, which is
//! acceptable for a single-user local tool that is recoverable by
//! re-entry.

use tracing::{debug, info};

use simplepay_core::{
    Cart, MissingProductPolicy, NewProduct, Product, Receipt, Register, Sale, ShopInfo,
};

use crate::error::{SessionError, StorageResult};
use crate::slot::{SnapshotStore, PRODUCTS_SLOT, SALES_SLOT, SHOP_INFO_SLOT};

/// A running point-of-sale session backed by a data directory.
#[derive(Debug)]
pub struct Session {
    register: Register,
    store: SnapshotStore,
}

impl Session {
    /// Opens a session over a data directory, loading the persisted
    /// aggregates.
    ///
    /// Missing or malformed slots fall back to their defaults (empty
    /// catalog, empty ledger, the stock shop profile), so opening only
    /// fails when the directory itself cannot be created.
    pub fn open(data_dir: impl Into<std::path::PathBuf>) -> StorageResult<Self> {
        let store = SnapshotStore::open(data_dir)?;

        let products: Vec<Product> = store.read_slot(PRODUCTS_SLOT);
        let sales: Vec<Sale> = store.read_slot(SALES_SLOT);
        let shop_info: ShopInfo = store.read_slot(SHOP_INFO_SLOT);

        info!(
            products = products.len(),
            sales = sales.len(),
            shop = %shop_info.name,
            "session opened"
        );

        Ok(Session {
            register: Register::from_parts(products, sales, shop_info),
            store,
        })
    }

    /// Selects the checkout policy for dangling cart lines.
    pub fn set_missing_product_policy(&mut self, policy: MissingProductPolicy) {
        self.register.set_missing_product_policy(policy);
    }

    // =========================================================================
    // Catalog Operations
    // =========================================================================

    /// Adds a product and persists the catalog.
    pub fn add_product(&mut self, data: NewProduct) -> Result<Product, SessionError> {
        let product = self.register.add_product(data)?.clone();
        self.persist_products()?;
        info!(id = %product.id, name = %product.name, "product added");
        Ok(product)
    }

    /// Edits a product in place and persists the catalog.
    pub fn edit_product(&mut self, product: Product) -> Result<(), SessionError> {
        let id = product.id.clone();
        self.register.edit_product(product)?;
        self.persist_products()?;
        info!(id = %id, "product edited");
        Ok(())
    }

    /// Adjusts a stock level and persists the catalog. Returns the new
    /// level.
    pub fn adjust_stock(&mut self, product_id: &str, delta: i64) -> Result<i64, SessionError> {
        let stock = self.register.adjust_stock(product_id, delta)?;
        self.persist_products()?;
        debug!(product_id, delta, stock, "stock adjusted");
        Ok(stock)
    }

    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Adds one unit to the cart; the reserved stock is persisted.
    pub fn add_to_cart(&mut self, product_id: &str) -> Result<(), SessionError> {
        self.register.add_to_cart(product_id)?;
        self.persist_products()?;
        debug!(product_id, "added to cart");
        Ok(())
    }

    /// Sets a cart quantity, reconciling and persisting stock.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> Result<(), SessionError> {
        self.register.update_quantity(product_id, quantity)?;
        self.persist_products()?;
        debug!(product_id, quantity, "cart quantity updated");
        Ok(())
    }

    /// Removes a cart entry, restoring and persisting stock.
    pub fn remove_from_cart(&mut self, product_id: &str) -> Result<(), SessionError> {
        self.register.remove_from_cart(product_id)?;
        self.persist_products()?;
        debug!(product_id, "removed from cart");
        Ok(())
    }

    /// Cancels the transaction in progress, restoring and persisting
    /// stock.
    pub fn void_cart(&mut self) -> Result<(), SessionError> {
        self.register.void_cart()?;
        self.persist_products()?;
        debug!("cart voided");
        Ok(())
    }

    // =========================================================================
    // Checkout & Ledger
    // =========================================================================

    /// Checks out the cart and persists the new sale.
    ///
    /// The products slot is not rewritten here: stock was consumed (and
    /// persisted) as items entered the cart.
    pub fn checkout(
        &mut self,
        amount_paid_cents: i64,
        customer_name: &str,
    ) -> Result<Sale, SessionError> {
        let sale = self.register.checkout(amount_paid_cents, customer_name)?;
        self.persist_sales()?;
        info!(
            sale_id = %sale.id,
            total = sale.total_cents,
            status = %sale.status,
            "sale recorded"
        );
        Ok(sale)
    }

    /// Applies a sale edit and persists the ledger.
    pub fn update_sale(&mut self, sale: Sale) -> Result<Sale, SessionError> {
        let sale = self.register.update_sale(sale)?;
        self.persist_sales()?;
        info!(sale_id = %sale.id, total = sale.total_cents, "sale updated");
        Ok(sale)
    }

    /// Builds the receipt projection for a recorded sale.
    pub fn receipt(&self, sale_id: &str) -> Result<Receipt, SessionError> {
        Ok(self.register.receipt(sale_id)?)
    }

    // =========================================================================
    // Shop Profile
    // =========================================================================

    /// Replaces and persists the shop profile.
    pub fn set_shop_info(&mut self, shop_info: ShopInfo) -> Result<(), SessionError> {
        self.register.set_shop_info(shop_info);
        self.store
            .write_slot(SHOP_INFO_SLOT, self.register.shop_info())?;
        info!(shop = %self.register.shop_info().name, "shop profile updated");
        Ok(())
    }

    // =========================================================================
    // Read Access
    // =========================================================================

    /// All catalog products.
    pub fn products(&self) -> &[Product] {
        self.register.products()
    }

    /// All recorded sales.
    pub fn sales(&self) -> &[Sale] {
        self.register.sales()
    }

    /// The cart for the transaction in progress.
    pub fn cart(&self) -> &Cart {
        self.register.cart()
    }

    /// The current shop profile.
    pub fn shop_info(&self) -> &ShopInfo {
        self.register.shop_info()
    }

    /// The underlying register, for read-only inspection.
    pub fn register(&self) -> &Register {
        &self.register
    }

    // =========================================================================
    // Persistence Helpers
    // =========================================================================

    fn persist_products(&self) -> StorageResult<()> {
        self.store
            .write_slot(PRODUCTS_SLOT, self.register.products())
    }

    fn persist_sales(&self) -> StorageResult<()> {
        self.store.write_slot(SALES_SLOT, self.register.sales())
    }
}
