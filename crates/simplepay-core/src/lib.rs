//! # simplepay-core: Pure Business Logic for SimplePay
//!
//! This crate is the **heart** of SimplePay, a single-location retail
//! point-of-sale tool. It contains the checkout and inventory consistency
//! engine as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       SimplePay Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation (external collaborators)              │   │
//! │  │    Product forms ─► Cart panel ─► Sales journal ─► Receipt      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ simplepay-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │  catalog  │  │   cart    │  │ checkout  │  │  ledger   │   │   │
//! │  │   │  Product  │  │ CartItem  │  │ settle()  │  │   Sale    │   │   │
//! │  │   │  stock    │  │ quantity  │  │ snapshot  │  │  edits    │   │   │
//! │  │   └─────┬─────┘  └─────┬─────┘  └─────┬─────┘  └─────┬─────┘   │   │
//! │  │         └──────────────┴───────┬──────┴──────────────┘         │   │
//! │  │                                │                               │   │
//! │  │                        ┌───────▼───────┐                       │   │
//! │  │                        │   Register    │  single mutation      │   │
//! │  │                        │ (register.rs) │  surface              │   │
//! │  │                        └───────────────┘                       │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              simplepay-storage (Persistence Layer)              │   │
//! │  │          Named JSON slot snapshots, atomic file writes          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Sale, ShopInfo, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//! - [`catalog`] - The authoritative product and stock store
//! - [`cart`] - In-progress selection for the active transaction
//! - [`checkout`] - Settlement arithmetic and line snapshotting
//! - [`ledger`] - Historical sale records and retroactive edits
//! - [`receipt`] - Read-only receipt projection over a sale
//! - [`register`] - The controller owning all state; the only mutation surface
//!
//! ## Design Principles
//!
//! 1. **Pure Logic**: No hidden state; outputs depend only on inputs
//!    (plus fresh ids and timestamps)
//! 2. **No I/O**: File system and network access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **Central Invariants**: State is mutated only through [`register::Register`],
//!    so stock reconciliation and settlement laws hold at every observable point
//!
//! ## Example Usage
//!
//! ```rust
//! use simplepay_core::{NewProduct, Register};
//!
//! let mut register = Register::new();
//! let id = register
//!     .add_product(NewProduct {
//!         name: "Kaca Bening 5mm".to_string(),
//!         price_cents: 1000,
//!         price_per_unit_cents: 500,
//!         length: 2.0,
//!         width: 1.0,
//!         stock: 5,
//!     })
//!     .unwrap()
//!     .id
//!     .clone();
//!
//! register.add_to_cart(&id).unwrap();
//! register.add_to_cart(&id).unwrap();
//!
//! let sale = register.checkout(2500, "Budi").unwrap();
//! assert_eq!(sale.total_cents, 2000);
//! assert_eq!(sale.payment.change_cents, 500);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ledger;
pub mod money;
pub mod receipt;
pub mod register;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use simplepay_core::Money` instead of
// `use simplepay_core::money::Money`

pub use cart::Cart;
pub use catalog::Catalog;
pub use checkout::{settle, MissingProductPolicy, Settlement};
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::SalesLedger;
pub use money::Money;
pub use receipt::{Receipt, ReceiptLine};
pub use register::Register;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single item in cart.
///
/// Guards against a mistyped quantity (e.g. 1000 instead of 10) in the
/// direct quantity-edit path.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum length of a product name.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length of a customer name on a sale.
pub const MAX_CUSTOMER_NAME_LEN: usize = 100;
