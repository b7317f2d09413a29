//! # simplepay-storage: Snapshot Persistence for SimplePay
//!
//! This crate persists the SimplePay aggregates as client-local JSON
//! snapshots and wires a [`simplepay_core::Register`] to them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       SimplePay Data Flow                               │
//! │                                                                         │
//! │  UI action (add to cart, checkout, edit sale)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                simplepay-storage (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐            ┌───────────────────────────┐   │   │
//! │  │   │    Session    │───────────►│       SnapshotStore       │   │   │
//! │  │   │ (session.rs)  │            │        (slot.rs)          │   │   │
//! │  │   │               │            │                           │   │   │
//! │  │   │ Register +    │  write on  │ products.json             │   │   │
//! │  │   │ persistence   │  mutation  │ sales.json                │   │   │
//! │  │   │ per aggregate │            │ shop_info.json            │   │   │
//! │  │   └───────────────┘            └───────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Data directory (one JSON file per slot, atomically replaced)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`slot`] - Named-slot snapshot files with atomic replacement
//! - [`session`] - Register + store glue: load once, write per mutation
//! - [`error`] - Storage and session error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use simplepay_storage::Session;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = Session::open("./data")?;
//!
//! let id = session
//!     .add_product(simplepay_core::NewProduct {
//!         name: "Kaca Bening 5mm".to_string(),
//!         price_cents: 7500,
//!         price_per_unit_cents: 2500,
//!         length: 2.0,
//!         width: 1.5,
//!         stock: 12,
//!     })?
//!     .id;
//!
//! session.add_to_cart(&id)?;
//! let sale = session.checkout(10_000, "Budi")?;
//! println!("change: {}", sale.payment.change());
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod session;
pub mod slot;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{SessionError, StorageError};
pub use session::Session;
pub use slot::{SnapshotStore, PRODUCTS_SLOT, SALES_SLOT, SHOP_INFO_SLOT};
