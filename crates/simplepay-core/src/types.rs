//! # Domain Types
//!
//! Core domain types used throughout SimplePay.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Sale       │   │    SaleItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  product_id     │       │
//! │  │  name           │   │  items          │   │  name_snapshot  │       │
//! │  │  price_cents    │   │  total_cents    │   │  unit_price     │       │
//! │  │  stock          │   │  payment        │   │  quantity       │       │
//! │  │  length × width │   │  status         │   │  line_total     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    CartItem     │   │  PaymentStatus  │   │    ShopInfo     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  product_id     │   │  Lunas (paid)   │   │  name, address  │       │
//! │  │  quantity ≥ 1   │   │  Dp (partial)   │   │  phone, email   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A [`SaleItem`] freezes the product name and unit price at checkout time.
//! Editing a product later never changes what a historical receipt shows,
//! and an edited sale re-totals from its own frozen prices, not the live
//! catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// The shop sells sheet goods, so the price is normally derived as
/// `price_per_unit × length × width`. The derived value is a convenience:
/// `price_cents` is stored independently and the operator may override it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown to the cashier and on receipts.
    pub name: String,

    /// Selling price in cents. Stored, not enforced to match the derivation.
    pub price_cents: i64,

    /// Price per unit area in cents.
    pub price_per_unit_cents: i64,

    /// Sheet length. A measure, not money; finite and non-negative.
    pub length: f64,

    /// Sheet width. A measure, not money; finite and non-negative.
    pub width: f64,

    /// Current stock level. Invariant: never negative.
    pub stock: i64,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last edited or had its stock adjusted.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the selling price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Computes `price_per_unit × length × width`, rounded to the
    /// nearest cent.
    ///
    /// ## Example
    /// ```rust
    /// # use simplepay_core::types::Product;
    /// # use chrono::Utc;
    /// # let p = Product {
    /// #     id: "p".into(), name: "Kaca".into(), price_cents: 0,
    /// #     price_per_unit_cents: 2500, length: 2.0, width: 1.5, stock: 0,
    /// #     created_at: Utc::now(), updated_at: Utc::now(),
    /// # };
    /// assert_eq!(p.derived_price().cents(), 7500);
    /// ```
    pub fn derived_price(&self) -> Money {
        let cents = (self.price_per_unit_cents as f64 * self.length * self.width).round();
        Money::from_cents(cents as i64)
    }

    /// Checks whether at least `quantity` units are in stock.
    #[inline]
    pub fn has_stock(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }
}

/// Payload for creating a product; the catalog assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub price_cents: i64,
    pub price_per_unit_cents: i64,
    pub length: f64,
    pub width: f64,
    pub stock: i64,
}

// =============================================================================
// Cart Item
// =============================================================================

/// An entry in the in-progress cart: a product reference and a quantity.
///
/// One entry exists per distinct product; repeated adds increment the
/// quantity. Cart items are transient and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,

    /// Invariant: >= 1. An entry reduced to 0 is removed entirely.
    pub quantity: i64,
}

// =============================================================================
// Payment Status
// =============================================================================

/// Settlement status of a sale.
///
/// Serialized as the literal strings `"Lunas"` / `"Dp"`, matching the
/// journal data written by earlier releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Paid in full: `amount_paid >= total`.
    Lunas,
    /// Down payment: `amount_paid < total`, balance outstanding.
    Dp,
}

impl PaymentStatus {
    /// Classifies a payment against a total.
    ///
    /// `Lunas` iff `amount_paid >= total`, else `Dp`.
    #[inline]
    pub fn classify(amount_paid: Money, total: Money) -> Self {
        if amount_paid >= total {
            PaymentStatus::Lunas
        } else {
            PaymentStatus::Dp
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Lunas => write!(f, "Lunas"),
            PaymentStatus::Dp => write!(f, "Dp"),
        }
    }
}

// =============================================================================
// Payment
// =============================================================================

/// The payment recorded on a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Amount tendered by the customer, in cents.
    pub amount_paid_cents: i64,

    /// Change returned: `max(0, amount_paid - total)`, in cents.
    pub change_cents: i64,
}

impl Payment {
    /// Returns the tendered amount as Money.
    #[inline]
    pub fn amount_paid(&self) -> Money {
        Money::from_cents(self.amount_paid_cents)
    }

    /// Returns the change as Money.
    #[inline]
    pub fn change(&self) -> Money {
        Money::from_cents(self.change_cents)
    }
}

// =============================================================================
// Sale Item
// =============================================================================

/// A line item in a sale.
///
/// Uses the snapshot pattern: product name and unit price are frozen at
/// checkout so later catalog edits cannot rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    /// Reference back to the catalog product.
    pub product_id: String,

    /// Product name at time of sale (frozen).
    pub name_snapshot: String,

    /// Unit price in cents at time of sale (frozen).
    pub unit_price_cents: i64,

    /// Quantity sold.
    pub quantity: i64,

    /// Line total (unit_price × quantity).
    pub line_total_cents: i64,
}

impl SaleItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents)
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A completed transaction recorded in the sales ledger.
///
/// Identity (`id`, `created_at`) is immutable; items, total, payment,
/// status, and customer name are mutable through a ledger edit. A sale
/// is never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub items: Vec<SaleItem>,
    pub total_cents: i64,
    pub created_at: DateTime<Utc>,
    pub payment: Payment,
    pub status: PaymentStatus,
    /// May be empty (walk-in customer).
    pub customer_name: String,
}

impl Sale {
    /// Returns the recorded total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Re-derives every computed field from the items and tendered amount.
    ///
    /// Used by the edit-sale flow after quantities or the payment change:
    /// line totals come from the frozen unit prices, then
    /// `total = Σ line_total`, `change = max(0, paid − total)`, and the
    /// status is reclassified. Fails with `InvalidQuantity` if any edited
    /// quantity is below 1; the sale is left untouched on failure.
    pub fn recompute(&mut self) -> CoreResult<()> {
        for item in &self.items {
            if item.quantity < 1 {
                return Err(CoreError::InvalidQuantity {
                    product_id: item.product_id.clone(),
                    quantity: item.quantity,
                });
            }
        }

        for item in &mut self.items {
            item.line_total_cents = item.unit_price_cents * item.quantity;
        }

        let total: Money = self.items.iter().map(SaleItem::line_total).sum();
        let paid = self.payment.amount_paid();

        self.total_cents = total.cents();
        self.payment.change_cents = (paid - total).max(Money::zero()).cents();
        self.status = PaymentStatus::classify(paid, total);
        Ok(())
    }
}

// =============================================================================
// Shop Info
// =============================================================================

/// The shop profile printed in receipt headers. Singleton, no history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl Default for ShopInfo {
    /// The profile used until the operator edits the shop settings.
    fn default() -> Self {
        ShopInfo {
            name: "SimplePay".to_string(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
