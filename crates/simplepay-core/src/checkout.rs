//! # Checkout Processor
//!
//! Settlement arithmetic and cart-line snapshotting.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Checkout Flow                                     │
//! │                                                                         │
//! │  Register::checkout(amount_paid, customer_name)                        │
//! │       │                                                                 │
//! │       ├── cart empty or paid <= 0? ──► InvalidPayment                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  snapshot_items(cart, catalog, policy)   ◄── name + unit price frozen  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  settle(total, paid)                                                   │
//! │       │    total  = Σ line_total                                       │
//! │       │    change = max(0, paid − total)                               │
//! │       │    status = paid >= total ? Lunas : Dp                         │
//! │       ▼                                                                 │
//! │  Sale { fresh uuid, now, items, total, payment, status, customer }     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ledger.record(sale); cart.clear()   ◄── stock already consumed        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartItem, PaymentStatus, SaleItem};

// =============================================================================
// Missing Product Policy
// =============================================================================

/// What a checkout does with a cart line whose product id is no longer in
/// the catalog.
///
/// The original implementation resolved such lines to a zero
/// contribution without telling anyone. The strict default surfaces the
/// condition; the lenient behaviour remains available as an explicit
/// opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MissingProductPolicy {
    /// Fail the checkout with `ProductNotFound`.
    #[default]
    Reject,
    /// Drop the line from the sale (its contribution is zero).
    SkipLine,
}

// =============================================================================
// Settlement
// =============================================================================

/// The derived payment fields of a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub total: Money,
    pub change: Money,
    pub status: PaymentStatus,
}

/// Computes change and status for a total and a tendered amount.
///
/// Pure and total: defined for every input pair, including zero and
/// overpayment.
///
/// ## Example
/// ```rust
/// use simplepay_core::checkout::settle;
/// use simplepay_core::money::Money;
/// use simplepay_core::types::PaymentStatus;
///
/// let s = settle(Money::from_cents(2000), Money::from_cents(2500));
/// assert_eq!(s.change.cents(), 500);
/// assert_eq!(s.status, PaymentStatus::Lunas);
/// ```
pub fn settle(total: Money, amount_paid: Money) -> Settlement {
    Settlement {
        total,
        change: (amount_paid - total).max(Money::zero()),
        status: PaymentStatus::classify(amount_paid, total),
    }
}

// =============================================================================
// Line Snapshotting
// =============================================================================

/// Freezes cart lines against the catalog into sale items.
///
/// Each line captures the product's current name and price; the sale
/// will re-total from these snapshots forever after, so later catalog
/// edits cannot rewrite it.
///
/// ## Errors
/// `ProductNotFound` for a dangling line under
/// [`MissingProductPolicy::Reject`]; under `SkipLine` the line is
/// dropped instead.
pub fn snapshot_items(
    items: &[CartItem],
    catalog: &Catalog,
    policy: MissingProductPolicy,
) -> CoreResult<Vec<SaleItem>> {
    let mut snapshots = Vec::with_capacity(items.len());

    for item in items {
        let product = match catalog.get(&item.product_id) {
            Some(product) => product,
            None => match policy {
                MissingProductPolicy::Reject => {
                    return Err(CoreError::ProductNotFound(item.product_id.clone()));
                }
                MissingProductPolicy::SkipLine => continue,
            },
        };

        snapshots.push(SaleItem {
            product_id: product.id.clone(),
            name_snapshot: product.name.clone(),
            unit_price_cents: product.price_cents,
            quantity: item.quantity,
            line_total_cents: product.price_cents * item.quantity,
        });
    }

    Ok(snapshots)
}

/// Sums line totals into the sale total.
pub fn total_of(items: &[SaleItem]) -> Money {
    items.iter().map(SaleItem::line_total).sum()
}

// =============================================================================
// Unit Tests
// =============================================================================
