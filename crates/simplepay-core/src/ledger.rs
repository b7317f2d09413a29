//! # Sales Ledger
//!
//! Historical sale records and retroactive editing.
//!
//! ## Sale Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Sale Lifecycle                                    │
//! │                                                                         │
//! │  None ──► Created(Lunas | Dp) ──► [Edited ──► Created(Lunas | Dp)]*    │
//! │                                                                         │
//! │  Terminal state is whatever the last edit produced.                    │
//! │  There is no voided or refunded state, and no delete.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The ledger is a record of what happened. Editing a sale's quantities
//! or payment NEVER replenishes or consumes catalog stock; inventory
//! reconciliation happens only at cart-time.

use crate::error::{CoreError, CoreResult};
use crate::types::Sale;

/// Append-only store of sale records with in-place edits.
#[derive(Debug, Clone, Default)]
pub struct SalesLedger {
    sales: Vec<Sale>,
}

impl SalesLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        SalesLedger { sales: Vec::new() }
    }

    /// Restores a ledger from a persisted snapshot.
    pub fn from_sales(sales: Vec<Sale>) -> Self {
        SalesLedger { sales }
    }

    /// Appends a freshly checked-out sale.
    pub fn record(&mut self, sale: Sale) {
        self.sales.push(sale);
    }

    /// Replaces the entry whose id matches `updated.id`.
    ///
    /// Recomputes nothing: callers go through
    /// [`crate::Register::update_sale`], which re-derives the dependent
    /// fields first.
    ///
    /// ## Errors
    /// `SaleNotFound` if no entry matches (the original's silent no-op,
    /// surfaced).
    pub fn update(&mut self, updated: Sale) -> CoreResult<()> {
        let existing = self
            .sales
            .iter_mut()
            .find(|s| s.id == updated.id)
            .ok_or_else(|| CoreError::SaleNotFound(updated.id.clone()))?;

        *existing = updated;
        Ok(())
    }

    /// Gets a sale by id.
    pub fn get(&self, sale_id: &str) -> Option<&Sale> {
        self.sales.iter().find(|s| s.id == sale_id)
    }

    /// All sales, oldest first.
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// Number of recorded sales.
    pub fn len(&self) -> usize {
        self.sales.len()
    }

    /// Checks if the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Payment, PaymentStatus, SaleItem};
    use chrono::Utc;

    fn sale(id: &str, total_cents: i64) -> Sale {
        Sale {
            id: id.to_string(),
            items: vec![SaleItem {
                product_id: "p-1".to_string(),
                name_snapshot: "Kaca".to_string(),
                unit_price_cents: total_cents,
                quantity: 1,
                line_total_cents: total_cents,
            }],
            total_cents,
            created_at: Utc::now(),
            payment: Payment {
                amount_paid_cents: total_cents,
                change_cents: 0,
            },
            status: PaymentStatus::Lunas,
            customer_name: String::new(),
        }
    }

    #[test]
    fn test_record_appends_in_order() {
        let mut ledger = SalesLedger::new();
        ledger.record(sale("s-1", 1000));
        ledger.record(sale("s-2", 2000));

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.sales()[0].id, "s-1");
        assert_eq!(ledger.sales()[1].id, "s-2");
    }

    #[test]
    fn test_update_replaces_matching_entry() {
        let mut ledger = SalesLedger::new();
        ledger.record(sale("s-1", 1000));

        let mut edited = sale("s-1", 1500);
        edited.customer_name = "Budi".to_string();
        ledger.update(edited).unwrap();

        let stored = ledger.get("s-1").unwrap();
        assert_eq!(stored.total_cents, 1500);
        assert_eq!(stored.customer_name, "Budi");
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_update_unknown_sale() {
        let mut ledger = SalesLedger::new();
        assert_eq!(
            ledger.update(sale("ghost", 1000)).unwrap_err(),
            CoreError::SaleNotFound("ghost".to_string())
        );
    }
}
