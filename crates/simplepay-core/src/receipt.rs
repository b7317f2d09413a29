//! # Receipt Projection
//!
//! Read-only projection over a sale and the shop profile, consumed by the
//! receipt viewer. Every monetary and name field comes from the sale's
//! frozen snapshots, never the live catalog, so a receipt re-printed
//! months later matches what the customer was handed.
//!
//! Formatting and printing are presentation concerns and live outside
//! this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{PaymentStatus, Sale, ShopInfo};

/// One printable line of a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub line_total_cents: i64,
}

/// The receipt data for a single sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Shop header fields.
    pub shop_name: String,
    pub shop_address: String,
    pub shop_phone: String,
    pub shop_email: String,

    /// Short reference printed on the slip (first 8 chars of the sale id).
    pub reference: String,

    pub timestamp: DateTime<Utc>,

    /// Empty for walk-in customers.
    pub customer_name: String,

    pub lines: Vec<ReceiptLine>,

    pub total_cents: i64,
    pub amount_paid_cents: i64,
    pub change_cents: i64,
    pub status: PaymentStatus,
}

impl Receipt {
    /// Projects a sale against the shop profile.
    pub fn for_sale(sale: &Sale, shop: &ShopInfo) -> Self {
        Receipt {
            shop_name: shop.name.clone(),
            shop_address: shop.address.clone(),
            shop_phone: shop.phone.clone(),
            shop_email: shop.email.clone(),
            reference: sale.id.chars().take(8).collect(),
            timestamp: sale.created_at,
            customer_name: sale.customer_name.clone(),
            lines: sale
                .items
                .iter()
                .map(|item| ReceiptLine {
                    name: item.name_snapshot.clone(),
                    quantity: item.quantity,
                    unit_price_cents: item.unit_price_cents,
                    line_total_cents: item.line_total_cents,
                })
                .collect(),
            total_cents: sale.total_cents,
            amount_paid_cents: sale.payment.amount_paid_cents,
            change_cents: sale.payment.change_cents,
            status: sale.status,
        }
    }

    /// Sum of the displayed lines.
    ///
    /// Always equals `total_cents`: both derive from the same frozen
    /// line totals. Kept as a method so tests can pin the equality.
    pub fn displayed_total_cents(&self) -> i64 {
        self.lines.iter().map(|l| l.line_total_cents).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
