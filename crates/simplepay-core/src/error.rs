//! # Error Types
//!
//! Domain-specific error types for simplepay-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  simplepay-core errors (this file)                                      │
//! │  ├── CoreError        - Domain rule violations                          │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  simplepay-storage errors (separate crate)                              │
//! │  ├── StorageError     - Slot read/write failures                        │
//! │  └── SessionError     - CoreError | StorageError at the session API     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → SessionError → caller              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, stock levels, etc.)
//! 3. Errors are enum variants, never String
//! 4. Every error is recoverable at the call boundary; none abort the process

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// The original implementation degraded silently on most of these
/// (no-op edits, zero-contribution line items). Here every failure is
/// surfaced to the caller, which decides whether to block or ignore.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Operation references a product id absent from the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Operation references a sale id absent from the ledger.
    #[error("Sale not found: {0}")]
    SaleNotFound(String),

    /// Cart operation references a product with no cart entry.
    #[error("Product {0} is not in the cart")]
    CartItemNotFound(String),

    /// The requested units exceed the catalog stock level.
    ///
    /// ## When This Occurs
    /// - Adding to cart when stock is 0
    /// - Raising a cart quantity beyond what remains in stock
    /// - A stock adjustment that would take the level negative
    ///
    /// No state is changed when this is returned; `Product.stock >= 0`
    /// stays observable at all times.
    #[error("Insufficient stock for {product_id}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: String,
        available: i64,
        requested: i64,
    },

    /// A direct quantity edit used a negative or oversized quantity.
    ///
    /// Quantity 0 is not an error: it removes the cart entry.
    #[error("Invalid quantity {quantity} for product {product_id}")]
    InvalidQuantity { product_id: String, quantity: i64 },

    /// Checkout was attempted with a non-positive payment or empty cart.
    #[error("Invalid payment: {reason}")]
    InvalidPayment { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a field doesn't meet requirements, before any
/// business logic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be non-negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value must be a finite number (dimensions reject NaN/infinity).
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
