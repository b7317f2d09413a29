//! # Validation Module
//!
//! Input validation utilities for SimplePay.
//!
//! ## Validation Strategy
//! The product-entry and cart forms are expected to validate before calling
//! in (all numeric fields parse as non-negative numbers, name non-empty).
//! The engine validates again so the invariants hold even without UI
//! gating.
//!
//! ## Usage
//! ```rust
//! use simplepay_core::validation::{validate_product_name, validate_quantity};
//!
//! validate_product_name("Kaca Bening 5mm").unwrap();
//! validate_quantity("p-1", 5).unwrap();
//! ```

use crate::error::{CoreError, ValidationError};
use crate::types::NewProduct;
use crate::{MAX_CUSTOMER_NAME_LEN, MAX_ITEM_QUANTITY, MAX_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a customer name on a sale.
///
/// ## Rules
/// - May be empty (walk-in customer)
/// - Must be at most 100 characters
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    if name.len() > MAX_CUSTOMER_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "customer name".to_string(),
            max: MAX_CUSTOMER_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price or price-per-unit in cents.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: free items)
pub fn validate_price_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a sheet dimension (length or width).
///
/// ## Rules
/// - Must be a finite number (rejects NaN and infinities)
/// - Must be non-negative
pub fn validate_dimension(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a stock level supplied through product entry or edit.
///
/// ## Rules
/// - Must be non-negative
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::Negative {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

/// Validates a direct quantity edit on a cart entry.
///
/// Quantity 0 is handled by the caller as a removal, so it never reaches
/// this check. Returns the domain-level `InvalidQuantity` error so the
/// cart panel can surface it as-is.
pub fn validate_quantity(product_id: &str, quantity: i64) -> Result<(), CoreError> {
    if quantity < 1 || quantity > MAX_ITEM_QUANTITY {
        return Err(CoreError::InvalidQuantity {
            product_id: product_id.to_string(),
            quantity,
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates every field of a product payload.
///
/// Shared by `add_product` and `edit_product`.
pub fn validate_product_fields(product: &NewProduct) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_price_cents("price", product.price_cents)?;
    validate_price_cents("price per unit", product.price_per_unit_cents)?;
    validate_dimension("length", product.length)?;
    validate_dimension("width", product.width)?;
    validate_stock(product.stock)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
