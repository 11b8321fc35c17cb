//! # Validation Module
//!
//! Turns raw form text into values the write operations can trust.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTML form                                                    │
//! │  └── required / type=number hints (not trusted)                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: axum handler                                                 │
//! │  ├── Form<T> extraction (all fields arrive as text)                    │
//! │  └── THIS MODULE: numeric parsing, length rules                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / CHECK constraints                                      │
//! │  └── Foreign key constraints (brand, category)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Text values are never trimmed or rewritten here: a name containing quotes
//! or `;` reaches the database exactly as typed.
//!
//! ## Usage
//! ```rust
//! use tienda_core::validation::{parse_id, parse_money};
//!
//! assert_eq!(parse_id("id", "5").unwrap(), 5);
//! assert!(parse_money("sale_price", "abc").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::{Money, ParseMoneyError};
use crate::types::ProductDraft;
use crate::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn validate_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a product description.
///
/// ## Rules
/// - Must not be blank
/// - At most [`MAX_DESCRIPTION_LEN`] characters
pub fn validate_description(description: &str) -> ValidationResult<()> {
    validate_text("description", description, MAX_DESCRIPTION_LEN)
}

/// Validates a brand or category name.
///
/// ## Rules
/// - Must not be blank
/// - At most [`MAX_NAME_LEN`] characters
///
/// ## Example
/// ```rust
/// use tienda_core::validation::validate_name;
///
/// assert!(validate_name("O'Brien; DROP TABLE marcaProd").is_ok());
/// assert!(validate_name("   ").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    validate_text("name", name, MAX_NAME_LEN)
}

// =============================================================================
// Numeric Parsers
// =============================================================================

/// Parses a non-negative decimal amount with at most two decimals.
///
/// ## Example
/// ```rust
/// use tienda_core::validation::parse_money;
///
/// assert_eq!(parse_money("unit_cost", "10.00").unwrap().cents(), 1000);
/// assert!(parse_money("unit_cost", "-1").is_err());
/// ```
pub fn parse_money(field: &str, raw: &str) -> ValidationResult<Money> {
    raw.parse::<Money>().map_err(|err| match err {
        ParseMoneyError::Empty => ValidationError::Required {
            field: field.to_string(),
        },
        ParseMoneyError::Negative => ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        },
        other => ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: other.to_string(),
        },
    })
}

/// Parses a row identifier.
///
/// ## Rules
/// - Must be an integer (surrounding whitespace allowed)
/// - Must be positive: identity columns start at 1
pub fn parse_id(field: &str, raw: &str) -> ValidationResult<i64> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let id: i64 = raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a whole number".to_string(),
    })?;

    if id <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(id)
}

/// Parses an optional row version. Blank means "no version check".
pub fn parse_version(raw: Option<&str>) -> ValidationResult<Option<i64>> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };

    let version: i64 = raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "version".to_string(),
        reason: "must be a whole number".to_string(),
    })?;

    if version < 0 {
        return Err(ValidationError::OutOfRange {
            field: "version".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(Some(version))
}

// =============================================================================
// Composite
// =============================================================================

/// Validates every product field and builds a [`ProductDraft`].
///
/// Fields are checked in form order; the first failure is returned.
pub fn parse_product_draft(
    description: &str,
    unit_cost: &str,
    sale_price: &str,
    brand_id: &str,
    category_id: &str,
) -> ValidationResult<ProductDraft> {
    validate_description(description)?;

    Ok(ProductDraft {
        description: description.to_string(),
        unit_cost: parse_money("unit_cost", unit_cost)?,
        sale_price: parse_money("sale_price", sale_price)?,
        brand_id: parse_id("brand_id", brand_id)?,
        category_id: parse_id("category_id", category_id)?,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_description() {
        assert!(validate_description("Widget").is_ok());
        assert!(validate_description("").is_err());
        assert!(validate_description("   ").is_err());
        assert!(validate_description(&"A".repeat(MAX_DESCRIPTION_LEN)).is_ok());
        assert!(validate_description(&"A".repeat(MAX_DESCRIPTION_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_name_counts_chars_not_bytes() {
        assert!(validate_name(&"ñ".repeat(MAX_NAME_LEN)).is_ok());
        assert!(validate_name(&"ñ".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_parse_money_maps_errors_to_fields() {
        assert_eq!(parse_money("unit_cost", "10.00").unwrap().cents(), 1000);

        let err = parse_money("unit_cost", "").unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));

        let err = parse_money("sale_price", "ten").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
        assert_eq!(err.field(), "sale_price");

        let err = parse_money("sale_price", "-3").unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("id", "5").unwrap(), 5);
        assert_eq!(parse_id("id", " 42 ").unwrap(), 42);

        assert!(matches!(
            parse_id("id", "").unwrap_err(),
            ValidationError::Required { .. }
        ));
        assert!(matches!(
            parse_id("id", "5 OR 1=1").unwrap_err(),
            ValidationError::InvalidFormat { .. }
        ));
        assert!(matches!(
            parse_id("id", "0").unwrap_err(),
            ValidationError::MustBePositive { .. }
        ));
        assert!(parse_id("id", "-7").is_err());
        assert!(parse_id("id", "1.5").is_err());
    }

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version(None).unwrap(), None);
        assert_eq!(parse_version(Some("")).unwrap(), None);
        assert_eq!(parse_version(Some("3")).unwrap(), Some(3));
        assert!(parse_version(Some("x")).is_err());
        assert!(parse_version(Some("-1")).is_err());
    }

    #[test]
    fn test_parse_product_draft() {
        let draft = parse_product_draft("Widget", "10.00", "15.00", "1", "2").unwrap();
        assert_eq!(draft.description, "Widget");
        assert_eq!(draft.unit_cost.cents(), 1000);
        assert_eq!(draft.sale_price.cents(), 1500);
        assert_eq!(draft.brand_id, 1);
        assert_eq!(draft.category_id, 2);
    }

    #[test]
    fn test_parse_product_draft_reports_first_bad_field() {
        let err = parse_product_draft("Widget", "10.00", "cheap", "x", "2").unwrap_err();
        assert_eq!(err.field(), "sale_price");

        let err = parse_product_draft("Widget", "10.00", "15.00", "1", "two").unwrap_err();
        assert_eq!(err.field(), "category_id");
    }
}
