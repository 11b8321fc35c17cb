//! # Domain Types
//!
//! Entity models used by the admin write-path.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐   ┌─────────────────┐   ┌─────────────────┐  │
//! │  │      Product         │   │     Brand       │   │    Category     │  │
//! │  │  ──────────────────  │   │  ─────────────  │   │  ─────────────  │  │
//! │  │  id (codigo)         │   │  id             │   │  id             │  │
//! │  │  description         │   │  name (marca)   │   │  name           │  │
//! │  │  unit_cost_cents     │   └────────▲────────┘   └────────▲────────┘  │
//! │  │  sale_price_cents    │            │                     │           │
//! │  │  brand_id ───────────┼────────────┘                     │           │
//! │  │  category_id ────────┼──────────────────────────────────┘           │
//! │  │  active (estado)     │                                              │
//! │  │  version             │                                              │
//! │  └──────────────────────┘                                              │
//! │                                                                         │
//! │  ProductDraft  - validated form input for register/update              │
//! │  WriteOutcome  - typed result of every write operation                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Column Mapping
//! The database keeps the storefront's original table and column names
//! (`Producto.codigo`, `marcaProd.marca`, ...). The repositories alias them to
//! the field names below, so these structs can derive `FromRow` directly.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Surrogate key (`codigo`).
    pub id: i64,

    /// Display text (`descripcion`).
    pub description: String,

    /// Unit cost in cents (`precioUnitario`).
    pub unit_cost_cents: i64,

    /// Sale price in cents (`precioVenta`).
    pub sale_price_cents: i64,

    /// Brand reference (`idmarcaProd`).
    pub brand_id: i64,

    /// Category reference (`idCategoriaProd`).
    pub category_id: i64,

    /// Whether the product is active (`estado`, soft delete).
    pub active: bool,

    /// Incremented by every update, used for optimistic concurrency.
    pub version: i64,
}

impl Product {
    /// Returns the unit cost as Money.
    #[inline]
    pub fn unit_cost(&self) -> Money {
        Money::from_cents(self.unit_cost_cents)
    }

    /// Returns the sale price as Money.
    #[inline]
    pub fn sale_price(&self) -> Money {
        Money::from_cents(self.sale_price_cents)
    }

}

/// Validated input for registering or overwriting a product.
///
/// Built by [`crate::validation::parse_product_draft`]; every field has
/// already passed its numeric and length checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub description: String,
    pub unit_cost: Money,
    pub sale_price: Money,
    pub brand_id: i64,
    pub category_id: i64,
}

// =============================================================================
// Brand / Category
// =============================================================================

/// A product brand (`marcaProd`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Brand {
    pub id: i64,
    pub name: String,
}

/// A product category (`categoriaProd`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    pub name: String,
}

// =============================================================================
// Write Outcome
// =============================================================================

/// Result of a successful write operation.
///
/// Failures are reported through the repository's error type, so holding a
/// `WriteOutcome` always means the statement applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteOutcome {
    /// Id of the row written (the new identity for inserts).
    pub id: i64,

    /// Rows matched by the statement.
    pub rows_affected: u64,
}

impl WriteOutcome {
    pub fn new(id: i64, rows_affected: u64) -> Self {
        WriteOutcome { id, rows_affected }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product {
            id: 1,
            description: "Widget".to_string(),
            unit_cost_cents: 1000,
            sale_price_cents: 1500,
            brand_id: 1,
            category_id: 2,
            active: true,
            version: 0,
        }
    }

    #[test]
    fn test_product_money_accessors() {
        let product = widget();
        assert_eq!(product.unit_cost().to_string(), "10.00");
        assert_eq!(product.sale_price().to_string(), "15.00");
    }
}
