//! # tienda-core: Pure Domain Logic for Tienda Admin
//!
//! Entity models, money handling and form validation for the storefront
//! admin panel. Nothing in this crate touches a database or a socket.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Tienda Admin Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   admin-web (axum handlers)                     │   │
//! │  │   POST /products/register ──► parse form ──► redirect          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tienda-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   money   │  │ validation│                  │   │
//! │  │   │  Product  │  │   Money   │  │ parse_id  │                  │   │
//! │  │   │  Brand    │  │  (cents)  │  │ names     │                  │   │
//! │  │   │  Category │  │           │  │ prices    │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  tienda-db (Database Layer)                     │   │
//! │  │          SQLite statements, migrations, repositories            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entity models (Product, Brand, Category) and write results
//! - [`money`] - Money type stored as integer cents (no floating point!)
//! - [`error`] - Validation error type
//! - [`validation`] - Form value parsing and rules
//!
//! ## Example Usage
//!
//! ```rust
//! use tienda_core::validation::parse_money;
//!
//! let cost = parse_money("unit_cost", "10.00").unwrap();
//! assert_eq!(cost.cents(), 1000);
//! assert_eq!(cost.to_string(), "10.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product description.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Maximum length of a brand or category name.
pub const MAX_NAME_LEN: usize = 100;
