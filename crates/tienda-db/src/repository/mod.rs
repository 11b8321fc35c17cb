//! # Repository Module
//!
//! Write operations (and their read-back) for the catalog tables.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Operation = One Statement                        │
//! │                                                                         │
//! │  Handler                                                               │
//! │       │  db.products().soft_delete(5)                                  │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │       │  conn = db.open()                                              │
//! │       │  UPDATE Producto SET estado = 0 WHERE codigo = ?1   (bound)    │
//! │       │  conn.close()                                                  │
//! │       ▼                                                                 │
//! │  DbResult<WriteOutcome>                                                │
//! │                                                                         │
//! │  • Values are always bound, never spliced into SQL text                │
//! │  • Zero matched rows on an id-targeted write → DbError::NotFound       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - register, update, soft delete
//! - [`BrandRepository`](brand::BrandRepository) - register, rename
//! - [`CategoryRepository`](category::CategoryRepository) - register, rename

pub mod brand;
pub mod category;
pub mod product;
