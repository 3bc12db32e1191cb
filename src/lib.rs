//! # cotiza
//!
//! Renders quotes, orders, and preorders from the AMAS store backend into
//! printable HTML documents for PDF rasterization, and composes the HTML email
//! alerts sent when quotes approach expiry.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Prices are stored tax-inclusive and decomposed into net + tax at render time.
//! Dates are stored in UTC and displayed in Colombian local time with fixed
//! Spanish weekday/month tables, so output never depends on the host locale.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::Utc;
//! use cotiza::core::*;
//! use cotiza::document;
//! use rust_decimal_macros::dec;
//!
//! let record = Record {
//!     record_type: RecordType::Quote,
//!     number: "COT-0042".into(),
//!     created_at: Utc::now(),
//!     client: ClientInfo {
//!         names: Some("María".into()),
//!         last_names: Some("Gómez".into()),
//!         ..ClientInfo::default()
//!     },
//!     company: CompanyInfo::amas(),
//!     content: None,
//!     line_items: vec![LineItem {
//!         name: "Tornillo 1/4".into(),
//!         quantity: 2,
//!         tax_rate_percent: dec!(19),
//!         locations: vec![StockLocation { unit_price_incl_tax: dec!(1190) }],
//!     }],
//! };
//!
//! let html = document::render_document(&record, document::DEFAULT_LOGO_DATA_URI, Utc::now()).unwrap();
//! assert!(html.contains("$ 2,380.00"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Record types, money/tax arithmetic, HTML tree + serializer, document and notification composers |
//! | `store` | MongoDB record fetch and expiring-quote query |
//! | `mail` | SMTP alert delivery with inline logo attachment |
//! | `pdf` | External HTML→PDF renderer invocation |
//! | `cli` | `render` and `expiry-alert` binaries, env config |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod document;

#[cfg(feature = "core")]
pub mod html;

#[cfg(feature = "core")]
pub mod notify;

#[cfg(feature = "pdf")]
pub mod pdf;

#[cfg(feature = "store")]
pub mod store;

#[cfg(feature = "cli")]
pub mod config;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
