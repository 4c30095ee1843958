//! # rechnung
//!
//! Invoice document composition for small businesses: typed business
//! records plus a layout configuration go in, one fully composed,
//! deterministic document model per order comes out, ready for a
//! rendering backend to paginate, and for a notification sender to
//! dispatch.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating
//! point. Rounding happens only at display time, in the configured
//! currency pattern.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rechnung::core::*;
//! use rechnung::document::compose;
//! use rust_decimal_macros::dec;
//!
//! let company = CompanyBuilder::new(
//!     "Musterfirma GbR",
//!     AddressBuilder::new("Berlin", "10115", "Deutschland")
//!         .street("Hauptstraße", "12")
//!         .build(),
//! )
//! .declaration("Gesellschaft bürgerlichen Rechts")
//! .add_shareholder(PartyBuilder::new("Max", "Mustermann")
//!     .contact("max@musterfirma.de", "+49 30 111").build())
//! .add_shareholder(PartyBuilder::new("Mia", "Musterfrau")
//!     .contact("mia@musterfirma.de", "+49 30 222").build())
//! .bank_account("DE89370400440532013000", "COBADEFFXXX", "Commerzbank")
//! .tax_number("12/345/67890")
//! .build();
//!
//! let customer = PartyBuilder::new("Erika", "Beispiel")
//!     .address(AddressBuilder::new("München", "80331", "Deutschland")
//!         .street("Marienplatz", "1")
//!         .build())
//!     .contact("erika@example.com", "+49 89 999")
//!     .build_customer(4711);
//!
//! let order = OrderBuilder::new("1007", NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(), customer)
//!     .add_product("Widget", dec!(9.99), 3)
//!     .add_product("Versand", dec!(4.50), 1)
//!     .build();
//!
//! let config = InvoiceConfig::default();
//! let document = compose(&config, &company, &order, order.date).unwrap();
//! assert_eq!(document.blocks.len(), 14);
//! assert_eq!(order.grand_total(), dec!(34.47));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Data model, formatting, document composition, orchestrator, batch driver |
//! | `loaders` | JSON loaders for company data, WooCommerce exports, and configuration |
//! | `notify` | Notification configuration, message assembly, sender contract |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod document;

#[cfg(feature = "core")]
pub mod batch;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "notify")]
pub mod notify;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
